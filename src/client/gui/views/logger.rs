use iced::widget::{Container, Row, Space, Text};
use iced::{Color, Element, Length};

use crate::client::gui::style::EMOJI_FONT;
use crate::client::models::messages::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

/// One notice in the bar at the top of the window.
#[derive(Debug, Clone)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }

    pub fn emoji(&self) -> &'static str {
        match self.level {
            LogLevel::Success => "✅",
            LogLevel::Error => "❌",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
        }
    }

    pub fn color(&self) -> Color {
        match self.level {
            LogLevel::Success => Color::from_rgb(0.0, 0.6, 0.3),
            LogLevel::Error => Color::from_rgb(0.8, 0.15, 0.15),
            LogLevel::Info => Color::from_rgb(0.15, 0.45, 0.8),
            LogLevel::Warning => Color::from_rgb(0.8, 0.6, 0.0),
        }
    }
}

pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    // Only the latest notice is shown
    if let Some(log) = messages.last() {
        let bg_color = log.color();
        Container::new(
            Row::new()
                .spacing(12)
                .push(Text::new(log.emoji()).font(EMOJI_FONT).size(18).style(Color::WHITE))
                .push(Text::new(&log.message).size(16).style(Color::WHITE)),
        )
        .padding([10, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bg_color)),
                text_color: Some(Color::WHITE),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                shadow: iced::Shadow {
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                },
            }
        })))
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    }
}
