// Page chrome shared by every route: header, rain band, notice bar
use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Font, Length};

use crate::client::gui::style::{bg_main_appearance, header_appearance, ACCENT_COLOR, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::gui::views::logger::logger_view;
use crate::client::models::app_state::DashboardState;
use crate::client::models::connection::Route;
use crate::client::models::messages::Message;

fn header<'a>(state: &'a DashboardState, title: &'a str, accent: &'a str) -> Element<'a, Message> {
    let mut left = Row::new().spacing(16).align_items(Alignment::Center);
    if state.route != Route::Dashboard {
        left = left.push(
            Button::new(Text::new("← Back").size(14))
                .on_press(Message::Navigate(Route::Dashboard))
                .style(iced::theme::Button::Secondary)
                .padding([6, 12]),
        );
    }
    left = left
        .push(Text::new(">_").font(Font::MONOSPACE).size(22).style(ACCENT_COLOR))
        .push(Text::new(title).font(BOLD_FONT).size(22).style(TEXT_PRIMARY))
        .push(Text::new(accent).font(BOLD_FONT).size(22).style(ACCENT_COLOR));

    let right = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(
            Text::new(state.now.format("%H:%M:%S").to_string())
                .font(Font::MONOSPACE)
                .size(14)
                .style(TEXT_SECONDARY),
        )
        .push(
            Button::new(Text::new("Settings").size(14))
                .on_press(Message::OpenConfigDialog)
                .style(iced::theme::Button::Secondary)
                .padding([6, 12]),
        );

    Container::new(
        Row::new()
            .align_items(Alignment::Center)
            .push(left)
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(right),
    )
    .padding([16, 24])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(header_appearance)))
    .into()
}

/// Wraps a page body with the common chrome.
pub fn page<'a>(state: &'a DashboardState, title: &'a str, accent: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    let mut column = Column::new().push(header(state, title, accent));
    if state.settings.animations {
        column = column.push(Container::new(state.rain.view()).width(Length::Fill).padding([0, 24]));
    }
    if !state.logger.is_empty() {
        column = column.push(Container::new(logger_view(&state.logger)).width(Length::Fill).padding([8, 24, 0, 24]));
    }
    column = column.push(Container::new(body).width(Length::Fill).height(Length::Fill).padding([16, 24]));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
