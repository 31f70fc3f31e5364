// Alert panel for pages that cannot show data yet
use iced::widget::{Button, Column, Container, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{card_appearance, BOLD_FONT, EMOJI_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::models::messages::Message;

pub fn view<'a>(icon: &'a str, title: &'a str, detail: &'a str, action: Option<(&'a str, Message)>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(Text::new(icon).font(EMOJI_FONT).size(40))
        .push(Text::new(title).font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
        .push(Text::new(detail).size(14).style(TEXT_SECONDARY));
    if let Some((label, message)) = action {
        column = column.push(
            Button::new(Text::new(label).font(BOLD_FONT))
                .on_press(message)
                .style(iced::theme::Button::Primary)
                .padding([8, 16]),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(40)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

/// Shown wherever a page needs a backend before it can fetch anything.
pub fn config_required<'a>() -> Element<'a, Message> {
    view(
        "⚙️",
        "Configuration Required",
        "Set your base URL and API path to start exploring the backend.",
        Some(("Open Configuration", Message::OpenConfigDialog)),
    )
}
