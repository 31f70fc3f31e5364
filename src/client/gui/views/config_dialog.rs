use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{dialog_appearance, ACCENT_COLOR, BOLD_FONT, EMOJI_FONT, ERROR_COLOR, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::models::messages::Message;
use crate::client::models::ui_state::ConfigForm;

fn field<'a>(label: &'a str, hint: &'a str, placeholder: &'a str, value: &'a str, on_input: fn(String) -> Message) -> Element<'a, Message> {
    Column::new()
        .spacing(6)
        .push(Text::new(label).size(14).style(TEXT_PRIMARY))
        .push(
            TextInput::new(placeholder, value)
                .on_input(on_input)
                .on_submit(Message::SaveConfig)
                .padding(10)
                .size(14),
        )
        .push(Text::new(hint).size(12).style(TEXT_SECONDARY))
        .into()
}

/// Settings dialog body, shown through the modal overlay in `app.rs`.
pub fn view(form: &ConfigForm, is_configured: bool) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(Text::new("⚙️").font(EMOJI_FONT).size(24))
        .push(
            Column::new()
                .push(Text::new("Configuration").font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
                .push(Text::new("Set up your API connection").size(13).style(TEXT_SECONDARY)),
        )
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Button::new(Text::new("✕").size(14))
                .on_press(Message::CloseConfigDialog)
                .style(iced::theme::Button::Text),
        );

    let mut content = Column::new()
        .spacing(18)
        .push(header)
        .push(field(
            "Base URL",
            "Scheme, host and port of the monitored application",
            "http://localhost:8080",
            &form.base_url,
            Message::ConfigBaseUrlChanged,
        ))
        .push(field(
            "API Base Path",
            "Prefix of the versioned API routes (actuator and docs live at the root)",
            "/api/v1",
            &form.api_base_path,
            Message::ConfigApiBasePathChanged,
        ));

    if let Some(error) = &form.error {
        content = content.push(Text::new(error.as_str()).size(13).style(ERROR_COLOR));
    }

    let mut actions = Row::new().spacing(10).align_items(Alignment::Center);
    if is_configured {
        actions = actions.push(
            Button::new(Text::new("Reset"))
                .on_press(Message::ResetConfig)
                .style(iced::theme::Button::Destructive)
                .padding([8, 14]),
        );
    }
    actions = actions
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Button::new(Text::new("Cancel"))
                .on_press(Message::CloseConfigDialog)
                .style(iced::theme::Button::Secondary)
                .padding([8, 14]),
        )
        .push(
            Button::new(Text::new("Save Configuration").font(BOLD_FONT))
                .on_press(Message::SaveConfig)
                .style(iced::theme::Button::Primary)
                .padding([8, 14]),
        );

    content = content
        .push(Text::new("Saved locally and reused on the next launch.").size(12).style(ACCENT_COLOR))
        .push(actions);

    Container::new(content)
        .width(Length::Fixed(460.0))
        .padding(24)
        .style(iced::theme::Container::Custom(Box::new(dialog_appearance)))
        .into()
}
