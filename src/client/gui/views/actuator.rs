use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Font, Length};

use crate::client::gui::style::{card_appearance, ACCENT_COLOR, BOLD_FONT, EMOJI_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::gui::views::layout::page;
use crate::client::gui::widgets::{alert, json_viewer};
use crate::client::models::app_state::DashboardState;
use crate::client::models::messages::Message;
use crate::common::endpoints::Endpoint;

const TABS_PER_ROW: usize = 5;

fn tab_bar(tabs: &[Endpoint], active: Endpoint) -> Element<'static, Message> {
    tabs.chunks(TABS_PER_ROW)
        .fold(Column::new().spacing(8), |col, chunk| {
            let row = chunk.iter().fold(Row::new().spacing(8), |row, &endpoint| {
                let style = if endpoint == active {
                    iced::theme::Button::Primary
                } else {
                    iced::theme::Button::Secondary
                };
                row.push(
                    Button::new(
                        Row::new()
                            .spacing(8)
                            .align_items(Alignment::Center)
                            .push(Text::new(endpoint.category().glyph()).font(EMOJI_FONT).size(14))
                            .push(Text::new(endpoint.label()).size(14)),
                    )
                    .on_press(Message::SelectTab(endpoint))
                    .style(style)
                    .width(Length::FillPortion(1))
                    .padding([8, 12]),
                )
            });
            col.push(row)
        })
        .into()
}

fn endpoint_header(state: &DashboardState, endpoint: Endpoint) -> Element<'_, Message> {
    let updated = state
        .router
        .cache()
        .updated_at(endpoint)
        .map(|t| format!("Last fetched {}", t.format("%H:%M:%S")))
        .unwrap_or_else(|| "Not fetched yet".to_string());
    let loading = state.router.result(endpoint).map_or(false, |r| r.is_pending());

    let refresh = Button::new(Text::new(if loading { "Loading..." } else { "Refresh" }).size(14))
        .style(iced::theme::Button::Secondary)
        .padding([6, 12]);
    let refresh = if loading { refresh } else { refresh.on_press(Message::RefreshActiveTab) };

    Container::new(
        Row::new()
            .spacing(14)
            .align_items(Alignment::Center)
            .push(Text::new(endpoint.category().glyph()).font(EMOJI_FONT).size(28))
            .push(
                Column::new()
                    .spacing(4)
                    .push(
                        Row::new()
                            .spacing(10)
                            .align_items(Alignment::Center)
                            .push(Text::new(endpoint.label()).font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
                            .push(Text::new(endpoint.path()).font(Font::MONOSPACE).size(13).style(TEXT_SECONDARY)),
                    )
                    .push(Text::new(state.store.resolve(endpoint.path())).font(Font::MONOSPACE).size(13).style(ACCENT_COLOR))
                    .push(Text::new(updated).size(12).style(TEXT_SECONDARY)),
            )
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(
                Button::new(Text::new("Copy URL").size(14))
                    .on_press(Message::CopyUrl(endpoint))
                    .style(iced::theme::Button::Secondary)
                    .padding([6, 12]),
            )
            .push(refresh),
    )
    .width(Length::Fill)
    .padding(16)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

pub fn view(state: &DashboardState) -> Element<'_, Message> {
    let active = state.router.active();
    let mut body = Column::new()
        .spacing(16)
        .push(tab_bar(state.router.tabs(), active));

    if !state.store.is_configured() {
        body = body.push(alert::config_required());
    }
    body = body
        .push(endpoint_header(state, active))
        .push(json_viewer::view(active, state.result(active), state.copy.is_copied(active)));

    page(state, "Actuator", "Endpoints", body.into())
}
