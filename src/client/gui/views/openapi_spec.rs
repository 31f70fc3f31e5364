use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Font, Length};

use crate::client::gui::style::{
    card_appearance, ACCENT_COLOR, BOLD_FONT, EMOJI_FONT, ERROR_COLOR, TEXT_PRIMARY, TEXT_SECONDARY, WARNING_COLOR,
};
use crate::client::gui::views::layout::page;
use crate::client::gui::widgets::{alert, json_viewer};
use crate::client::models::app_state::DashboardState;
use crate::client::models::fetch_state::FetchResult;
use crate::client::models::messages::Message;
use crate::client::models::spec_summary::SpecSummary;
use crate::common::endpoints::Endpoint;

fn stat<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(2)
        .align_items(Alignment::Center)
        .push(Text::new(value).font(BOLD_FONT).size(22).style(ACCENT_COLOR))
        .push(Text::new(label).size(12).style(TEXT_SECONDARY))
        .width(Length::FillPortion(1))
        .into()
}

fn summary_card(summary: SpecSummary) -> Element<'static, Message> {
    Container::new(
        Column::new()
            .spacing(12)
            .push(
                Row::new()
                    .spacing(12)
                    .align_items(Alignment::Center)
                    .push(Text::new(summary.title).font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
                    .push(Text::new(format!("v{}", summary.version)).font(Font::MONOSPACE).size(13).style(ACCENT_COLOR)),
            )
            .push(Text::new(summary.description).size(14).style(TEXT_SECONDARY))
            .push(
                Row::new()
                    .push(stat("Paths", summary.path_count.to_string()))
                    .push(stat("Schemas", summary.schema_count.to_string()))
                    .push(stat("Servers", summary.server_count.to_string())),
            ),
    )
    .width(Length::Fill)
    .padding(20)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

fn status_label(result: Option<&FetchResult>) -> (&'static str, iced::Color) {
    match result {
        Some(FetchResult::Pending) | None => ("● Loading", WARNING_COLOR),
        Some(FetchResult::Failed(_)) => ("● Error", ERROR_COLOR),
        Some(FetchResult::Ready(_)) => ("● Active", ACCENT_COLOR),
    }
}

fn toolbar<'a>(state: &'a DashboardState, result: Option<&'a FetchResult>) -> Element<'a, Message> {
    let (status, color) = status_label(result);
    let ready = matches!(result, Some(FetchResult::Ready(_)));
    let pending = result.map_or(true, |r| r.is_pending());

    let refresh = Button::new(Text::new("Refresh").size(14))
        .style(iced::theme::Button::Secondary)
        .padding([6, 12]);
    let download = Button::new(Text::new("Download JSON").size(14))
        .style(iced::theme::Button::Primary)
        .padding([6, 12]);

    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new(Endpoint::SwaggerJson.category().glyph()).font(EMOJI_FONT).size(24))
            .push(
                Column::new()
                    .spacing(4)
                    .push(
                        Row::new()
                            .spacing(10)
                            .push(Text::new(Endpoint::SwaggerJson.label()).font(BOLD_FONT).size(18).style(TEXT_PRIMARY))
                            .push(Text::new(status).font(Font::MONOSPACE).size(12).style(color)),
                    )
                    .push(
                        Text::new(state.store.resolve(Endpoint::SwaggerJson.path()))
                            .font(Font::MONOSPACE)
                            .size(13)
                            .style(TEXT_SECONDARY),
                    ),
            )
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(
                Button::new(Text::new("Copy URL").size(14))
                    .on_press(Message::CopyUrl(Endpoint::SwaggerJson))
                    .style(iced::theme::Button::Secondary)
                    .padding([6, 12]),
            )
            .push(if pending { refresh } else { refresh.on_press(Message::RefreshSpec) })
            .push(if ready { download.on_press(Message::DownloadSpec) } else { download }),
    )
    .width(Length::Fill)
    .padding(16)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

pub fn view(state: &DashboardState) -> Element<'_, Message> {
    if !state.store.is_configured() {
        return page(state, "OpenAPI", "Specification", alert::config_required());
    }

    let result = state.result(Endpoint::SwaggerJson);
    let mut body = Column::new().spacing(16).push(toolbar(state, result));
    if let Some(summary) = match result {
        Some(FetchResult::Ready(doc)) => SpecSummary::from_value(doc.value()),
        _ => None,
    } {
        body = body.push(summary_card(summary));
    }
    body = body.push(json_viewer::view(
        Endpoint::SwaggerJson,
        result,
        state.copy.is_copied(Endpoint::SwaggerJson),
    ));

    page(state, "OpenAPI", "Specification", body.into())
}
