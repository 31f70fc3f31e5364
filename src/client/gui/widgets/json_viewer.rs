//! Generic viewer for endpoint payloads.
//!
//! Renders exactly one of: loading indicator, error panel, empty notice, or
//! the line-numbered document with its copy button.

use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Element, Font, Length};

use crate::client::gui::style::{
    card_appearance, error_card_appearance, token_color, ACCENT_COLOR, BOLD_FONT, ERROR_COLOR, TEXT_SECONDARY,
};
use crate::client::models::fetch_state::FetchResult;
use crate::client::models::messages::Message;
use crate::client::services::json_format::{highlight_line, JsonDocument};
use crate::common::endpoints::Endpoint;

/// Which of the four states a result renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    Loading,
    Error,
    Empty,
    Content,
}

impl ViewerState {
    pub fn of(result: Option<&FetchResult>) -> Self {
        match result {
            Some(FetchResult::Pending) => ViewerState::Loading,
            Some(FetchResult::Failed(_)) => ViewerState::Error,
            Some(FetchResult::Ready(doc)) if !doc.is_empty() => ViewerState::Content,
            _ => ViewerState::Empty,
        }
    }
}

fn panel<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(24)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

fn document_view(endpoint: Endpoint, doc: &JsonDocument, copied: bool) -> Element<'_, Message> {
    let caption = if doc.value().is_string() { "Text Response" } else { "JSON Response" };
    let copy_label = if copied { "✓ Copied!" } else { "Copy" };
    let header = Row::new()
        .align_items(Alignment::Center)
        .push(Text::new(caption).font(Font::MONOSPACE).size(12).style(TEXT_SECONDARY))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Button::new(Text::new(copy_label).font(Font::MONOSPACE).size(12))
                .on_press(Message::CopyDocument(endpoint))
                .style(iced::theme::Button::Secondary)
                .padding([6, 12]),
        );

    let lines = doc.numbered_lines().fold(Column::new(), |col, (number, line)| {
        let gutter = Text::new(format!("{number:>4}"))
            .font(Font::MONOSPACE)
            .size(13)
            .style(TEXT_SECONDARY);
        let spans = highlight_line(line).into_iter().fold(Row::new(), |row, span| {
            row.push(Text::new(span.text).font(Font::MONOSPACE).size(13).style(token_color(span.kind)))
        });
        col.push(Row::new().spacing(16).push(gutter).push(spans))
    });

    Container::new(
        Column::new()
            .spacing(12)
            .push(header)
            .push(Scrollable::new(lines.padding([0, 8])).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(16)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

pub fn view(endpoint: Endpoint, result: Option<&FetchResult>, copied: bool) -> Element<'_, Message> {
    match (ViewerState::of(result), result) {
        (ViewerState::Content, Some(FetchResult::Ready(doc))) => document_view(endpoint, doc, copied),
        (ViewerState::Loading, _) => panel(
            Row::new()
                .spacing(12)
                .align_items(Alignment::Center)
                .push(Text::new("● ● ●").size(16).style(ACCENT_COLOR))
                .push(Text::new("Loading...").font(Font::MONOSPACE).style(TEXT_SECONDARY)),
        ),
        (ViewerState::Error, Some(FetchResult::Failed(message))) => Container::new(
            Row::new()
                .spacing(12)
                .push(Text::new("!").font(BOLD_FONT).size(18).style(ERROR_COLOR))
                .push(
                    Column::new()
                        .spacing(4)
                        .push(Text::new("Error Loading Data").font(BOLD_FONT).style(ERROR_COLOR))
                        .push(Text::new(message.as_str()).font(Font::MONOSPACE).size(13).style(TEXT_SECONDARY)),
                ),
        )
        .width(Length::Fill)
        .padding(24)
        .style(iced::theme::Container::Custom(Box::new(error_card_appearance)))
        .into(),
        _ => panel(
            Container::new(Text::new("No data available").font(Font::MONOSPACE).style(TEXT_SECONDARY))
                .width(Length::Fill)
                .center_x(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn states_are_mutually_exclusive() {
        assert_eq!(ViewerState::of(None), ViewerState::Empty);
        assert_eq!(ViewerState::of(Some(&FetchResult::Pending)), ViewerState::Loading);
        assert_eq!(ViewerState::of(Some(&FetchResult::Failed("x".into()))), ViewerState::Error);
        let null = FetchResult::Ready(JsonDocument::from_value(json!(null)));
        assert_eq!(ViewerState::of(Some(&null)), ViewerState::Empty);
        let data = FetchResult::Ready(JsonDocument::from_value(json!({"status": "UP"})));
        assert_eq!(ViewerState::of(Some(&data)), ViewerState::Content);
    }
}
