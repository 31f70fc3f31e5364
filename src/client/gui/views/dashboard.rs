use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Element, Font, Length};

use crate::client::gui::style::{card_appearance, ACCENT_COLOR, BOLD_FONT, EMOJI_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::gui::views::layout::page;
use crate::client::models::app_state::DashboardState;
use crate::client::models::connection::Route;
use crate::client::models::messages::Message;
use crate::common::endpoints::Endpoint;

fn format_uptime(secs: u64) -> String {
    format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
}

fn status_item<'a>(icon: &'a str, label: &'a str, value: String) -> Element<'a, Message> {
    Container::new(
        Row::new()
            .spacing(14)
            .align_items(Alignment::Center)
            .push(Text::new(icon).font(EMOJI_FONT).size(22))
            .push(
                Column::new()
                    .spacing(2)
                    .push(Text::new(label).size(12).style(TEXT_SECONDARY))
                    .push(Text::new(value).font(Font::MONOSPACE).size(15).style(TEXT_PRIMARY)),
            ),
    )
    .width(Length::FillPortion(1))
    .padding(16)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

// Endpoint card with icon, title, description and a single action
fn api_card<'a>(
    icon: &'a str,
    title: &'a str,
    detail: &'a str,
    badge: &'a str,
    btn_label: &'a str,
    action: Message,
) -> Element<'a, Message> {
    let badge_color = if badge == "active" { ACCENT_COLOR } else { TEXT_SECONDARY };
    let title_row = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(Text::new(icon).font(EMOJI_FONT).size(24))
        .push(Text::new(title).font(BOLD_FONT).size(18).style(TEXT_PRIMARY))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(Text::new(format!("● {badge}")).font(Font::MONOSPACE).size(12).style(badge_color));

    Container::new(
        Column::new()
            .spacing(14)
            .padding(20)
            .push(title_row)
            .push(Text::new(detail).size(14).style(TEXT_SECONDARY))
            .push(
                Button::new(Text::new(btn_label).font(BOLD_FONT).size(14))
                    .on_press(action)
                    .style(iced::theme::Button::Primary)
                    .padding([8, 14]),
            ),
    )
    .width(Length::FillPortion(1))
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

pub fn view(state: &DashboardState) -> Element<'_, Message> {
    let configured = state.store.is_configured();
    let badge = if configured { "active" } else { "config needed" };

    let hero = Column::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(
            Row::new()
                .push(Text::new("Welcome to ").font(BOLD_FONT).size(40).style(TEXT_PRIMARY))
                .push(Text::new("Nodeboot").font(BOLD_FONT).size(40).style(ACCENT_COLOR)),
        )
        .push(state.typewriter.view(ACCENT_COLOR));

    let target = state
        .config()
        .map(|c| c.base_url)
        .unwrap_or_else(|| "Not configured".to_string());
    let status = Row::new()
        .spacing(16)
        .push(status_item("🖥️", "Backend", target))
        .push(status_item("📡", "Monitored endpoints", Endpoint::ACTUATOR.len().to_string()))
        .push(status_item("⚡", "Session uptime", format_uptime(state.uptime().as_secs())));

    let cards = Row::new()
        .spacing(16)
        .push(api_card(
            Endpoint::ApiDocs.category().glyph(),
            "Swagger UI",
            "Interactive API documentation with built-in testing capabilities",
            badge,
            "Copy URL",
            Message::CopyUrl(Endpoint::ApiDocs),
        ))
        .push(api_card(
            Endpoint::SwaggerJson.category().glyph(),
            "OpenAPI Specification",
            "Browse and download the complete OpenAPI/Swagger JSON specification",
            badge,
            "Open",
            Message::Navigate(Route::OpenApiSpec),
        ))
        .push(api_card(
            "🩺",
            "Actuator",
            "Application health checks, metrics, and monitoring endpoints",
            badge,
            "Open",
            Message::Navigate(Route::Actuator),
        ));

    let footer = Row::new()
        .push(Text::new(">_ Powered by Nodeboot").font(Font::MONOSPACE).size(12).style(TEXT_SECONDARY))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Text::new(if configured { "● System Online" } else { "● Awaiting configuration" })
                .font(Font::MONOSPACE)
                .size(12)
                .style(if configured { ACCENT_COLOR } else { TEXT_SECONDARY }),
        );

    let body = Column::new()
        .spacing(32)
        .push(Container::new(hero).width(Length::Fill).center_x().padding([24, 0]))
        .push(status)
        .push(
            Column::new()
                .spacing(6)
                .align_items(Alignment::Center)
                .push(
                    Row::new()
                        .push(Text::new("Core ").font(BOLD_FONT).size(26).style(TEXT_PRIMARY))
                        .push(Text::new("Endpoints").font(BOLD_FONT).size(26).style(ACCENT_COLOR)),
                )
                .push(Text::new("Explore built-in features and documentation").font(Font::MONOSPACE).size(13).style(TEXT_SECONDARY)),
        )
        .push(cards)
        .push(footer);

    page(state, "Nodeboot", "Admin", Scrollable::new(body).height(Length::Fill).into())
}
