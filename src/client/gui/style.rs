// Shared palette and container styles for every page
use iced::widget::container::Appearance;
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector};

use crate::client::services::json_format::TokenKind;

pub const BG_MAIN: Color = Color::from_rgb(0.03, 0.05, 0.06); // Terminal black
pub const CARD_BG: Color = Color::from_rgb(0.07, 0.10, 0.11);
pub const PANEL_BG: Color = Color::from_rgb(0.05, 0.08, 0.09);
pub const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.85, 0.45); // Phosphor green
pub const ERROR_COLOR: Color = Color::from_rgb(1.0, 0.3, 0.3);
pub const WARNING_COLOR: Color = Color::from_rgb(1.0, 0.75, 0.2);
pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.6, 0.66, 0.66);

pub const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

pub fn bg_main_appearance(_: &Theme) -> Appearance {
    Appearance {
        background: Some(Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

pub fn card_appearance(_: &Theme) -> Appearance {
    Appearance {
        background: Some(Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            width: 1.0,
            color: Color::from_rgba(0.0, 0.85, 0.45, 0.35),
            radius: 10.0.into(),
        },
        shadow: Shadow {
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
        },
    }
}

pub fn error_card_appearance(_: &Theme) -> Appearance {
    Appearance {
        background: Some(Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            width: 1.0,
            color: ERROR_COLOR,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

pub fn header_appearance(_: &Theme) -> Appearance {
    Appearance {
        background: Some(Background::Color(PANEL_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: Shadow {
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        },
    }
}

pub fn dialog_appearance(_: &Theme) -> Appearance {
    Appearance {
        background: Some(Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            width: 1.0,
            color: ACCENT_COLOR,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.6),
        },
    }
}

pub fn token_color(kind: TokenKind) -> Color {
    match kind {
        TokenKind::Key => Color::from_rgb(0.3, 0.95, 0.65),
        TokenKind::String => Color::from_rgb(0.55, 0.85, 0.35),
        TokenKind::Boolean => Color::from_rgb(0.35, 0.75, 1.0),
        TokenKind::Null => TEXT_SECONDARY,
        TokenKind::Number => WARNING_COLOR,
        TokenKind::Plain => Color::from_rgb(0.85, 0.88, 0.88),
    }
}
