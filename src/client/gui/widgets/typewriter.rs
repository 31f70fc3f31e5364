// Typewriter line for the dashboard hero
use iced::widget::{Row, Text};
use iced::{Color, Element, Font};

use crate::client::models::messages::Message;

/// Ticks between cursor blinks (one tick = one revealed character).
const BLINK_EVERY: u32 = 6;

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: &'static str,
    shown: usize,
    ticks: u32,
    cursor_visible: bool,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self { text, shown: 0, ticks: 0, cursor_visible: true }
    }

    /// Fully typed, used when animations are off.
    pub fn finished(text: &'static str) -> Self {
        Self { shown: text.chars().count(), ..Self::new(text) }
    }

    pub fn tick(&mut self) {
        if self.shown < self.text.chars().count() {
            self.shown += 1;
        }
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % BLINK_EVERY == 0 {
            self.cursor_visible = !self.cursor_visible;
        }
    }

    pub fn visible_text(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((idx, _)) => &self.text[..idx],
            None => self.text,
        }
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn view(&self, color: Color) -> Element<'_, Message> {
        let cursor = if self.cursor_visible { "█" } else { " " };
        Row::new()
            .spacing(4)
            .push(Text::new(self.visible_text()).font(Font::MONOSPACE).size(22).style(color))
            .push(Text::new(cursor).font(Font::MONOSPACE).size(22).style(color))
            .into()
    }
}
