// Falling-character band drawn behind page headers
use iced::widget::{Column, Text};
use iced::{Color, Element, Font};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::client::models::messages::Message;

const GLYPHS: &[char] = &[
    '0', '1', 'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', '$', '&', '@', '#',
];

#[derive(Debug, Clone)]
struct Raindrop {
    column: usize,
    row: f32,
    speed: f32,
    glyph: char,
}

#[derive(Debug, Clone)]
pub struct MatrixRain {
    width: usize,
    height: usize,
    drops: Vec<Raindrop>,
    rng: StdRng,
}

impl MatrixRain {
    /// `density` is the share of columns carrying a raindrop.
    pub fn new(width: usize, height: usize, density: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = ((width as f32) * density).ceil().max(1.0) as usize;
        let drops = (0..count)
            .map(|_| Raindrop {
                column: rng.gen_range(0..width.max(1)),
                row: rng.gen_range(0.0..height.max(1) as f32),
                speed: rng.gen_range(0.3..1.0),
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
            })
            .collect();
        Self { width, height, drops, rng }
    }

    pub fn tick(&mut self) {
        for raindrop in &mut self.drops {
            raindrop.row += raindrop.speed;
            if raindrop.row >= self.height as f32 {
                raindrop.row = 0.0;
                raindrop.column = self.rng.gen_range(0..self.width.max(1));
            }
            if self.rng.gen_bool(0.05) {
                raindrop.glyph = GLYPHS[self.rng.gen_range(0..GLYPHS.len())];
            }
        }
    }

    /// Character grid, one string per row.
    pub fn rows(&self) -> Vec<String> {
        let mut grid = vec![vec![' '; self.width]; self.height];
        for raindrop in &self.drops {
            let row = raindrop.row as usize;
            if row < self.height && raindrop.column < self.width {
                grid[row][raindrop.column] = raindrop.glyph;
            }
        }
        grid.into_iter().map(|r| r.into_iter().collect()).collect()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let color = Color::from_rgba(0.0, 0.9, 0.4, 0.35);
        let column = self.rows().into_iter().fold(Column::new(), |col, row| {
            col.push(Text::new(row).font(Font::MONOSPACE).size(12).style(color))
        });
        column.into()
    }
}
