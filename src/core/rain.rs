//! Matrix rain: one falling glyph per character column.

use rand::Rng;

use super::config::RainConfig;

/// One glyph to draw this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainGlyph {
    pub glyph: char,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct MatrixRain {
    glyphs: Vec<char>,
    font_size: f64,
    reset_probability: f64,
    width: f64,
    height: f64,
    /// Current row of every column's drop
    drops: Vec<u32>,
}

impl MatrixRain {
    pub fn new(config: &RainConfig, width: f64, height: f64) -> Self {
        let font_size = config.font_size.max(1.0);
        let columns = (width.max(0.0) / font_size).ceil() as usize;
        Self {
            glyphs: config.glyphs.chars().collect(),
            font_size,
            reset_probability: config.reset_probability.clamp(0.0, 1.0),
            width,
            height,
            drops: vec![1; columns],
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Track the new canvas size. Columns are not reindexed.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance every drop one row, handing each drawn glyph to `draw`.
    pub fn tick<R, F>(&mut self, rng: &mut R, mut draw: F)
    where
        R: Rng + ?Sized,
        F: FnMut(RainGlyph),
    {
        if self.glyphs.is_empty() {
            return;
        }

        for (column, drop) in self.drops.iter_mut().enumerate() {
            let glyph = self.glyphs[rng.gen_range(0..self.glyphs.len())];
            let y = f64::from(*drop) * self.font_size;
            draw(RainGlyph {
                glyph,
                x: column as f64 * self.font_size,
                y,
            });

            if y > self.height && rng.gen_bool(self.reset_probability) {
                *drop = 0;
            }
            *drop += 1;
        }
    }
}
