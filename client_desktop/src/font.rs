//! HUD text as font pixels
//!
//! Glyphs come from the 8x8 bitmaps in `font8x8`. Each lit pixel becomes
//! one rectangle instance, so text goes through the same draw as paddles.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use glam::Vec2;

pub const GLYPH_SIZE: usize = 8;
/// Horizontal distance between glyph origins, in font pixels
pub const ADVANCE: f32 = 8.0;
/// Vertical distance between line origins, in font pixels
pub const LINE_HEIGHT: f32 = 10.0;

const REPLACEMENT: char = '?';

/// Bitmap for `c`: rows top to bottom, bit 0 is the leftmost column.
/// Characters the font lacks are drawn as `?`.
pub fn glyph(c: char) -> [u8; GLYPH_SIZE] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get(REPLACEMENT))
        .unwrap_or_default()
}

/// Centers of every lit font pixel in `text`.
///
/// `origin` is the bottom-left corner of the first line; following lines
/// go down the screen. `scale` is the size of one font pixel in world units.
pub fn layout(text: &str, origin: Vec2, scale: f32) -> Vec<Vec2> {
    let mut pixels = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line_origin = origin - Vec2::new(0.0, line_no as f32 * LINE_HEIGHT * scale);

        for (col, c) in line.chars().enumerate() {
            let glyph_x = col as f32 * ADVANCE;

            for (row, bits) in glyph(c).iter().enumerate() {
                for bit in 0..GLYPH_SIZE {
                    if bits & (1 << bit) == 0 {
                        continue;
                    }
                    let x = glyph_x + bit as f32 + 0.5;
                    let y = (GLYPH_SIZE - 1 - row) as f32 + 0.5;
                    pixels.push(line_origin + Vec2::new(x, y) * scale);
                }
            }
        }
    }

    pixels
}
