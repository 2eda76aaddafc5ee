//! Bitmap-to-text conversion using half-block characters.
//!
//! Encodes a 2x2 pixel block per character cell using the upper-half-block
//! glyph `▀`: the foreground color carries the average of the top pixel
//! pair and the background color carries the average of the bottom pair.
//! The background/foreground split keeps two vertical sub-pixels of
//! resolution per character row; the horizontal pair is averaged because a
//! character cell has no sub-column to color independently.

use std::fmt::Write as FmtWrite;

use crate::ansi;
use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Channel-wise average of two colors.
fn mix(a: Rgba, b: Rgba) -> Rgba {
    Rgba::rgb(
        ((u16::from(a.r) + u16::from(b.r)) / 2) as u8,
        ((u16::from(a.g) + u16::from(b.g)) / 2) as u8,
        ((u16::from(a.b) + u16::from(b.b)) / 2) as u8,
    )
}

/// Render a framebuffer as half-resolution colored text.
///
/// Each character cell covers two pixel columns and two pixel rows, so a
/// buffer of `2w x 2h` pixels yields exactly `h` lines of `w` cells. An
/// odd final column is paired with itself; an odd final row is paired
/// with black. Every line ends with a color reset; lines are joined with
/// `\n` and there is no trailing newline.
#[must_use]
pub fn blockify(fb: &Framebuffer) -> String {
    let width = fb.width();
    let height = fb.height();

    // Per cell: two 19-byte color codes + 3-byte glyph
    let mut rows = Vec::with_capacity(height.div_ceil(2) as usize);
    for y in (0..height).step_by(2) {
        let mut row = String::with_capacity(width.div_ceil(2) as usize * 41 + 8);
        for x in (0..width).step_by(2) {
            let top_left = fb.get_pixel(x, y).unwrap_or(Rgba::BLACK);
            let top_right = fb.get_pixel(x + 1, y).unwrap_or(top_left);
            let bottom_left = fb.get_pixel(x, y + 1).unwrap_or(Rgba::BLACK);
            let bottom_right = fb.get_pixel(x + 1, y + 1).unwrap_or(bottom_left);
            let _ = write!(
                row,
                "{}{}▀",
                ansi::fg_code(mix(top_left, top_right)),
                ansi::bg_code(mix(bottom_left, bottom_right))
            );
        }
        row.push_str(ansi::RESET);
        rows.push(row);
    }

    rows.join("\n")
}
