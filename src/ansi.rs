//! ANSI escape sequences for color and cursor control.
//!
//! The dashboard's terminal contract is raw bytes written verbatim: output
//! contains 24-bit color and cursor-control sequences, and a non-terminal
//! consumer will see the literal escapes.

use crate::color::Rgba;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Show the cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Hide the cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";

/// Move the cursor up one line, to column 1.
pub const LINE_UP: &str = "\x1b[F";

/// Reset all color attributes.
pub const RESET: &str = "\x1b[0m";

/// Move the cursor up `n` lines, to column 1.
#[must_use]
pub fn cursor_up(n: usize) -> String {
    format!("{CSI}{n}F")
}

/// Wrap `text` in a 24-bit foreground color and a trailing reset.
#[must_use]
pub fn fg(text: &str, color: Rgba) -> String {
    format!("{CSI}38;2;{};{};{}m{text}{RESET}", color.r, color.g, color.b)
}

/// 24-bit foreground color sequence.
#[must_use]
pub fn fg_code(color: Rgba) -> String {
    format!("{CSI}38;2;{};{};{}m", color.r, color.g, color.b)
}

/// 24-bit background color sequence.
#[must_use]
pub fn bg_code(color: Rgba) -> String {
    format!("{CSI}48;2;{};{};{}m", color.r, color.g, color.b)
}
