//! Fixed-width text-line buffer with positional placements.
//!
//! A [`BarLine`] is a mutable character buffer of fixed width. Placement
//! operations overwrite a sub-range of the buffer; composing them is
//! sequential overwrite, not merge, so later placements win where regions
//! overlap. The rendered line is always exactly `width` characters.

/// Fixed-width character buffer.
#[derive(Debug, Clone)]
pub struct BarLine {
    chars: Vec<char>,
}

impl BarLine {
    /// Create a line of `width` spaces.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self::with_fill(width, ' ')
    }

    /// Create a line of `width` copies of `fill`.
    #[must_use]
    pub fn with_fill(width: usize, fill: char) -> Self {
        Self { chars: vec![fill; width] }
    }

    /// Buffer width in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.chars.len()
    }

    /// Place `text` starting at column 0.
    #[must_use]
    pub fn left(self, text: &str) -> Self {
        self.at(0, text)
    }

    /// Place `text` so it ends at the last column.
    ///
    /// Text wider than the buffer is truncated to the buffer width.
    #[must_use]
    pub fn right(self, text: &str) -> Self {
        let len = text.chars().count();
        let start = self.chars.len().saturating_sub(len);
        self.at(start, text)
    }

    /// Place `text` centered, flooring the start column on an odd
    /// remainder.
    #[must_use]
    pub fn center(self, text: &str) -> Self {
        let len = text.chars().count();
        let start = self.chars.len().saturating_sub(len) / 2;
        self.at(start, text)
    }

    /// Place `text` at an arbitrary column, truncated at the buffer end.
    #[must_use]
    pub fn at(mut self, col: usize, text: &str) -> Self {
        for (i, ch) in text.chars().enumerate() {
            let Some(slot) = self.chars.get_mut(col + i) else {
                break;
            };
            *slot = ch;
        }
        self
    }

    /// Render the buffer as a string of exactly `width` characters.
    #[must_use]
    pub fn line(&self) -> String {
        self.chars.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(BarLine::new(5).line(), "     ");
        assert_eq!(BarLine::with_fill(3, '-').line(), "---");
    }

    #[test]
    fn test_left_right() {
        assert_eq!(BarLine::new(10).left("ab").line(), "ab        ");
        assert_eq!(BarLine::new(10).right("ab").line(), "        ab");
    }

    #[test]
    fn test_center_floors_odd_remainder() {
        // 10 - 3 = 7, floor(7/2) = 3
        assert_eq!(BarLine::new(10).center("abc").line(), "   abc    ");
    }

    #[test]
    fn test_at_truncates_at_end() {
        assert_eq!(BarLine::new(5).at(3, "xyz").line(), "   xy");
        assert_eq!(BarLine::new(5).at(9, "xyz").line(), "     ");
    }

    #[test]
    fn test_sequential_overwrite() {
        // Later placements overwrite earlier ones in the same region
        let line = BarLine::new(8).left("aaaaaaaa").center("bb").line();
        assert_eq!(line, "aaabbaaa");
    }

    #[test]
    fn test_oversized_text_truncated() {
        assert_eq!(BarLine::new(4).left("abcdef").line(), "abcd");
        assert_eq!(BarLine::new(4).right("abcdef").line(), "abcd");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_width_preserved(
            width in 0usize..64,
            col in 0usize..80,
            text in "[a-z]{0,20}",
        ) {
            let line = BarLine::new(width)
                .left(&text)
                .right(&text)
                .center(&text)
                .at(col, &text)
                .line();
            prop_assert_eq!(line.chars().count(), width);
        }
    }
}
