//! Line-chart text plotter (asciichart-style).
//!
//! Draws a numeric series as box-drawing glyphs with a labelled Y axis,
//! auto-scaled to the series' own min/max. The contract consumed by the
//! loss panel: given a height of `h`, the output is exactly `h + 1` rows,
//! each row being the padding-width label, one axis glyph, and the plot
//! glyphs for the data columns.

/// Plot configuration.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Number of vertical steps; the output has `height + 1` rows.
    height: usize,
    /// Label field; Y-axis labels are right-aligned into its width.
    padding: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self { height: 4, padding: "        ".to_string() }
    }
}

impl PlotConfig {
    /// Create a config with default height and padding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of vertical steps.
    #[must_use]
    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the label field.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = padding.into();
        self
    }
}

/// Plot a series as multi-line text.
///
/// The vertical scale spans the series' own min/max; a flat series draws a
/// straight line at the bottom level with the same row count. An empty
/// series produces an empty string.
#[must_use]
pub fn plot(series: &[f64], config: &PlotConfig) -> String {
    if series.is_empty() {
        return String::new();
    }

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let rows = config.height;

    // Quantize a value onto 0..=rows, level 0 at min
    let level = |v: f64| -> usize {
        if range.abs() < f64::EPSILON || rows == 0 {
            0
        } else {
            (((v - min) / range) * rows as f64).round() as usize
        }
    };

    let label_width = config.padding.chars().count();
    let cols = label_width + 1 + series.len().saturating_sub(1).max(1);
    let mut grid = vec![vec![' '; cols]; rows + 1];

    let first_row = rows - level(series[0]);
    for (i, row) in grid.iter_mut().enumerate() {
        // Label for this grid row, max at the top
        let value = if rows == 0 { max } else { max - i as f64 * range / rows as f64 };
        let label = align_right(&format!("{value:.2}"), label_width);
        for (j, ch) in label.chars().enumerate() {
            row[j] = ch;
        }
        row[label_width] = if i == first_row { '┼' } else { '┤' };
    }

    for x in 0..series.len().saturating_sub(1) {
        let y0 = level(series[x]);
        let y1 = level(series[x + 1]);
        let col = label_width + 1 + x;
        if y0 == y1 {
            grid[rows - y0][col] = '─';
        } else {
            grid[rows - y1][col] = if y0 > y1 { '╰' } else { '╭' };
            grid[rows - y0][col] = if y0 > y1 { '╮' } else { '╯' };
            for y in y0.min(y1) + 1..y0.max(y1) {
                grid[rows - y][col] = '│';
            }
        }
    }

    grid.iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Right-align `text` into `width` characters, truncating from the left
/// when it does not fit.
fn align_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        text.chars().skip(len - width).collect()
    } else {
        format!("{text:>width$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<&str> {
        s.split('\n').collect()
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(plot(&[], &PlotConfig::new()), "");
    }

    #[test]
    fn test_row_count_is_height_plus_one() {
        let config = PlotConfig::new().height(3).padding("      ");
        let out = plot(&[0.0, 1.0, 0.5, 0.25], &config);
        assert_eq!(lines(&out).len(), 4);
    }

    #[test]
    fn test_flat_series_keeps_row_count() {
        let config = PlotConfig::new().height(3).padding("      ");
        let out = plot(&[0.5, 0.5, 0.5], &config);
        assert_eq!(lines(&out).len(), 4);
        assert!(out.contains('─'));
    }

    #[test]
    fn test_single_point_keeps_row_count() {
        let config = PlotConfig::new().height(2).padding("   ");
        let out = plot(&[1.0], &config);
        assert_eq!(lines(&out).len(), 3);
    }

    #[test]
    fn test_labels_span_extent() {
        let config = PlotConfig::new().height(2).padding("      ");
        let out = plot(&[0.0, 1.0], &config);
        let rows = lines(&out);
        assert!(rows[0].contains("1.00"), "top label: {:?}", rows[0]);
        assert!(rows[2].contains("0.00"), "bottom label: {:?}", rows[2]);
    }

    #[test]
    fn test_axis_glyphs_present() {
        let config = PlotConfig::new().height(2).padding("      ");
        let out = plot(&[0.0, 1.0, 0.0], &config);
        assert!(out.contains('┤'));
        assert!(out.contains('┼'));
        assert!(out.contains('╭') || out.contains('╰'));
    }

    #[test]
    fn test_row_width_fixed() {
        let config = PlotConfig::new().height(4).padding("      ");
        let series: Vec<f64> = (0..20).map(|i| f64::from(i).sin()).collect();
        let out = plot(&series, &config);
        for row in lines(&out) {
            // label (6) + axis (1) + one glyph column per segment (19)
            assert_eq!(row.chars().count(), 26);
        }
    }

    #[test]
    fn test_align_right_truncates_from_left() {
        assert_eq!(align_right("123.45", 4), "3.45");
        assert_eq!(align_right("1.0", 5), "  1.0");
    }
}
