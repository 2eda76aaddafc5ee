//! Loss-history panel with bucket-average downsampling.
//!
//! Renders a fixed-size box containing the loss history as a line chart.
//! Long histories are reduced to the chart's point budget by averaging
//! contiguous, near-equal-sized windows, so the panel cost stays constant
//! as training proceeds.

use crate::barline::BarLine;
use crate::chart::{plot, PlotConfig};

/// Columns reserved for the chart's Y-axis labels and axis glyph.
const LABEL_COLS: usize = 7;

/// Loss-history chart renderer with fixed box geometry.
#[derive(Debug, Clone)]
pub struct Loss {
    width: usize,
    height: usize,
}

impl Loss {
    /// Create a loss panel of `width` columns by `height` rows.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Placeholder box shown while the history is too short to chart.
    fn nodata(&self) -> String {
        let blank = BarLine::new(self.width).line();
        let mut rows = vec![blank; self.height];
        if let Some(middle) = rows.get_mut(self.height / 2) {
            *middle = BarLine::new(self.width).center("No data").line();
        }
        rows.join("\n")
    }

    /// Render the history into a box of exactly `height` rows by `width`
    /// columns.
    ///
    /// Fewer than two points cannot form a line; the placeholder box is
    /// returned instead and repeated calls are idempotent.
    #[must_use]
    pub fn render(&self, history: &[f64]) -> String {
        if history.len() < 2 {
            return self.nodata();
        }

        let points = resample(history, self.width.saturating_sub(LABEL_COLS));
        let config = PlotConfig::new()
            .height(self.height.saturating_sub(1))
            .padding(" ".repeat(LABEL_COLS - 1));
        let printable = plot(&points, &config);

        printable
            .split('\n')
            .map(|line| {
                let line = line.strip_suffix(' ').unwrap_or(line);
                let used = line.chars().count();
                if used > self.width {
                    line.chars().take(self.width).collect()
                } else {
                    let mut padded = line.to_string();
                    padded.push_str(&BarLine::new(self.width - used).line());
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Downsample `data` to `count` points by bucket averaging.
///
/// The series is partitioned into `count` contiguous windows whose
/// boundaries are floating-point fractions of the total length
/// (`[floor((i-1)*size), ceil(i*size))`), and each window is averaged.
/// Series already at or under the budget pass through unchanged.
fn resample(data: &[f64], count: usize) -> Vec<f64> {
    if count >= data.len() || count == 0 {
        return data.to_vec();
    }

    let size = data.len() as f64 / count as f64;
    (1..=count)
        .map(|i| {
            let start = ((i - 1) as f64 * size).floor() as usize;
            let end = ((i as f64 * size).ceil() as usize).min(data.len());
            let bucket = &data[start..end];
            bucket.iter().sum::<f64>() / bucket.len() as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_data_for_short_history() {
        let l = Loss::new(20, 5);
        for history in [vec![], vec![0.5]] {
            let r = l.render(&history);
            let rows: Vec<&str> = r.split('\n').collect();
            assert_eq!(rows.len(), 5);
            assert!(rows.iter().all(|row| row.chars().count() == 20));
            assert!(r.contains("No data"));
        }
    }

    #[test]
    fn test_no_data_idempotent() {
        let l = Loss::new(16, 4);
        let history = vec![1.0];
        assert_eq!(l.render(&history), l.render(&history));
    }

    #[test]
    fn test_chart_of_two_items() {
        let l = Loss::new(10, 2);
        let r = l.render(&[0.0, 1.0]);
        assert_eq!(r.split('\n').count(), 2);
    }

    #[test]
    fn test_chart_box_geometry() {
        let l = Loss::new(10, 4);
        let data: Vec<f64> = (0..100).map(|i| f64::from(i % 7) * 0.1).collect();
        let r = l.render(&data);
        let rows: Vec<&str> = r.split('\n').collect();
        assert_eq!(rows.len(), 4, "height 4");
        for row in rows {
            assert_eq!(row.chars().count(), 10, "width 10: {row:?}");
        }
    }

    #[test]
    fn test_wide_box_geometry() {
        let l = Loss::new(39, 9);
        let data: Vec<f64> = (0..500).map(|i| 1.0 / (f64::from(i) + 1.0)).collect();
        let r = l.render(&data);
        let rows: Vec<&str> = r.split('\n').collect();
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|row| row.chars().count() == 39));
    }

    #[test]
    fn test_resample_passthrough_when_short() {
        let data = vec![1.0, 2.0, 3.0];
        assert_eq!(resample(&data, 5), data);
        assert_eq!(resample(&data, 3), data);
    }

    #[test]
    fn test_resample_bucket_averages() {
        let data = vec![0.0, 2.0, 4.0, 6.0];
        let out = resample(&data, 2);
        assert_eq!(out.len(), 2);
        assert_relative_eq!(out[0], 1.0);
        assert_relative_eq!(out[1], 5.0);
    }

    #[test]
    fn test_resample_uneven_buckets() {
        let data: Vec<f64> = (0..10).map(f64::from).collect();
        let out = resample(&data, 3);
        assert_eq!(out.len(), 3);
        // Every bucket average stays within the data extent
        assert!(out.iter().all(|v| (0.0..=9.0).contains(v)));
    }
}
