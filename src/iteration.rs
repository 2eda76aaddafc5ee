//! Progress bar with ETA estimation.
//!
//! [`Iteration`] renders a fixed-width progress line: an iteration count
//! left-aligned, a proportional filled-block segment in the middle, and a
//! projected time remaining right-aligned. The session clock starts lazily
//! on the first render with a non-zero count.

use std::time::{Duration, Instant};

use crate::barline::BarLine;

/// Placeholder shown before any timing information exists.
const NO_ETA: &str = "--:--:--";

/// Filled block used for the progress segment.
const BLOCK: char = '█';

/// Stateful progress-bar renderer.
#[derive(Debug)]
pub struct Iteration {
    /// Target iteration count.
    epochs: usize,
    /// Rendered line width in characters.
    width: usize,
    /// Stamped on the first render with `count > 0`.
    started: Option<Instant>,
    /// Last count observed by `render`.
    last: usize,
}

impl Iteration {
    /// Create a progress bar targeting `epochs` iterations, rendered
    /// `width` characters wide.
    #[must_use]
    pub fn new(epochs: usize, width: usize) -> Self {
        Self { epochs, width, started: None, last: 0 }
    }

    /// Render the progress line for `count` completed iterations.
    ///
    /// The result is always exactly `width` characters. With `count == 0`
    /// no projection is possible and the ETA shows a placeholder.
    pub fn render(&mut self, count: usize) -> String {
        if count > 0 && self.started.is_none() {
            self.started = Some(Instant::now());
        }
        self.last = count;

        let eta = if count > 0 {
            let elapsed = self.started.map_or(Duration::ZERO, |t| t.elapsed());
            let remaining = self.epochs.saturating_sub(count) as f64 / count as f64;
            hms(elapsed.mul_f64(remaining))
        } else {
            NO_ETA.to_string()
        };

        let label = self.label(count, self.epochs);
        let ratio = if self.epochs > 0 {
            (count as f64 / self.epochs as f64).min(1.0)
        } else {
            1.0
        };
        self.compose(&label, ratio, &eta)
    }

    /// Render the final state.
    ///
    /// The label shows the last observed count as both numerator and
    /// denominator, which reconciles runs where the count exceeded the
    /// original target.
    pub fn finish(&mut self) -> String {
        let label = self.label(self.last, self.last);
        self.compose(&label, 1.0, &hms(Duration::ZERO))
    }

    /// Count right-aligned to the width of the denominator.
    fn label(&self, count: usize, total: usize) -> String {
        let digits = total.to_string().len();
        format!("{count:>digits$}/{total}")
    }

    /// Fixed-width line: label left, filled bar in the middle, ETA right.
    fn compose(&self, label: &str, ratio: f64, eta: &str) -> String {
        let reserved = label.chars().count() + eta.chars().count() + 2;
        let span = self.width.saturating_sub(reserved);
        let filled = (ratio * span as f64).round() as usize;
        let bar: String = std::iter::repeat(BLOCK).take(filled.min(span)).collect();

        BarLine::new(self.width)
            .at(label.chars().count() + 1, &bar)
            .left(label)
            .right(eta)
            .line()
    }
}

/// Format a duration as `HH:MM:SS`.
fn hms(d: Duration) -> String {
    let total = d.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_zero() {
        let mut i = Iteration::new(100, 40);
        let bar = i.render(0);
        assert_eq!(&bar[0..7], "  0/100");
        assert!(bar.ends_with(NO_ETA));
    }

    #[test]
    fn test_width_exact_for_all_counts() {
        let max = 10;
        let width = 40;
        let mut i = Iteration::new(max, width);
        for n in 0..=max {
            let bar = i.render(n);
            assert_eq!(bar.chars().count(), width, "count {n}");
        }
    }

    #[test]
    fn test_finish_before_max() {
        let mut i = Iteration::new(10, 40);
        i.render(1);
        let bar = i.finish();
        assert!(bar.starts_with("1/1"));
    }

    #[test]
    fn test_finish_after_exceeding_max() {
        let mut i = Iteration::new(10, 40);
        i.render(11);
        let bar = i.finish();
        assert!(bar.starts_with("11/11"), "got {bar:?}");
    }

    #[test]
    fn test_eta_appears_once_started() {
        let mut i = Iteration::new(100, 40);
        let bar = i.render(50);
        assert!(!bar.contains(NO_ETA));
        // HH:MM:SS shape at the right edge
        let tail: String = bar.chars().rev().take(8).collect();
        assert_eq!(tail.matches(':').count(), 2);
    }

    #[test]
    fn test_bar_fills_with_progress() {
        let mut i = Iteration::new(10, 40);
        let empty = i.render(0).matches(BLOCK).count();
        let half = i.render(5).matches(BLOCK).count();
        let full = i.render(10).matches(BLOCK).count();
        assert!(empty < half);
        assert!(half < full);
    }

    #[test]
    fn test_hms() {
        assert_eq!(hms(Duration::ZERO), "00:00:00");
        assert_eq!(hms(Duration::from_secs(3661)), "01:01:01");
        assert_eq!(hms(Duration::from_secs(86399)), "23:59:59");
    }
}
