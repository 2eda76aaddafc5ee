//! Top-level dashboard composition with in-place terminal refresh.
//!
//! [`Dashboard`] lays out a header row, a scatter panel and a loss panel
//! side by side, and a progress bar, and drives the incremental redraw
//! protocol: the first render hides the cursor and prints the panel;
//! every subsequent render moves the cursor back up over the previous
//! frame before reprinting, refreshing in place instead of scrolling.

use crate::ansi;
use crate::barline::BarLine;
use crate::error::Result;
use crate::iteration::Iteration;
use crate::loss::Loss;
use crate::scatter::{Scatter, ScatterConfig};
use crate::Row;

/// Vertical separator between the two panels.
const SEP: &str = "│";

/// Redraw protocol state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderState {
    /// Nothing printed yet; the next render starts a fresh frame.
    Fresh,
    /// A frame is on screen; the next render must move the cursor up
    /// over it first.
    InProgress,
}

/// A terminal-printable dashboard with progress bar, scatter plot, and
/// loss chart.
pub struct Dashboard<F> {
    height: usize,
    inputs: Vec<Row>,
    outputs: Vec<f64>,
    scatter: Scatter<F>,
    loss: Loss,
    iteration: Iteration,
    header: String,
    losses: Vec<f64>,
    state: RenderState,
}

impl<F> std::fmt::Debug for Dashboard<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("height", &self.height)
            .field("rows", &self.inputs.len())
            .field("renders", &self.losses.len())
            .finish_non_exhaustive()
    }
}

impl<F: Fn(f64, f64) -> f64> Dashboard<F> {
    /// Create a dashboard of the given total size over a training data
    /// set.
    ///
    /// The width is split at the midpoint between the scatter and loss
    /// panels; two lines are reserved for the header and progress bar.
    /// `epochs` is the training target used for the ETA projection.
    ///
    /// # Errors
    ///
    /// Returns an error if `inputs` and `outputs` differ in length.
    pub fn new(
        width: usize,
        height: usize,
        inputs: Vec<Row>,
        outputs: Vec<f64>,
        predict: F,
        epochs: usize,
    ) -> Result<Self> {
        Self::with_labels(width, height, inputs, outputs, predict, epochs, "X", "Y")
    }

    /// Like [`new`](Self::new) with explicit axis labels for the scatter
    /// panel.
    ///
    /// # Errors
    ///
    /// Returns an error if `inputs` and `outputs` differ in length.
    #[allow(clippy::too_many_arguments)]
    pub fn with_labels(
        width: usize,
        height: usize,
        inputs: Vec<Row>,
        outputs: Vec<f64>,
        predict: F,
        epochs: usize,
        xlabel: &str,
        ylabel: &str,
    ) -> Result<Self> {
        if inputs.len() != outputs.len() {
            return Err(crate::Error::DataLengthMismatch {
                x_len: inputs.len(),
                y_len: outputs.len(),
            });
        }

        let col_width = width.saturating_sub(1) / 2;
        let col_height = height.saturating_sub(2);

        let config = ScatterConfig::new()
            .dimensions(col_width, col_height)
            .xlabel(xlabel)
            .ylabel(ylabel);
        let scatter = Scatter::new(config, predict);
        let loss = Loss::new(col_width, col_height);
        let header = ["Scatter Plot", "Loss History"]
            .map(|title| BarLine::with_fill(col_width, '-').left(title).line())
            .join(SEP);
        let iteration = Iteration::new(epochs, col_width * 2 + 1);

        Ok(Self {
            height,
            inputs,
            outputs,
            scatter,
            loss,
            iteration,
            header,
            losses: Vec::new(),
            state: RenderState::Fresh,
        })
    }

    /// Number of loss values recorded so far (one per render call).
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.losses.len()
    }

    /// Render one dashboard frame for `iteration` completed iterations
    /// with the most recent `loss`.
    ///
    /// Appends `loss` to the history, re-renders both panels against the
    /// model's current state, and wraps the frame in the cursor-control
    /// protocol. The visible frame is always `height` lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the scatter panel cannot be rendered for the
    /// configured geometry or training data.
    pub fn render(&mut self, iteration: usize, loss: f64) -> Result<String> {
        self.losses.push(loss);

        let scatter = self.scatter.plot(&self.inputs, &self.outputs)?;
        let losscomp = self.loss.render(&self.losses);

        let home = match self.state {
            RenderState::Fresh => String::new(),
            RenderState::InProgress => ansi::cursor_up(self.height),
        };
        self.state = RenderState::InProgress;

        let mut lines = Vec::with_capacity(self.height);
        lines.push(format!("{}{}{}", ansi::HIDE_CURSOR, home, self.header));
        for (left, right) in scatter.split('\n').zip(losscomp.split('\n')) {
            lines.push(format!("{left}{SEP}{right}"));
        }
        lines.push(format!("{}{}", self.iteration.render(iteration), ansi::SHOW_CURSOR));

        Ok(lines.join("\n"))
    }

    /// Reset the cursor, leaving the terminal clean after the last frame.
    #[must_use]
    pub fn finish(&mut self) -> String {
        self.state = RenderState::Fresh;
        format!("{}{}", ansi::LINE_UP, ansi::SHOW_CURSOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xor_data() -> (Vec<Row>, Vec<f64>) {
        (
            vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]],
            vec![0.0, 1.0, 1.0, 0.0],
        )
    }

    fn xor(x: f64, y: f64) -> f64 {
        (x - y).abs()
    }

    fn dashboard() -> Dashboard<fn(f64, f64) -> f64> {
        let (inputs, outputs) = xor_data();
        // Fn items are zero-sized types of their own; cast to the fn
        // pointer named in the return type
        Dashboard::new(40, 10, inputs, outputs, xor as fn(f64, f64) -> f64, 200).unwrap()
    }

    #[test]
    fn test_first_render_has_no_data_and_no_eta() {
        let mut d = dashboard();
        let v = d.render(0, 0.0).unwrap();
        assert!(v.contains("No data"));
        assert!(v.contains("--:--:--"));
    }

    #[test]
    fn test_first_render_hides_cursor_without_homing() {
        let mut d = dashboard();
        let v = d.render(0, 0.0).unwrap();
        assert!(v.starts_with("\x1b[?25l"));
        assert!(!v.contains("\x1b[10F"));
        assert!(v.ends_with("\x1b[?25h"));
    }

    #[test]
    fn test_second_render_homes_by_height() {
        let mut d = dashboard();
        d.render(1, 1.0).unwrap();
        let v = d.render(2, 0.5).unwrap();
        assert!(v.contains("\x1b[10F"));
    }

    #[test]
    fn test_eta_replaces_placeholder_once_started() {
        let mut d = dashboard();
        let v = d.render(1, 1.0).unwrap();
        assert!(v.contains("No data"), "single loss point still charts nothing");
        assert!(!v.contains("--:--:--"));
    }

    #[test]
    fn test_frame_line_count() {
        let mut d = dashboard();
        let v = d.render(0, 0.0).unwrap();
        assert_eq!(v.split('\n').count(), 10);
    }

    #[test]
    fn test_history_grows_per_render() {
        let mut d = dashboard();
        for i in 0..5 {
            d.render(i, 0.1).unwrap();
        }
        assert_eq!(d.history_len(), 5);
    }

    #[test]
    fn test_header_titles() {
        let mut d = dashboard();
        let v = d.render(0, 0.0).unwrap();
        assert!(v.contains("Scatter Plot"));
        assert!(v.contains("Loss History"));
        assert!(v.contains(SEP));
    }

    #[test]
    fn test_finish_restores_cursor() {
        let mut d = dashboard();
        d.render(1, 1.0).unwrap();
        assert_eq!(d.finish(), "\x1b[F\x1b[?25h");
    }

    #[test]
    fn test_mismatched_data_rejected() {
        let (inputs, _) = xor_data();
        let result = Dashboard::new(40, 10, inputs, vec![0.0], xor, 10);
        assert!(result.is_err());
    }
}
