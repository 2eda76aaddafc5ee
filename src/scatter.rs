//! Annotated heatmap panel with X/Y/Z axis labels.
//!
//! [`Scatter`] composes axis label renderers around a freshly sampled
//! [`Heatmap`](crate::heatmap::Heatmap): a Z-axis legend header mapping
//! colors to the output range, Y-axis labels interleaved with the heatmap
//! rows, and an X-axis label footer. The heatmap is re-sampled on every
//! `plot` call so the panel reflects the model's current state.
//!
//! Layout:
//!
//! ```text
//! ┌Header────────────────────────────────┐
//! │    ▯ Lowest output  ▮ Highest output │
//! └──────────────────────────────────────┘
//! ┌LeftBar───┐┌Content───────────────────┐
//! │ Highest_Y││┌────────────────────────┐│
//! │          │││                        ││
//! │Y_Axisname│││        heatmap         ││
//! │          │││                        ││
//! │  Lowest_Y││└────────────────────────┘│
//! └──────────┘└──────────────────────────┘
//! ┌Footer────────────────────────────────┐
//! │        Lowest_X  X_Axisname  Highest_X│
//! └──────────────────────────────────────┘
//! ```

use crate::ansi;
use crate::barline::BarLine;
use crate::color::Rgba;
use crate::column::column;
use crate::error::{Error, Result};
use crate::heatmap::HeatmapMaker;
use crate::Row;

/// Format a value to two significant digits for axis labels.
fn label_value(v: f64) -> String {
    if v == 0.0 {
        return "0.0".to_string();
    }

    let exponent = v.abs().log10().floor() as i32;
    if !(-6..2).contains(&exponent) {
        format!("{v:.1e}")
    } else {
        let decimals = (1 - exponent).max(0) as usize;
        format!("{v:.decimals$}")
    }
}

////////////////////////////////////////////////////////////////////////
/// X Axis
////////////////////////////////////////////////////////////////////////

/// Single-line footer: low value at the axis start, name centered over
/// the plot area, high value at the right edge.
struct XAxis {
    name: String,
    width: usize,
    high: f64,
    low: f64,
    /// Char position where the plot area begins.
    start: usize,
}

impl XAxis {
    fn render(&self) -> String {
        let low = label_value(self.low);
        let high = label_value(self.high);
        BarLine::new(self.width)
            .at(self.start, &low)
            .right(&high)
            .at(self.start + (self.width - self.start) / 2, &self.name)
            .line()
    }
}

////////////////////////////////////////////////////////////////////////
/// Y Axis
////////////////////////////////////////////////////////////////////////

/// Left bar: high value on the top line, name centered, low value on the
/// bottom line, all right-aligned to the label column width.
struct YAxis {
    name: String,
    high: f64,
    low: f64,
    height: usize,
}

impl YAxis {
    fn high_label(&self) -> String {
        label_value(self.high)
    }

    fn low_label(&self) -> String {
        label_value(self.low)
    }

    /// Max length of the labels; the heatmap gets the remaining width.
    fn width(&self) -> usize {
        self.high_label()
            .chars()
            .count()
            .max(self.name.chars().count())
            .max(self.low_label().chars().count())
    }

    fn render(&self) -> Vec<String> {
        let w = self.width();
        let h = self.height;
        let mut lines = vec![BarLine::new(w).line(); h];
        lines[0] = BarLine::new(w).right(&self.high_label()).line();
        lines[((h - 1) as f64 / 2.0).round() as usize] =
            BarLine::new(w).center(&self.name).line();
        lines[h - 1] = BarLine::new(w).right(&self.low_label()).line();
        lines
    }
}

////////////////////////////////////////////////////////////////////////
/// Z Axis
////////////////////////////////////////////////////////////////////////

/// Single-line legend mapping marker and surface colors to the output
/// range: black surface / red marker at the low end, white surface /
/// green marker at the high end.
struct ZAxis {
    width: usize,
}

impl ZAxis {
    fn render(&self, low: f64, high: f64) -> String {
        const BLOCK: &str = "█";
        let red = ansi::fg(BLOCK, Rgba::RED);
        let green = ansi::fg(BLOCK, Rgba::rgb(0, 255, 128));
        let black = ansi::fg(BLOCK, Rgba::BLACK);
        let white = ansi::fg(BLOCK, Rgba::WHITE);

        let low_label = label_value(low);
        let high_label = label_value(high);
        let labels = format!("{black}/{red}={low_label}  {white}/{green}={high_label}");

        // Visible width: four blocks, two slashes, two equals, two spaces
        let label_width = low_label.chars().count() + high_label.chars().count() + 10;
        let gap = self.width.saturating_sub(label_width);
        let left = BarLine::new(gap.div_ceil(2)).line();
        let right = BarLine::new(gap / 2).line();
        format!("{left}{labels}{right}")
    }
}

////////////////////////////////////////////////////////////////////////
/// Scatter
////////////////////////////////////////////////////////////////////////

/// Panel geometry and axis labels, with documented defaults.
#[derive(Debug, Clone)]
pub struct ScatterConfig {
    /// Total panel width in characters. Default: 40.
    pub width: usize,
    /// Total panel height in lines. Default: 11.
    pub height: usize,
    /// X-axis label. Default: `"X"`.
    pub xlabel: String,
    /// Y-axis label. Default: `"Y"`.
    pub ylabel: String,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 11,
            xlabel: "X".to_string(),
            ylabel: "Y".to_string(),
        }
    }
}

impl ScatterConfig {
    /// Create a config with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the X-axis label.
    #[must_use]
    pub fn xlabel(mut self, label: impl Into<String>) -> Self {
        self.xlabel = label.into();
        self
    }

    /// Set the Y-axis label.
    #[must_use]
    pub fn ylabel(mut self, label: impl Into<String>) -> Self {
        self.ylabel = label.into();
        self
    }
}

/// Annotated heatmap panel.
///
/// Holds only the configuration and the prediction function; training
/// data is supplied per [`plot`](Self::plot) call, so the panel never
/// carries stale overlay data.
pub struct Scatter<F> {
    config: ScatterConfig,
    predict: F,
}

impl<F> std::fmt::Debug for Scatter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scatter").field("config", &self.config).finish_non_exhaustive()
    }
}

impl<F: Fn(f64, f64) -> f64> Scatter<F> {
    /// Create a scatter panel with the given configuration.
    #[must_use]
    pub fn new(config: ScatterConfig, predict: F) -> Self {
        Self { config, predict }
    }

    /// Generate the annotated heatmap diagram for the current training
    /// data and model state.
    ///
    /// Re-samples the prediction function on every call by design.
    ///
    /// # Errors
    ///
    /// Returns an error on empty or mismatched data, or when the
    /// configured panel is too small to hold the axis labels plus at
    /// least one heatmap cell.
    pub fn plot(&self, inputs: &[Row], outputs: &[f64]) -> Result<String> {
        let xs = column(inputs, 0)?;
        let ys = column(inputs, 1)?;

        // One line each for the Z legend and the X axis
        let content_height = self.config.height.saturating_sub(2);
        let yaxis = YAxis {
            name: self.config.ylabel.clone(),
            high: ys.max(),
            low: ys.min(),
            height: content_height,
        };
        let ywidth = yaxis.width();
        let heat_width = self.config.width.saturating_sub(ywidth);
        if content_height == 0 || heat_width == 0 {
            return Err(Error::InvalidDimensions {
                width: self.config.width as u32,
                height: self.config.height as u32,
            });
        }

        let maker = HeatmapMaker::new(heat_width, content_height, &self.predict);
        let heatmap = maker.heatmap(inputs, outputs)?;

        let zaxis = ZAxis { width: self.config.width };
        let xaxis = XAxis {
            name: self.config.xlabel.clone(),
            width: self.config.width,
            high: xs.max(),
            low: xs.min(),
            start: ywidth,
        };

        let content = heatmap.render();
        let mut lines = Vec::with_capacity(self.config.height);
        lines.push(zaxis.render(heatmap.min(), heatmap.max()));
        for (label, row) in yaxis.render().iter().zip(content.split('\n')) {
            lines.push(format!("{label}{row}"));
        }
        lines.push(xaxis.render());

        Ok(lines.join("\n"))
    }

    /// The panel configuration.
    #[must_use]
    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }
}
