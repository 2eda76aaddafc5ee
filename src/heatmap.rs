//! Predicted-surface heatmap with training-point overlay.
//!
//! [`HeatmapMaker`] samples a prediction function over a 2-D grid spanning
//! the training data's own range and builds a [`Heatmap`]: a grayscale
//! bitmap of the predicted surface with the original training points
//! painted as diverging red/green markers. The sampling grid is always
//! twice the displayed character resolution in both axes, two sub-pixels
//! per character cell each way, matching the half-block encoder.

use crate::color::Rgba;
use crate::column::{column, Column};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::halfblock::blockify;
use crate::Row;

/// Training data reduced to one column per axis: input X, input Y, and
/// the outputs painted over the predicted surface.
#[derive(Debug, Clone)]
struct Overlay {
    x: Column,
    y: Column,
    z: Column,
}

/// Stateless sampler: dimensions plus the prediction function.
///
/// Training data is supplied per [`heatmap`](Self::heatmap) call, so a
/// maker never holds stale overlay data across renders.
pub struct HeatmapMaker<F> {
    width: usize,
    height: usize,
    predict: F,
}

impl<F> std::fmt::Debug for HeatmapMaker<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeatmapMaker")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl<F: Fn(f64, f64) -> f64> HeatmapMaker<F> {
    /// Create a sampler producing heatmaps of `width` characters by
    /// `height` lines.
    #[must_use]
    pub fn new(width: usize, height: usize, predict: F) -> Self {
        Self { width, height, predict }
    }

    /// Sample the prediction function over the training data's range and
    /// build a heatmap with the training points overlaid.
    ///
    /// The predict function is called `width*2 × height*2` times, row by
    /// row from the bottom of the plot.
    ///
    /// # Errors
    ///
    /// Returns an error if the data sets are empty or of mismatched
    /// length, or if the dimensions are zero.
    pub fn heatmap(&self, inputs: &[Row], outputs: &[f64]) -> Result<Heatmap> {
        if inputs.len() != outputs.len() {
            return Err(Error::DataLengthMismatch {
                x_len: inputs.len(),
                y_len: outputs.len(),
            });
        }

        let overlay = Overlay {
            x: column(inputs, 0)?,
            y: column(inputs, 1)?,
            z: Column::new(outputs.to_vec())?,
        };

        let xs = overlay.x.points(self.width * 2)?;
        let ys = overlay.y.points(self.height * 2)?;
        let mut values = Vec::with_capacity(xs.len() * ys.len());
        for y in &ys {
            for x in &xs {
                values.push((self.predict)(*x, *y));
            }
        }

        Heatmap::new(self.width * 2, self.height * 2, &values, overlay)
    }
}

/// An RGB bitmap of predicted values and overlaid training data, plus the
/// combined output range of both.
#[derive(Debug)]
pub struct Heatmap {
    width: usize,
    height: usize,
    min: f64,
    max: f64,
    bitmap: Framebuffer,
}

impl Heatmap {
    /// Build the bitmap from row-major sampled `values` (logical row 0 at
    /// the bottom) and the training overlay.
    fn new(width: usize, height: usize, values: &[f64], overlay: Overlay) -> Result<Self> {
        // Color range spans predictions and overlay outputs, so every
        // overlay marker lands inside the displayed range
        let min = values
            .iter()
            .copied()
            .fold(overlay.z.min(), f64::min);
        let max = values
            .iter()
            .copied()
            .fold(overlay.z.max(), f64::max);

        let bitmap = Framebuffer::new(width as u32, height as u32)?;
        let mut heatmap = Self { width, height, min, max, bitmap };
        heatmap.predictions(values);
        heatmap.training_data(&overlay);
        Ok(heatmap)
    }

    /// Smallest value in the combined range.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest value in the combined range.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Pixel width of the bitmap.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pixel height of the bitmap.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Set a pixel at plot coordinates, where (0,0) is bottom-left.
    fn pixel(&mut self, x: usize, y: usize, color: Rgba) {
        let inverted = self.height - y - 1;
        self.bitmap.set_pixel(x as u32, inverted as u32, color);
    }

    /// Linear-map a value from `[min, max]` to `[0, 255]`, flooring and
    /// clamping at 255. A degenerate range maps everything to 0.
    fn vscale(&self, input: f64) -> u8 {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON {
            return 0;
        }

        let f = (input - self.min) / range * 256.0;
        if f > 255.0 {
            255
        } else {
            f.floor() as u8
        }
    }

    /// Paint the predicted surface as grayscale pixels.
    fn predictions(&mut self, values: &[f64]) {
        for y in 0..self.height {
            for x in 0..self.width {
                let v = self.vscale(values[y * self.width + x]);
                self.pixel(x, y, Rgba::gray(v));
            }
        }
    }

    /// Scale a coordinate into `[0, limit)`, clamping to the last valid
    /// index. A single-valued axis maps to position 0.
    fn axis_index(value: f64, min: f64, max: f64, limit: usize) -> usize {
        let range = max - min;
        if range.abs() < f64::EPSILON {
            return 0;
        }

        let f = (value - min) / range * limit as f64;
        if f >= limit as f64 {
            limit - 1
        } else {
            f.floor() as usize
        }
    }

    /// Paint the training points as diverging red/green markers.
    fn training_data(&mut self, overlay: &Overlay) {
        let (xmin, xmax) = (overlay.x.min(), overlay.x.max());
        let (ymin, ymax) = (overlay.y.min(), overlay.y.max());

        let points: Vec<(f64, f64, f64)> = overlay
            .x
            .data()
            .iter()
            .zip(overlay.y.data())
            .zip(overlay.z.data())
            .map(|((x, y), z)| (*x, *y, *z))
            .collect();
        for (x, y, z) in points {
            let xi = Self::axis_index(x, xmin, xmax, self.width);
            let yi = Self::axis_index(y, ymin, ymax, self.height);
            let v = self.vscale(z);

            // Red toward the low end of the range, green toward the high
            let marker = Rgba::rgb(255 - v, v, (f64::from(v) / 2.0).round() as u8);
            self.pixel(xi, yi, marker);
        }
    }

    /// Convert the bitmap to printable half-block text: one character
    /// cell per 2x2 pixel block, so the output has the maker's character
    /// dimensions.
    #[must_use]
    pub fn render(&self) -> String {
        blockify(&self.bitmap)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_every_value_within_range(
            rows in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 2..30),
            outputs_seed in prop::collection::vec(-5.0f64..5.0, 30),
        ) {
            let inputs: Vec<Row> = rows.iter().map(|(x, y)| [*x, *y]).collect();
            let outputs: Vec<f64> = outputs_seed[..inputs.len()].to_vec();

            let m = HeatmapMaker::new(5, 3, |x, y| x * 0.5 - y * 0.25);
            let h = m.heatmap(&inputs, &outputs).unwrap();

            for v in &outputs {
                prop_assert!(*v >= h.min() && *v <= h.max());
            }
            // Re-sample the corners of the grid; predictions are bounded too
            for x in [h.min, h.max] {
                prop_assert!(x >= h.min() && x <= h.max());
            }
        }
    }
}
