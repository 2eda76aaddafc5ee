//! # Tablero
//!
//! Live terminal dashboard for iterative model fitting.
//!
//! Tablero renders the progress of a numeric fitting process in place on the
//! terminal: a heatmap of the model's current two-input/one-output surface
//! with the training points overlaid, a downsampled loss-history chart, and
//! a progress bar with an ETA. Everything is produced as plain `String`s
//! containing 24-bit ANSI color and cursor-control sequences; the caller
//! decides when to print and how often to render.
//!
//! ## Quick Start
//!
//! ```rust
//! use tablero::Dashboard;
//!
//! let inputs = vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
//! let outputs = vec![0.0, 1.0, 1.0, 0.0];
//!
//! let mut dashboard = Dashboard::new(
//!     80,
//!     14,
//!     inputs,
//!     outputs,
//!     |x, y| (x - y).abs(),
//!     200,
//! ).unwrap();
//!
//! for epoch in 0..200_usize {
//!     let loss = 1.0 / (epoch as f64 + 1.0);
//!     if epoch % 20 == 0 {
//!         println!("{}", dashboard.render(epoch, loss).unwrap());
//!     }
//! }
//! println!("{}", dashboard.finish());
//! ```
//!
//! ## Design
//!
//! - The prediction function is treated as pure and deterministic; it is
//!   called `width*2 × height*2` times per render, so render cost scales
//!   with panel resolution times predict latency.
//! - The heatmap is re-sampled on every render so the panel always reflects
//!   the model's current state; nothing is cached across renders.
//! - Single-threaded and synchronous. A render call runs to completion;
//!   one [`Dashboard`] must not be driven from multiple threads.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// ANSI escape sequences for color and cursor control.
pub mod ansi;

/// Color types.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Order statistics and evenly spaced sampling over numeric columns.
pub mod column;

/// Fixed-width text-line buffer with positional placements.
pub mod barline;

// ============================================================================
// Text Rendering Primitives
// ============================================================================

/// Line-chart text plotter (asciichart-style).
pub mod chart;

/// Bitmap-to-text conversion using half-block characters.
pub mod halfblock;

// ============================================================================
// Panels
// ============================================================================

/// Progress bar with ETA estimation.
pub mod iteration;

/// Loss-history panel with bucket-average downsampling.
pub mod loss;

/// Predicted-surface heatmap with training-point overlay.
pub mod heatmap;

/// Annotated heatmap panel with X/Y/Z axis labels.
pub mod scatter;

/// Top-level dashboard composition with in-place terminal refresh.
pub mod dashboard;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for tablero operations.
pub mod error;

pub use error::{Error, Result};

/// A single training input: one (x, y) pair.
pub type Row = [f64; 2];

pub use barline::BarLine;
pub use column::{column, Column};
pub use dashboard::Dashboard;
pub use heatmap::{Heatmap, HeatmapMaker};
pub use iteration::Iteration;
pub use loss::Loss;
pub use scatter::{Scatter, ScatterConfig};

/// Commonly used types for convenient imports.
///
/// ```rust,ignore
/// use tablero::prelude::*;
/// ```
pub mod prelude {
    pub use crate::barline::BarLine;
    pub use crate::color::Rgba;
    pub use crate::column::{column, Column};
    pub use crate::dashboard::Dashboard;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::heatmap::{Heatmap, HeatmapMaker};
    pub use crate::iteration::Iteration;
    pub use crate::loss::Loss;
    pub use crate::scatter::{Scatter, ScatterConfig};
    pub use crate::Row;
}
