// File: crates/twinplot-core/src/series.rs
// Summary: Line series model bound to one of the two y-axes.

use skia_safe as skia;

use crate::axis::YAxis;
use crate::error::{ChartError, Result};
use crate::view::Bounds;

/// Default stroke width in pixels.
pub const LINE_WIDTH: f32 = 2.0;

#[derive(Clone, Debug)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    pub y_axis: YAxis,
    pub color: skia::Color,
    pub line_width: f32,
}

impl Series {
    pub fn with_data(y_axis: YAxis, color: skia::Color, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, y_axis, color, line_width: LINE_WIDTH }
    }

    /// Zip a shared x column with a y column.
    ///
    /// Columns of different lengths are rejected rather than truncated.
    pub fn from_columns(x: &[f64], y: &[f64], y_axis: YAxis, color: skia::Color) -> Result<Self> {
        if x.len() != y.len() {
            return Err(ChartError::LengthMismatch { side: y_axis, expected: x.len(), got: y.len() });
        }
        let data = x.iter().copied().zip(y.iter().copied()).collect();
        Ok(Self::with_data(y_axis, color, data))
    }

    /// Bounds over the finite points only; `None` when there are none.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of_points(&self.data_xy)
    }

    /// Split into runs of finite points; non-finite values break the line.
    pub fn finite_runs(&self) -> Vec<&[(f64, f64)]> {
        self.data_xy
            .split(|&(x, y)| !x.is_finite() || !y.is_finite())
            .filter(|run| !run.is_empty())
            .collect()
    }
}
