// File: crates/twinplot-core/src/axis.rs
// Summary: Axis model with labels, ranges, range mode and label color.

use std::fmt;

use skia_safe as skia;

/// How an axis range is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeMode {
    /// Recomputed from the data by `TwinChart::autoscale_axes`.
    Auto,
    /// Kept as set; autoscaling never touches it.
    Fixed,
}

/// Which of the two y-axes a series is drawn against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YAxis {
    Left,
    Right,
}

impl fmt::Display for YAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YAxis::Left => f.write_str("left"),
            YAxis::Right => f.write_str("right"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub range: RangeMode,
    /// Color for tick labels and the axis label; theme default when `None`.
    pub color: Option<skia::Color>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, range: RangeMode::Auto, color: None }
    }

    /// Axis whose range survives autoscaling.
    pub fn fixed(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { range: RangeMode::Fixed, ..Self::new(label, min, max) }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_fixed(&self) -> bool { self.range == RangeMode::Fixed }

    pub fn default_x() -> Self { Self::new("x", 0.0, 1.0) }

    pub fn default_y() -> Self { Self::new("y", 0.0, 1.0) }
}
