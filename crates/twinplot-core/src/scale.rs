// File: crates/twinplot-core/src/scale.rs
// Summary: Linear value-to-pixel transforms for the shared X and the two Y axes.

use crate::axis::Axis;

/// Maps `[vmin, vmax]` onto `[p0, p1]` pixels.
///
/// `p1 < p0` is allowed and is how the Y scales flip screen space so that
/// larger values sit higher on the canvas.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub p0: f32,
    pub p1: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(p0: f32, p1: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { p0, p1, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Horizontal scale for `axis` across `[left_px, right_px]`.
    pub fn horizontal(axis: &Axis, left_px: f32, right_px: f32) -> Self {
        Self::new(left_px, right_px, axis.min, axis.max)
    }

    /// Vertical scale for `axis`: `min` at `bottom_px`, `max` at `top_px`.
    pub fn vertical(axis: &Axis, top_px: f32, bottom_px: f32) -> Self {
        Self::new(bottom_px, top_px, axis.min, axis.max)
    }

    // Halved operands keep differences finite for ranges near f64::MAX.
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v * 0.5 - self.vmin * 0.5) / (self.vmax * 0.5 - self.vmin * 0.5);
        self.p0 + t as f32 * (self.p1 - self.p0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let len = self.p1 - self.p0;
        if len.abs() < f32::EPSILON { return self.vmin; }
        let t = ((px - self.p0) / len) as f64;
        self.vmin * (1.0 - t) + self.vmax * t
    }
}
