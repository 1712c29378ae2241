// File: crates/twinplot-core/src/view.rs
// Data bounds and the autoscale rules used to fit axes to series.

/// Axis-aligned bounds of a set of finite points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn of_points(points: &[(f64, f64)]) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut any = false;
        for &(x, y) in points {
            if !x.is_finite() || !y.is_finite() { continue; }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
            any = true;
        }
        if any { Some(Self { x_min, x_max, y_min, y_max }) } else { None }
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

/// Fold optional bounds, skipping series with no finite data.
pub fn union_all(bounds: impl IntoIterator<Item = Option<Bounds>>) -> Option<Bounds> {
    bounds.into_iter().flatten().reduce(Bounds::union)
}

/// Pad `[lo, hi]` by `margin` of its span on each side.
///
/// Missing data gives `[0, 1]`; a zero span is widened to 1 before padding.
/// Padding that would leave the finite range is dropped.
pub fn padded_range(range: Option<(f64, f64)>, margin: f64) -> (f64, f64) {
    let Some((lo, mut hi)) = range else { return (0.0, 1.0) };
    if !lo.is_finite() || !hi.is_finite() { return (0.0, 1.0); }
    if (hi - lo).abs() < 1e-9 { hi = lo + 1.0; }
    // half-span first so [-f64::MAX, f64::MAX] does not overflow
    let m = (hi * 0.5 - lo * 0.5) * (2.0 * margin.max(0.0));
    let (plo, phi) = (lo - m, hi + m);
    if plo.is_finite() && phi.is_finite() { (plo, phi) } else { (lo, hi) }
}
