// File: crates/twinplot-core/src/layout.rs
// Summary: Tick selection per axis and the tight-layout pass that sizes margins to fit labels.

use crate::axis::Axis;
use crate::chart::{RenderOptions, TwinChart};
use crate::grid::{format_tick, nice_ticks, tick_step};
use crate::text::TextMetrics;
use crate::types::Insets;

/// Outer padding between the figure edge and any text.
pub const PAD: f32 = 8.0;
/// Tick mark length, drawn outward from the frame.
pub const TICK_LEN: f32 = 5.0;
/// Gap between a tick mark and its label.
pub const TICK_GAP: f32 = 3.0;
/// Gap between tick labels and the axis label.
pub const LABEL_GAP: f32 = 6.0;

/// Target tick counts.
pub const X_TICKS: usize = 8;
pub const Y_TICKS: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTicks {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

impl AxisTicks {
    pub fn for_axis(axis: &Axis, target: usize) -> Self {
        let values = nice_ticks(axis.min, axis.max, target);
        let step = tick_step(&values);
        let labels = values.iter().map(|&v| format_tick(v, step)).collect();
        Self { values, labels }
    }

    /// Widest and tallest label, `(0, 0)` when there are none.
    pub(crate) fn extent(&self, metrics: &dyn TextMetrics, size: f32) -> (f32, f32) {
        self.labels
            .iter()
            .map(|l| metrics.measure(l, size))
            .fold((0.0, 0.0), |(w, h), (lw, lh)| (w.max(lw), h.max(lh)))
    }
}

/// Ticks for the x, left and right axes, in that order.
pub fn chart_ticks(chart: &TwinChart) -> (AxisTicks, AxisTicks, AxisTicks) {
    (
        AxisTicks::for_axis(&chart.x_axis, X_TICKS),
        AxisTicks::for_axis(&chart.y_left, Y_TICKS),
        AxisTicks::for_axis(&chart.y_right, Y_TICKS),
    )
}

/// Height of an axis label plus its gap, or nothing for an empty label.
fn label_band(label: &str, metrics: &dyn TextMetrics, size: f32) -> f32 {
    if label.is_empty() { return 0.0; }
    metrics.measure(label, size).1 + LABEL_GAP
}

/// Smallest margins that keep every tick label and axis label on the surface.
pub fn tight_insets(chart: &TwinChart, opts: &RenderOptions, metrics: &dyn TextMetrics) -> Insets {
    let fs = opts.font_size;
    let marks = TICK_LEN + TICK_GAP;

    if !opts.draw_labels {
        let m = (PAD + TICK_LEN).ceil() as u32;
        return Insets::new(m, m, PAD.ceil() as u32, m);
    }

    let (xt, lt, rt) = chart_ticks(chart);
    let (lw, lh) = lt.extent(metrics, fs);
    let (rw, rh) = rt.extent(metrics, fs);
    let (_, xh) = xt.extent(metrics, fs);

    let mut left = PAD + label_band(&chart.y_left.label, metrics, fs) + lw + marks;
    let mut right = PAD + label_band(&chart.y_right.label, metrics, fs) + rw + marks;
    let bottom = PAD + label_band(&chart.x_axis.label, metrics, fs) + xh + marks;
    // the topmost y tick label is centered on the frame edge
    let top = PAD + lh.max(rh) * 0.5;

    // x tick labels at the frame corners overhang by half their width
    if let Some(first) = xt.labels.first() {
        left = left.max(PAD + metrics.measure(first, fs).0 * 0.5);
    }
    if let Some(last) = xt.labels.last() {
        right = right.max(PAD + metrics.measure(last, fs).0 * 0.5);
    }

    let insets = Insets::new(left.ceil() as u32, right.ceil() as u32, top.ceil() as u32, bottom.ceil() as u32);
    tracing::debug!(?insets, "tight layout");
    insets
}
