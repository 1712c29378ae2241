// File: crates/twinplot-core/src/plot.rs
// Summary: `two_plots`: one metric on the left axis, a [0, 1]-bounded metric on the right, shared x.

use crate::axis::{Axis, YAxis};
use crate::chart::{RenderOptions, TwinChart};
use crate::error::Result;
use crate::series::Series;
use crate::theme::Theme;
use crate::viewer::Viewer;

/// Padding added around autoscaled ranges, as a fraction of the data span.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

/// Build the twin-axis figure without showing it.
///
/// `y1` goes on the left axis in the primary color and `y2` on the right axis
/// in the secondary color, each axis labelled and tick-colored to match its
/// line. The right axis is fixed to `[0, 1]` whatever `y2` holds; values
/// outside it are clipped when drawn.
///
/// # Errors
///
/// [`ChartError::LengthMismatch`](crate::ChartError::LengthMismatch) when `y1`
/// or `y2` is not the same length as `x`.
pub fn build_two_plots(
    x: &[f64],
    y1: &[f64],
    y2: &[f64],
    xlabel: &str,
    y1label: &str,
    y2label: &str,
    theme: &Theme,
) -> Result<TwinChart> {
    let left = Series::from_columns(x, y1, YAxis::Left, theme.primary)?;
    let right = Series::from_columns(x, y2, YAxis::Right, theme.secondary)?;

    let outside = y2.iter().filter(|v| v.is_finite() && !(0.0..=1.0).contains(*v)).count();
    if outside > 0 {
        tracing::warn!(outside, "right-axis values outside [0, 1] will be clipped");
    }

    let mut chart = TwinChart::new();
    chart.x_axis = Axis::new(xlabel, 0.0, 1.0);
    chart.y_left = Axis::new(y1label, 0.0, 1.0).with_color(theme.primary);
    chart.y_right = Axis::fixed(y2label, 0.0, 1.0).with_color(theme.secondary);
    chart.add_series(left);
    chart.add_series(right);
    chart.autoscale_axes(AUTOSCALE_MARGIN);
    Ok(chart)
}

/// Plot `y1` and `y2` against a shared `x` on twin y-axes and show the figure
/// on `viewer` with default render options (tight layout).
///
/// Every call builds its own figure. Nothing is shown when the inputs are
/// rejected.
pub fn two_plots(
    x: &[f64],
    y1: &[f64],
    y2: &[f64],
    xlabel: &str,
    y1label: &str,
    y2label: &str,
    viewer: &mut dyn Viewer,
) -> Result<()> {
    two_plots_with(x, y1, y2, xlabel, y1label, y2label, viewer, &RenderOptions::default())
}

/// [`two_plots`] with explicit render options.
#[allow(clippy::too_many_arguments)]
pub fn two_plots_with(
    x: &[f64],
    y1: &[f64],
    y2: &[f64],
    xlabel: &str,
    y1label: &str,
    y2label: &str,
    viewer: &mut dyn Viewer,
    opts: &RenderOptions,
) -> Result<()> {
    let chart = build_two_plots(x, y1, y2, xlabel, y1label, y2label, &opts.theme)?;
    viewer.show(&chart, opts)
}
