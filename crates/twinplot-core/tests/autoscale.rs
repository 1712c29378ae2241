// File: crates/twinplot-core/tests/autoscale.rs
// Purpose: Validate autoscale per axis, fixed axes, empty and non-finite data.

use twinplot_core::theme::{TAB_BLUE, TAB_RED};
use twinplot_core::scale::LinearScale;
use twinplot_core::view::padded_range;
use twinplot_core::{Axis, Series, TwinChart, YAxis};

#[test]
fn autoscale_each_y_axis_from_its_own_series() {
    let mut chart = TwinChart::new();
    chart.add_series(Series::with_data(YAxis::Left, TAB_RED, vec![(0.0, 100.0), (5.0, 300.0)]));
    chart.add_series(Series::with_data(YAxis::Right, TAB_BLUE, vec![(1.0, 0.1), (8.0, 0.4)]));

    chart.autoscale_axes(0.0);

    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 8.0));
    assert_eq!((chart.y_left.min, chart.y_left.max), (100.0, 300.0));
    assert!((chart.y_right.min - 0.1).abs() < 1e-12);
    assert!((chart.y_right.max - 0.4).abs() < 1e-12);
}

#[test]
fn autoscale_margin_pads_both_ends() {
    let mut chart = TwinChart::new();
    chart.add_series(Series::with_data(YAxis::Left, TAB_RED, vec![(0.0, 0.0), (10.0, 20.0)]));
    chart.autoscale_axes(0.05);
    assert!((chart.x_axis.min + 0.5).abs() < 1e-9);
    assert!((chart.x_axis.max - 10.5).abs() < 1e-9);
    assert!((chart.y_left.min + 1.0).abs() < 1e-9);
    assert!((chart.y_left.max - 21.0).abs() < 1e-9);
}

#[test]
fn fixed_axes_are_not_rescaled() {
    let mut chart = TwinChart::new();
    chart.x_axis = Axis::fixed("k", 0.0, 20.0);
    chart.y_right = Axis::fixed("silhouette", 0.0, 1.0);
    chart.add_series(Series::with_data(YAxis::Right, TAB_BLUE, vec![(2.0, 0.3), (9.0, 0.35)]));
    chart.autoscale_axes(0.05);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 20.0));
    assert_eq!((chart.y_right.min, chart.y_right.max), (0.0, 1.0));
}

#[test]
fn empty_and_non_finite_data_fall_back_to_unit_range() {
    let mut chart = TwinChart::new();
    chart.add_series(Series::with_data(YAxis::Left, TAB_RED, vec![(f64::NAN, 1.0), (2.0, f64::INFINITY)]));
    chart.autoscale_axes(0.05);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));
    assert_eq!((chart.y_left.min, chart.y_left.max), (0.0, 1.0));
}

#[test]
fn single_point_span_is_widened() {
    let mut chart = TwinChart::new();
    chart.add_series(Series::with_data(YAxis::Left, TAB_RED, vec![(3.0, 7.0)]));
    chart.autoscale_axes(0.0);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (3.0, 4.0));
    assert_eq!((chart.y_left.min, chart.y_left.max), (7.0, 8.0));
}

#[test]
fn non_finite_points_split_runs() {
    let s = Series::with_data(
        YAxis::Left,
        TAB_RED,
        vec![(0.0, 1.0), (1.0, 2.0), (2.0, f64::NAN), (3.0, 4.0), (4.0, 5.0), (5.0, 6.0)],
    );
    let runs = s.finite_runs();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].len(), 2);
    assert_eq!(runs[1].len(), 3);
}

#[test]
fn near_overflow_span_stays_finite() {
    let mut chart = TwinChart::new();
    chart.add_series(Series::with_data(YAxis::Left, TAB_RED, vec![(0.0, -1e308), (1.0, 1e308)]));
    chart.autoscale_axes(0.05);
    assert!(chart.y_left.min.is_finite() && chart.y_left.max.is_finite());
    assert!(chart.y_left.min <= -1e308 && chart.y_left.max >= 1e308);

    let s = LinearScale::vertical(&chart.y_left, 0.0, 100.0);
    assert!(s.to_px(1e308).is_finite());
    assert!(s.to_px(-1e308).is_finite());
    assert!(s.to_px(1e308) < s.to_px(-1e308));
}

#[test]
fn padding_past_f64_max_falls_back_to_data_range() {
    let (lo, hi) = padded_range(Some((-f64::MAX, f64::MAX)), 0.05);
    assert_eq!((lo, hi), (-f64::MAX, f64::MAX));
    assert_eq!(padded_range(Some((f64::NEG_INFINITY, 1.0)), 0.05), (0.0, 1.0));
}
