// File: crates/twinplot-core/tests/ticks.rs
// Purpose: Nice tick selection, tick labels and value/pixel scales.

use twinplot_core::grid::{format_tick, nice_step, nice_ticks};
use twinplot_core::layout::{AxisTicks, Y_TICKS};
use twinplot_core::scale::LinearScale;
use twinplot_core::Axis;

fn approx(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
}

#[test]
fn nice_steps_snap_to_1_2_2_5_5() {
    assert!((nice_step(0.2) - 0.2).abs() < 1e-12);
    assert!((nice_step(0.23) - 0.25).abs() < 1e-12);
    assert!((nice_step(3.0) - 5.0).abs() < 1e-12);
    assert!((nice_step(130.0) - 200.0).abs() < 1e-9);
    assert!((nice_step(7.0) - 10.0).abs() < 1e-12);
    assert_eq!(nice_step(0.0), 1.0);
}

#[test]
fn unit_range_ticks() {
    let ticks = nice_ticks(0.0, 1.0, 5);
    assert!(approx(&ticks, &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]), "{ticks:?}");

    let axis = Axis::fixed("silhouette", 0.0, 1.0);
    let t = AxisTicks::for_axis(&axis, Y_TICKS);
    assert_eq!(t.labels, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
}

#[test]
fn ticks_stay_inside_range() {
    let ticks = nice_ticks(1.55, 10.45, 8);
    assert!(ticks.iter().all(|&v| (1.55..=10.45).contains(&v)), "{ticks:?}");
    assert!(approx(&ticks, &[2.0, 4.0, 6.0, 8.0, 10.0]), "{ticks:?}");
}

#[test]
fn degenerate_ranges() {
    assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
    assert!(nice_ticks(f64::NAN, 1.0, 5).is_empty());
    // reversed input is tolerated
    assert!(approx(&nice_ticks(1.0, 0.0, 5), &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]));
}

#[test]
fn extreme_ranges_still_get_finite_ticks() {
    let ticks = nice_ticks(-1.1e308, 1.1e308, 5);
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|v| v.is_finite()), "{ticks:?}");
    assert!(ticks.contains(&0.0));
}

#[test]
fn tick_label_precision_follows_step() {
    assert_eq!(format_tick(200.0, 100.0), "200");
    assert_eq!(format_tick(0.25, 0.25), "0.25");
    assert_eq!(format_tick(2.5, 2.5), "2.5");
    assert_eq!(format_tick(50.0, 25.0), "50");
    assert_eq!(format_tick(-0.0000001, 0.1), "0.0");
    assert_eq!(format_tick(5e307, 5e307), "5e307");
    assert_eq!(format_tick(0.0, 2e6), "0");
}

#[test]
fn vertical_scale_puts_max_on_top() {
    let axis = Axis::new("y", 0.0, 1.0);
    let s = LinearScale::vertical(&axis, 10.0, 110.0);
    assert!((s.to_px(0.0) - 110.0).abs() < 1e-4);
    assert!((s.to_px(1.0) - 10.0).abs() < 1e-4);
    assert!((s.to_px(0.5) - 60.0).abs() < 1e-4);
    assert!((s.from_px(60.0) - 0.5).abs() < 1e-6);
}

#[test]
fn horizontal_scale_and_zero_span() {
    let axis = Axis::new("x", 2.0, 2.0);
    let s = LinearScale::horizontal(&axis, 0.0, 100.0);
    // zero span is widened to 1
    assert!((s.to_px(3.0) - 100.0).abs() < 1e-4);
    assert!((s.from_px(50.0) - 2.5).abs() < 1e-6);
}
