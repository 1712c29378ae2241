// File: crates/twinplot-core/src/grid.rs
// Summary: Grid/tick layout helpers: "nice" ticks and tick labels.

/// Round `raw` to the nearest 1, 2, 2.5 or 5 times a power of ten, upward.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let f = raw / base;
    let eps = 1e-9;
    let nf = if f <= 1.0 + eps {
        1.0
    } else if f <= 2.0 + eps {
        2.0
    } else if f <= 2.5 + eps {
        2.5
    } else if f <= 5.0 + eps {
        5.0
    } else {
        10.0
    };
    nf * base
}

/// Smallest tick step labelled in scientific notation.
const SCI_STEP: f64 = 1e6;

/// Upper bound on ticks per axis; anything more is a degenerate step.
const MAX_TICKS: i64 = 1_000;

/// Tick values inside `[min, max]`, roughly `target` of them, on a nice step.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() { return Vec::new(); }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let half_span = hi * 0.5 - lo * 0.5;
    if half_span < 5e-13 { return vec![lo]; }

    let step = nice_step(half_span / target.max(1) as f64 * 2.0);
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    if last - first > MAX_TICKS { return Vec::new(); }
    (first..=last)
        .map(|i| {
            let v = i as f64 * step;
            // snap accumulated error so labels read "0.0" not "-0.0"
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

/// Step between consecutive ticks, or 1.0 for fewer than two ticks.
pub fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => 1.0,
    }
}

/// Format a tick value with just enough decimals to tell neighbours apart.
/// Steps of a million or more switch to scientific notation.
pub fn format_tick(v: f64, step: f64) -> String {
    if step.is_finite() && step >= SCI_STEP {
        return if v == 0.0 { "0".to_string() } else { format!("{:e}", v) };
    }
    let decimals = if step > 0.0 && step.is_finite() {
        let exp = step.log10().floor();
        let mut d = (-exp).max(0.0) as usize;
        // 2.5 × 10^n (n <= 0) needs one more digit than its exponent suggests
        let mantissa = step / 10f64.powf(exp);
        if exp <= 0.0 && (mantissa - 2.5).abs() < 1e-6 { d += 1; }
        d
    } else {
        0
    };
    let s = format!("{:.*}", decimals, v);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') { s[1..].to_string() } else { s }
}
