use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twinplot_core::{build_two_plots, RenderOptions, Theme, TwinChart};

fn build_sweep(n: usize) -> TwinChart {
    let x: Vec<f64> = (0..n).map(|i| i as f64 + 2.0).collect();
    let y1: Vec<f64> = x.iter().map(|k| 5_000.0 / k + (k * 0.01).sin()).collect();
    let y2: Vec<f64> = x.iter().map(|k| 0.5 + 0.4 * (k * 0.05).sin()).collect();
    build_two_plots(&x, &y1, &y2, "k", "inertia", "silhouette", &Theme::classic())
        .expect("equal-length columns")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 50_000usize] {
        group.bench_function(format!("sweep_{n}"), |b| {
            let ch = build_sweep(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
