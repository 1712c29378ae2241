// File: crates/twinplot-demo/src/main.rs
// Summary: Demo loads a cluster-count sweep CSV (k, inertia, silhouette) and renders a twin-axis PNG.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use twinplot_core::{theme, two_plots_with, PngFileViewer, RenderOptions};

/// One row of a k-means sweep.
#[derive(Clone, Copy, Debug)]
struct SweepRow {
    k: f64,
    inertia: f64,
    silhouette: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Usage: twinplot-demo [sweep.csv] [out.png] [theme]
    let mut args = std::env::args().skip(1);
    let input = args.next();
    let out = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| out_name_for(input.as_deref().map(Path::new)));
    let theme_name = args.next().unwrap_or_else(|| "classic".to_string());

    let rows = match &input {
        Some(raw) => {
            let path = Path::new(raw);
            load_sweep_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            tracing::info!("no input given, using built-in sample sweep");
            sample_sweep()
        }
    };
    tracing::info!(rows = rows.len(), "loaded sweep");

    if rows.is_empty() {
        anyhow::bail!("no sweep rows loaded; check headers/delimiter.");
    }

    let k: Vec<f64> = rows.iter().map(|r| r.k).collect();
    let inertia: Vec<f64> = rows.iter().map(|r| r.inertia).collect();
    let silhouette: Vec<f64> = rows.iter().map(|r| r.silhouette).collect();

    let opts = RenderOptions { theme: theme::find(&theme_name), ..RenderOptions::default() };
    let mut viewer = PngFileViewer::new(&out);
    two_plots_with(&k, &inertia, &silhouette, "k", "inertia", "silhouette", &mut viewer, &opts)
        .with_context(|| format!("rendering {}", out.display()))?;

    println!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/twin_<stem>.png
fn out_name_for(input: Option<&Path>) -> PathBuf {
    let stem = input
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("sample");
    PathBuf::from("target/out").join(format!("twin_{}.png", stem))
}

/// Load a sweep CSV, matching columns by common header names.
fn load_sweep_csv(path: &Path) -> Result<Vec<SweepRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_k = idx(&["k", "n_clusters", "clusters", "num_clusters"]);
    let i_inertia = idx(&["inertia", "sse", "wcss", "distortion"]);
    let i_sil = idx(&["silhouette", "silhouette_score", "score"]);

    let (Some(i_k), Some(i_inertia), Some(i_sil)) = (i_k, i_inertia, i_sil) else {
        anyhow::bail!("expected k, inertia and silhouette columns, found {:?}", headers);
    };

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.parse::<f64>().ok()) };
        match (parse(i_k), parse(i_inertia), parse(i_sil)) {
            (Some(k), Some(inertia), Some(silhouette)) => out.push(SweepRow { k, inertia, silhouette }),
            _ => tracing::warn!(line = line + 2, "skipping row with unparseable values"),
        }
    }
    Ok(out)
}

/// Elbow-shaped inertia and a silhouette peak at k = 4.
fn sample_sweep() -> Vec<SweepRow> {
    (2..=10)
        .map(|k| {
            let kf = k as f64;
            SweepRow {
                k: kf,
                inertia: 300.0 + 3_600.0 / (kf * kf),
                silhouette: 0.68 - 0.035 * (kf - 4.0).abs() * (1.0 + 0.1 * kf),
            }
        })
        .collect()
}
