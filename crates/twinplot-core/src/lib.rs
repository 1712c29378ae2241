// File: crates/twinplot-core/src/lib.rs
// Summary: Core library entry point; exports the twin-axis chart API and headless rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod plot;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;
pub mod viewer;

pub use axis::{Axis, RangeMode, YAxis};
pub use chart::{RenderOptions, TwinChart};
pub use error::{ChartError, Result};
pub use plot::{build_two_plots, two_plots, two_plots_with};
pub use series::Series;
pub use text::{TextMetrics, TextShaper};
pub use theme::Theme;
pub use types::Insets;
pub use viewer::{HeadlessViewer, PngFileViewer, Viewer};
