// File: crates/twinplot-core/src/error.rs
// Summary: Error type shared by chart construction and rendering.

use thiserror::Error;

use crate::axis::YAxis;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A y column does not line up with the shared x column.
    #[error("{side} series has {got} values but x has {expected}")]
    LengthMismatch { side: YAxis, expected: usize, got: usize },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
