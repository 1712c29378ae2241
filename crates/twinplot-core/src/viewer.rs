// File: crates/twinplot-core/src/viewer.rs
// Summary: Display targets for finished figures: PNG files and an in-memory headless viewer.

use std::path::PathBuf;

use crate::chart::{RenderOptions, TwinChart};
use crate::error::Result;

/// Somewhere a finished figure can be shown.
pub trait Viewer {
    fn show(&mut self, chart: &TwinChart, opts: &RenderOptions) -> Result<()>;
}

/// Writes every shown figure to the same PNG path.
#[derive(Clone, Debug)]
pub struct PngFileViewer {
    path: PathBuf,
}

impl PngFileViewer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Viewer for PngFileViewer {
    fn show(&mut self, chart: &TwinChart, opts: &RenderOptions) -> Result<()> {
        chart.render_to_png(opts, &self.path)?;
        tracing::info!(path = %self.path.display(), "wrote figure");
        Ok(())
    }
}

/// Renders without any output device, keeping the encoded frames.
///
/// Frames accumulate until drained with [`HeadlessViewer::take_frames`];
/// long-running callers should drain after each batch.
#[derive(Clone, Debug, Default)]
pub struct HeadlessViewer {
    frames: Vec<Vec<u8>>,
}

impl HeadlessViewer {
    pub fn new() -> Self { Self::default() }

    /// PNG bytes of every figure shown so far, oldest first.
    pub fn frames(&self) -> &[Vec<u8>] { &self.frames }

    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Hand over every stored frame, leaving the viewer empty.
    pub fn take_frames(&mut self) -> Vec<Vec<u8>> {
        std::mem::take(&mut self.frames)
    }
}

impl Viewer for HeadlessViewer {
    fn show(&mut self, chart: &TwinChart, opts: &RenderOptions) -> Result<()> {
        let bytes = chart.render_to_png_bytes(opts)?;
        tracing::info!(frame = self.frames.len(), bytes = bytes.len(), "rendered headless figure");
        self.frames.push(bytes);
        Ok(())
    }
}
