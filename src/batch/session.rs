use std::path::{Path, PathBuf};

use crate::foundation::geom::Placement;

/// Caller-owned selection of input files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSession {
    /// Background images, in output order.
    pub backgrounds: Vec<PathBuf>,
    /// Watermark images, in output order.
    pub watermarks: Vec<PathBuf>,
}

impl BatchSession {
    /// Session from two file lists.
    pub fn new(backgrounds: Vec<PathBuf>, watermarks: Vec<PathBuf>) -> Self {
        Self {
            backgrounds,
            watermarks,
        }
    }

    /// Number of (background, watermark) pairs a run would produce.
    pub fn total_pairs(&self) -> u64 {
        (self.backgrounds.len() as u64).saturating_mul(self.watermarks.len() as u64)
    }

    /// Pairs in run order: backgrounds outer, watermarks inner.
    pub fn pairs(&self) -> impl Iterator<Item = (&Path, &Path)> + '_ {
        self.backgrounds.iter().flat_map(move |bg| {
            self.watermarks
                .iter()
                .map(move |wm| (bg.as_path(), wm.as_path()))
        })
    }
}

/// Per-run parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchRequest {
    /// Directory receiving the outputs. Created if missing.
    pub out_dir: PathBuf,
    /// Watermark placement in display space.
    pub placement: Placement,
}

impl BatchRequest {
    /// Request writing into `out_dir` with `placement`.
    pub fn new(out_dir: impl Into<PathBuf>, placement: Placement) -> Self {
        Self {
            out_dir: out_dir.into(),
            placement,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/session.rs"]
mod tests;
