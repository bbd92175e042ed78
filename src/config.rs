//! JSON job files describing a complete batch.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::batch::{BatchRequest, BatchSession};
use crate::foundation::error::{WmError, WmResult};
use crate::foundation::geom::Placement;

/// A batch described on disk.
///
/// ```json
/// {
///   "backgrounds": ["bg/a.png"],
///   "watermarks": ["wm/logo.png"],
///   "out_dir": "out",
///   "placement": { "top": 10, "left": 10, "width": 50, "height": 50, "resize_rate": 2.0 }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchJob {
    /// Background images.
    pub backgrounds: Vec<PathBuf>,
    /// Watermark images.
    pub watermarks: Vec<PathBuf>,
    /// Output directory.
    pub out_dir: PathBuf,
    /// Watermark placement.
    pub placement: Placement,
}

impl BatchJob {
    /// Load a job file. Relative paths inside it resolve against the file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> WmResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| WmError::file_read(path, e))?;
        let job = Self::from_reader(BufReader::new(f))
            .map_err(|e| WmError::config(format!("'{}': {e}", path.display())))?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(job.resolve_relative_to(root))
    }

    /// Parse a job from JSON text. Paths are kept as written.
    pub fn from_json_str(s: &str) -> WmResult<Self> {
        serde_json::from_str(s).map_err(|e| WmError::config(e.to_string()))
    }

    fn from_reader(r: impl Read) -> serde_json::Result<Self> {
        serde_json::from_reader(r)
    }

    /// Prefix every relative path with `root`.
    pub fn resolve_relative_to(mut self, root: &Path) -> Self {
        let fix = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = root.join(&*p);
            }
        };
        self.backgrounds.iter_mut().for_each(fix);
        self.watermarks.iter_mut().for_each(fix);
        fix(&mut self.out_dir);
        self
    }

    /// Split into the session and request consumed by [`crate::BatchRunner`].
    pub fn into_parts(self) -> (BatchSession, BatchRequest) {
        (
            BatchSession::new(self.backgrounds, self.watermarks),
            BatchRequest::new(self.out_dir, self.placement),
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
