use std::path::{Path, PathBuf};

use crate::batch::naming::output_path;
use crate::batch::progress::{Progress, ProgressSink};
use crate::batch::session::{BatchRequest, BatchSession};
use crate::codec::{decode, encode_png};
use crate::foundation::error::{InputSet, WmError, WmResult};
use crate::foundation::geom::RealRect;
use crate::imaging::{composite, resize};

/// Lifecycle of a [`BatchRunner`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// No run in progress. Also the state after a rejected run.
    #[default]
    Idle,
    /// Checking inputs; no image I/O happens here.
    Validating,
    /// Processing pairs.
    Running,
    /// Every pair was written.
    Completed,
    /// A pair failed; earlier outputs stay on disk.
    Failed,
}

/// Summary of a completed run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Written files in run order. Colliding names appear once per write.
    pub outputs: Vec<PathBuf>,
    /// Number of pairs processed.
    pub total_pairs: u64,
    /// Rectangle used for every pair.
    pub real: Option<RealRect>,
}

/// Sequential batch compositor.
///
/// Each call to [`BatchRunner::run`] walks `Validating -> Running -> Completed | Failed`, or
/// returns to `Idle` when validation rejects the request.
#[derive(Debug, Default)]
pub struct BatchRunner {
    state: RunState,
}

impl BatchRunner {
    /// Runner in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Composite every (background, watermark) pair of `session` into `request.out_dir`.
    ///
    /// Stops at the first failing pair.
    #[tracing::instrument(skip_all, fields(out_dir = %request.out_dir.display()))]
    pub fn run(
        &mut self,
        session: &BatchSession,
        request: &BatchRequest,
        sink: &mut dyn ProgressSink,
    ) -> WmResult<BatchReport> {
        self.state = RunState::Validating;
        let real = match validate(session, request) {
            Ok(real) => real,
            Err(err) => {
                tracing::warn!(error = %err, "batch rejected");
                self.state = RunState::Idle;
                return Err(err);
            }
        };

        self.state = RunState::Running;
        let total = session.total_pairs();
        tracing::info!(
            total,
            top = real.top,
            left = real.left,
            width = real.width,
            height = real.height,
            "batch started"
        );

        let mut report = BatchReport {
            outputs: Vec::with_capacity(total.min(4096) as usize),
            total_pairs: total,
            real: Some(real),
        };
        let mut completed = 0u64;

        for (background, watermark) in session.pairs() {
            let out = output_path(&request.out_dir, background, watermark);
            if let Err(err) = process_pair(background, watermark, &out, real) {
                tracing::error!(
                    background = %background.display(),
                    watermark = %watermark.display(),
                    error = %err,
                    "batch failed"
                );
                self.state = RunState::Failed;
                return Err(err);
            }
            tracing::info!(out = %out.display(), "wrote");
            report.outputs.push(out);

            completed += 1;
            sink.progress(Progress::new(completed, total));
        }

        self.state = RunState::Completed;
        tracing::info!(total, "batch completed");
        Ok(report)
    }
}

fn validate(session: &BatchSession, request: &BatchRequest) -> WmResult<RealRect> {
    if session.backgrounds.is_empty() {
        return Err(WmError::EmptyInputSet(InputSet::Backgrounds));
    }
    if session.watermarks.is_empty() {
        return Err(WmError::EmptyInputSet(InputSet::Watermarks));
    }
    let real = request.placement.validated_real()?;
    ensure_out_dir(&request.out_dir)?;
    Ok(real)
}

/// Make sure `dir` exists as a directory, creating it with its parents if missing.
pub fn ensure_out_dir(dir: &Path) -> WmResult<()> {
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(WmError::DirectoryConflict {
            path: dir.to_path_buf(),
        }),
        Err(_) => std::fs::create_dir_all(dir).map_err(|e| WmError::file_write(dir, e)),
    }
}

/// Decode, resize, composite and encode a single pair.
pub fn process_pair(
    background: &Path,
    watermark: &Path,
    out: &Path,
    real: RealRect,
) -> WmResult<()> {
    let bg = decode(background)?;
    let wm = decode(watermark)?;
    let (width, height) = real.size();
    let wm = resize(&wm, width, height);
    let canvas = composite(&bg, &wm, real.left, real.top);
    encode_png(&canvas, out)
}

#[cfg(test)]
#[path = "../../tests/unit/batch/runner.rs"]
mod tests;
