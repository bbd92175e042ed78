//! Presentation-shell contract and the controller driving it.

use std::path::PathBuf;

use crate::batch::{BatchRequest, BatchRunner, BatchSession, Progress, RunState};
use crate::foundation::geom::Placement;
use crate::preview::{SetupPreview, setup_preview, thumbnails};

/// File-picker filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileFilter {
    /// Label shown next to the filter.
    pub display_name: &'static str,
    /// Glob patterns such as `*.png`.
    pub patterns: &'static [&'static str],
}

impl FileFilter {
    /// Filter offered when selecting backgrounds or watermarks.
    pub const IMAGES: FileFilter = FileFilter {
        display_name: "Image files",
        patterns: &["*.jpg", "*.jpeg", "*.png"],
    };

    /// Case-insensitive match of a file name against the `*.ext` patterns.
    pub fn matches(&self, path: &std::path::Path) -> bool {
        let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase()) else {
            return false;
        };
        self.patterns
            .iter()
            .filter_map(|p| p.strip_prefix("*."))
            .any(|p| p.eq_ignore_ascii_case(&ext))
    }
}

/// Kind of user-facing notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Informational.
    Info,
    /// Something failed.
    Error,
}

/// What the controller needs from a user interface.
pub trait Shell {
    /// Ask for a list of files. Cancelling returns an empty list.
    fn pick_files(&mut self, filter: &FileFilter) -> Vec<PathBuf>;
    /// Ask for a directory. Cancelling returns `None`.
    fn pick_directory(&mut self) -> Option<PathBuf>;
    /// Progress notification; may be dropped.
    fn emit_progress(&mut self, percent: u32);
    /// Show a message to the user.
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str);
}

/// Controller holding the current selection and running batches on behalf of a [`Shell`].
pub struct App<S: Shell> {
    shell: S,
    session: BatchSession,
    runner: BatchRunner,
}

impl<S: Shell> App<S> {
    /// Controller with an empty selection.
    pub fn new(shell: S) -> Self {
        Self {
            shell,
            session: BatchSession::default(),
            runner: BatchRunner::new(),
        }
    }

    /// Borrow the shell.
    pub fn shell(&self) -> &S {
        &self.shell
    }

    /// Mutably borrow the shell.
    pub fn shell_mut(&mut self) -> &mut S {
        &mut self.shell
    }

    /// Give back the shell.
    pub fn into_shell(self) -> S {
        self.shell
    }

    /// Current selection.
    pub fn session(&self) -> &BatchSession {
        &self.session
    }

    /// State of the last run.
    pub fn state(&self) -> RunState {
        self.runner.state()
    }

    /// Replace the background selection with the user's pick.
    pub fn select_backgrounds(&mut self) {
        self.session.backgrounds = self.shell.pick_files(&FileFilter::IMAGES);
    }

    /// Replace the watermark selection with the user's pick.
    pub fn select_watermarks(&mut self) {
        self.session.watermarks = self.shell.pick_files(&FileFilter::IMAGES);
    }

    /// Base64 thumbnails of the selected backgrounds.
    pub fn background_thumbnails(&self) -> Vec<String> {
        thumbnails(&self.session.backgrounds)
    }

    /// Base64 thumbnails of the selected watermarks.
    pub fn watermark_thumbnails(&self) -> Vec<String> {
        thumbnails(&self.session.watermarks)
    }

    /// Data for the placement editor.
    pub fn setup_preview(&self) -> SetupPreview {
        setup_preview(&self.session.backgrounds, &self.session.watermarks)
    }

    /// Ask the user where outputs go.
    pub fn choose_output_dir(&mut self) -> Option<PathBuf> {
        self.shell.pick_directory()
    }

    /// Run the batch over the current selection and report the outcome through the shell.
    pub fn start(&mut self, out_dir: impl Into<PathBuf>, placement: Placement) -> RunState {
        let request = BatchRequest::new(out_dir, placement);
        let mut forward = |p: Progress| self.shell.emit_progress(p.percent);
        let result = self.runner.run(&self.session, &request, &mut forward);

        match result {
            Ok(_) => {
                self.shell
                    .notify(NoticeKind::Info, "Done", "All images generated");
            }
            Err(err) if self.runner.state() == RunState::Idle => {
                self.shell
                    .notify(NoticeKind::Error, "Error", &err.to_string());
            }
            Err(err) => {
                tracing::error!(error = %err, "batch aborted");
                self.shell
                    .notify(NoticeKind::Error, "Something went wrong", &err.to_string());
            }
        }
        self.runner.state()
    }
}

#[cfg(test)]
#[path = "../tests/unit/shell.rs"]
mod tests;
