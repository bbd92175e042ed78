use std::path::{Path, PathBuf};

/// Convenience result type used throughout wmbatch.
pub type WmResult<T> = Result<T, WmError>;

/// Which of the two input sets a validation error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSet {
    /// Background images.
    Backgrounds,
    /// Watermark images.
    Watermarks,
}

impl std::fmt::Display for InputSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backgrounds => f.write_str("background"),
            Self::Watermarks => f.write_str("watermark"),
        }
    }
}

/// Error type for every fallible wmbatch operation.
#[derive(thiserror::Error, Debug)]
pub enum WmError {
    /// A source file could not be opened or read.
    #[error("read error: '{path}': {source}")]
    FileRead {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An output file or directory could not be created or written.
    #[error("write error: '{path}': {source}")]
    FileWrite {
        /// File or directory that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// None of the supported decoders accepted the file.
    #[error("unsupported image format: '{path}'")]
    UnsupportedFormat {
        /// File that failed to decode.
        path: PathBuf,
    },

    /// The output path exists and is not a directory.
    #[error("directory conflict: '{path}' already exists and is not a directory")]
    DirectoryConflict {
        /// Conflicting path.
        path: PathBuf,
    },

    /// One of the input sets is empty.
    #[error("empty input: at least one {0} image is required")]
    EmptyInputSet(InputSet),

    /// The placement rectangle or resize rate cannot produce a watermark.
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    /// A job file could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WmError {
    pub(crate) fn file_read(path: &Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn file_write(path: &Path, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn unsupported_format(path: &Path) -> Self {
        Self::UnsupportedFormat {
            path: path.to_path_buf(),
        }
    }

    /// Build an [`WmError::InvalidPlacement`].
    pub fn invalid_placement(msg: impl Into<String>) -> Self {
        Self::InvalidPlacement(msg.into())
    }

    /// Build a [`WmError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for input rejections (output path conflict, empty set, bad placement).
    ///
    /// A failure to create the output directory is a [`WmError::FileWrite`] and is not included,
    /// even though the runner raises it while validating.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::DirectoryConflict { .. } | Self::EmptyInputSet(_) | Self::InvalidPlacement(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
