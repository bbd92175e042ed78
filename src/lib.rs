//! wmbatch composites every (background, watermark) pair of two image sets into PNG files.
//!
//! - Select inputs into a [`BatchSession`]
//! - Describe the output directory and [`Placement`] in a [`BatchRequest`]
//! - Run a [`BatchRunner`], observing per-pair [`Progress`] through a [`ProgressSink`]
//!
//! A presentation layer implements [`Shell`] and drives everything through [`App`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod batch;
pub mod codec;
pub mod config;
pub mod imaging;
pub mod preview;
pub mod shell;

#[cfg(test)]
#[path = "../tests/support/mod.rs"]
pub(crate) mod test_support;

pub use crate::foundation::error::{InputSet, WmError, WmResult};
pub use crate::foundation::geom::{Placement, RealRect};

pub use crate::batch::{
    BatchReport, BatchRequest, BatchRunner, BatchSession, ChannelProgress, InMemoryProgress,
    NoProgress, Progress, ProgressSink, RunState,
};
pub use crate::codec::DecoderKind;
pub use crate::config::BatchJob;
pub use crate::preview::{PreviewImage, SetupPreview};
pub use crate::shell::{App, FileFilter, NoticeKind, Shell};
