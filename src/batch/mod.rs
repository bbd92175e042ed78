//! Batch runner over the background x watermark cross-product.

pub(crate) mod naming;
pub(crate) mod progress;
pub(crate) mod runner;
pub(crate) mod session;

pub use naming::{output_file_name, output_path, stem_before_last_dot};
pub use progress::{ChannelProgress, InMemoryProgress, NoProgress, Progress, ProgressSink};
pub use runner::{BatchReport, BatchRunner, RunState, ensure_out_dir, process_pair};
pub use session::{BatchRequest, BatchSession};
