//! Pixel operations: watermark scaling and source-overwrite compositing.

pub(crate) mod composite;
pub(crate) mod resize;

pub use composite::composite;
pub use resize::{RESIZE_FILTER, resize};
