//! Image codec adapter: ordered PNG/JPEG/GIF decoding and PNG encoding.

pub(crate) mod decode;
pub(crate) mod encode;

pub use decode::{DecoderKind, decode, decode_bytes, decode_dimensions, decode_with_kind};
pub use encode::encode_png;
