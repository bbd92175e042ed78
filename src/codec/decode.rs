use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::foundation::error::{WmError, WmResult};

/// The closed set of decoders tried when loading a source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecoderKind {
    /// PNG.
    Png,
    /// JPEG.
    Jpeg,
    /// GIF (first frame).
    Gif,
}

impl DecoderKind {
    /// Trial order used by [`decode`].
    pub const ORDER: [DecoderKind; 3] = [DecoderKind::Png, DecoderKind::Jpeg, DecoderKind::Gif];

    fn format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Gif => ImageFormat::Gif,
        }
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
        }
    }

    fn try_decode(self, bytes: &[u8]) -> image::ImageResult<RgbaImage> {
        image::load_from_memory_with_format(bytes, self.format()).map(|img| img.to_rgba8())
    }
}

/// Decode an image file into straight RGBA8.
pub fn decode(path: &Path) -> WmResult<RgbaImage> {
    decode_with_kind(path).map(|(img, _)| img)
}

/// Decode an image file, also reporting which decoder accepted it.
#[tracing::instrument(level = "debug")]
pub fn decode_with_kind(path: &Path) -> WmResult<(RgbaImage, DecoderKind)> {
    let bytes = std::fs::read(path).map_err(|e| WmError::file_read(path, e))?;
    decode_bytes(&bytes, path)
}

/// Decode in-memory bytes. `origin` is only used for diagnostics and errors.
///
/// Decoders are tried in [`DecoderKind::ORDER`]; the first success wins. Failed attempts are
/// logged and otherwise ignored.
pub fn decode_bytes(bytes: &[u8], origin: &Path) -> WmResult<(RgbaImage, DecoderKind)> {
    for kind in DecoderKind::ORDER {
        match kind.try_decode(bytes) {
            Ok(img) => return Ok((img, kind)),
            Err(err) => {
                tracing::debug!(
                    path = %origin.display(),
                    decoder = kind.name(),
                    error = %err,
                    "decoder rejected input"
                );
            }
        }
    }
    Err(WmError::unsupported_format(origin))
}

/// Read width and height from the image header without decoding pixels.
///
/// Only formats in [`DecoderKind::ORDER`] are accepted, so a file that probes successfully is
/// also one [`decode`] can load.
pub fn decode_dimensions(path: &Path) -> WmResult<(u32, u32)> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| WmError::file_read(path, e))?
        .with_guessed_format()
        .map_err(|e| WmError::file_read(path, e))?;
    let supported = reader
        .format()
        .is_some_and(|f| DecoderKind::ORDER.iter().any(|k| k.format() == f));
    if !supported {
        return Err(WmError::unsupported_format(path));
    }
    match reader.into_dimensions() {
        Ok(dims) => Ok(dims),
        Err(image::ImageError::IoError(e)) => Err(WmError::file_read(path, e)),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "header probe failed");
            Err(WmError::unsupported_format(path))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codec/decode.rs"]
mod tests;
