use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder as _, RgbaImage};

use crate::foundation::error::{WmError, WmResult};

/// Encode `img` as PNG at `path`, creating or truncating the file.
#[tracing::instrument(level = "debug", skip(img), fields(width = img.width(), height = img.height()))]
pub fn encode_png(img: &RgbaImage, path: &Path) -> WmResult<()> {
    let file = File::create(path).map_err(|e| WmError::file_write(path, e))?;
    let mut writer = BufWriter::new(file);

    PngEncoder::new(&mut writer)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| WmError::file_write(path, into_io(e)))?;

    writer.flush().map_err(|e| WmError::file_write(path, e))
}

fn into_io(err: image::ImageError) -> std::io::Error {
    match err {
        image::ImageError::IoError(e) => e,
        other => std::io::Error::other(other),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codec/encode.rs"]
mod tests;
