//! Thumbnails and setup preview data for a presentation shell.

use std::path::Path;

use base64::Engine as _;

use crate::codec::decode_dimensions;
use crate::foundation::error::{WmError, WmResult};

/// One image ready for display.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PreviewImage {
    /// Raw file bytes, standard base64.
    pub data_base64: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// First background and first watermark of a selection, used to lay out the placement editor.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SetupPreview {
    /// First selected background, if any.
    pub background: Option<PreviewImage>,
    /// First selected watermark, if any.
    pub watermark: Option<PreviewImage>,
}

/// Base64 of the file's bytes, unmodified.
pub fn file_base64(path: &Path) -> WmResult<String> {
    let bytes = std::fs::read(path).map_err(|e| WmError::file_read(path, e))?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// Base64 data plus header dimensions.
pub fn preview_image(path: &Path) -> WmResult<PreviewImage> {
    let data_base64 = file_base64(path)?;
    let (width, height) = decode_dimensions(path)?;
    Ok(PreviewImage {
        data_base64,
        width,
        height,
    })
}

/// Base64 of every file in order. Stops at the first unreadable file, logging the error and
/// returning what was collected before it.
pub fn thumbnails<P: AsRef<Path>>(files: &[P]) -> Vec<String> {
    let mut out = Vec::with_capacity(files.len());
    for file in files {
        match file_base64(file.as_ref()) {
            Ok(data) => out.push(data),
            Err(err) => {
                tracing::error!(error = %err, "thumbnail failed");
                break;
            }
        }
    }
    out
}

/// Preview of the first entry of each list.
///
/// An unreadable background leaves the whole preview empty; an unreadable watermark keeps the
/// background.
pub fn setup_preview<P: AsRef<Path>>(backgrounds: &[P], watermarks: &[P]) -> SetupPreview {
    let mut preview = SetupPreview::default();
    if let Some(first) = backgrounds.first() {
        match preview_image(first.as_ref()) {
            Ok(img) => preview.background = Some(img),
            Err(err) => {
                tracing::error!(error = %err, "background preview failed");
                return preview;
            }
        }
    }
    if let Some(first) = watermarks.first() {
        match preview_image(first.as_ref()) {
            Ok(img) => preview.watermark = Some(img),
            Err(err) => tracing::error!(error = %err, "watermark preview failed"),
        }
    }
    preview
}

#[cfg(test)]
#[path = "../tests/unit/preview.rs"]
mod tests;
