use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Resampling filter used for watermark scaling.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Scale `img` to exactly `width` x `height`, ignoring its aspect ratio.
///
/// Both dimensions must be non-zero; the batch runner rejects placements that would violate this
/// before any image is touched.
pub fn resize(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    imageops::resize(img, width, height, RESIZE_FILTER)
}

#[cfg(test)]
#[path = "../../tests/unit/imaging/resize.rs"]
mod tests;
