use image::RgbaImage;
use image::imageops;

/// Place `watermark` over `background` at `(offset_x, offset_y)` on a new canvas.
///
/// Source-overwrite: every canvas pixel covered by the watermark takes the watermark's RGBA
/// value verbatim, alpha included. The parts of the watermark outside the canvas are clipped.
/// The canvas always has the background's dimensions.
pub fn composite(
    background: &RgbaImage,
    watermark: &RgbaImage,
    offset_x: i32,
    offset_y: i32,
) -> RgbaImage {
    let (width, height) = background.dimensions();
    let mut canvas = RgbaImage::new(width, height);
    imageops::replace(&mut canvas, background, 0, 0);
    imageops::replace(
        &mut canvas,
        watermark,
        i64::from(offset_x),
        i64::from(offset_y),
    );
    canvas
}

#[cfg(test)]
#[path = "../../tests/unit/imaging/composite.rs"]
mod tests;
