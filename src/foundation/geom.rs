use crate::foundation::error::{WmError, WmResult};

fn default_resize_rate() -> f64 {
    1.0
}

/// Watermark placement in display-space pixels, plus the factor mapping display space to image
/// space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Placement {
    /// Distance from the top edge.
    pub top: i32,
    /// Distance from the left edge.
    pub left: i32,
    /// Watermark width.
    pub width: i32,
    /// Watermark height.
    pub height: i32,
    /// Display-to-actual scale factor.
    #[serde(default = "default_resize_rate")]
    pub resize_rate: f64,
}

impl Placement {
    /// Placement with a resize rate of `1.0`.
    pub fn new(top: i32, left: i32, width: i32, height: i32) -> Self {
        Self {
            top,
            left,
            width,
            height,
            resize_rate: default_resize_rate(),
        }
    }

    /// Replace the resize rate.
    pub fn with_resize_rate(mut self, resize_rate: f64) -> Self {
        self.resize_rate = resize_rate;
        self
    }

    /// Scale into image space. Every field is truncated toward zero.
    pub fn real(self) -> RealRect {
        let scale = |v: i32| (f64::from(v) * self.resize_rate) as i32;
        RealRect {
            top: scale(self.top),
            left: scale(self.left),
            width: scale(self.width),
            height: scale(self.height),
        }
    }

    /// Scale into image space, rejecting rectangles that cannot hold a watermark.
    pub fn validated_real(self) -> WmResult<RealRect> {
        if !self.resize_rate.is_finite() || self.resize_rate <= 0.0 {
            return Err(WmError::invalid_placement(format!(
                "resize rate must be finite and > 0 (got {})",
                self.resize_rate
            )));
        }
        let real = self.real();
        if real.width <= 0 || real.height <= 0 {
            return Err(WmError::invalid_placement(format!(
                "watermark size must be > 0 after scaling (got {}x{})",
                real.width, real.height
            )));
        }
        Ok(real)
    }
}

/// Placement rectangle in image-space pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RealRect {
    /// Y offset of the watermark on the background.
    pub top: i32,
    /// X offset of the watermark on the background.
    pub left: i32,
    /// Target watermark width.
    pub width: i32,
    /// Target watermark height.
    pub height: i32,
}

impl RealRect {
    /// Resize target as unsigned dimensions. Negative sizes clamp to zero.
    pub fn size(self) -> (u32, u32) {
        (
            u32::try_from(self.width).unwrap_or(0),
            u32::try_from(self.height).unwrap_or(0),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
