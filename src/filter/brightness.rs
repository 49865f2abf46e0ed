//! Output brightness scaling
//!
//! Scales every channel of every pixel by a fixed factor when a frame
//! is emitted. The stored pixel colors are never modified.

use libm::floorf;

use super::Filter;
use crate::color::Rgb;

/// Linear brightness scaling with floor rounding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessFilter {
    /// Scale factor (0.0-1.0)
    brightness: f32,
}

impl BrightnessFilter {
    /// Create a new brightness filter
    ///
    /// Values outside 0.0-1.0 are clamped, NaN turns the output off.
    pub fn new(brightness: f32) -> Self {
        let brightness = if brightness.is_nan() {
            0.0
        } else {
            brightness.clamp(0.0, 1.0)
        };
        Self { brightness }
    }

    /// Get the scale factor
    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Scale a single channel: `floor(value * brightness)`
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scale(&self, value: u8) -> u8 {
        floorf(f32::from(value) * self.brightness) as u8
    }
}

impl Filter for BrightnessFilter {
    fn apply(&self, frame: &mut [Rgb]) {
        if self.brightness >= 1.0 {
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = self.scale(pixel.r);
            pixel.g = self.scale(pixel.g);
            pixel.b = self.scale(pixel.b);
        }
    }
}
