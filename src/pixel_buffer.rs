//! In-memory pixel storage and frame emission
//!
//! Colors are stored unscaled. Brightness is applied and the channels are
//! packed into wire order only when a frame is emitted.

use core::fmt;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::OutputDriver;
use crate::color::{Rgb, pack_grb};
use crate::delay::block_for;
use crate::filter::{BrightnessFilter, Filter};
use crate::layer::Layer;

/// Error returned when writing past the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelIndexError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for PixelIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pixel index {} out of range 0..{}", self.index, self.len)
    }
}

impl core::error::Error for PixelIndexError {}

/// Fixed-length pixel buffer bound to a strip transmitter
pub struct PixelBuffer<D: OutputDriver, const N: usize> {
    driver: D,
    pixels: [Rgb; N],
    brightness: BrightnessFilter,
    latch: Duration,
}

impl<D: OutputDriver, const N: usize> PixelBuffer<D, N> {
    /// Create an all-black buffer
    ///
    /// # Arguments
    /// * `driver` - Transmitter the frames are handed to
    /// * `brightness` - Output scale (0.0-1.0)
    /// * `latch` - Wait after each frame before the next one may be sent
    pub fn new(driver: D, brightness: f32, latch: Duration) -> Self {
        Self {
            driver,
            pixels: [Rgb::default(); N],
            brightness: BrightnessFilter::new(brightness),
            latch,
        }
    }

    /// Overwrite a single pixel
    pub fn set(&mut self, index: usize, color: Rgb) -> Result<(), PixelIndexError> {
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(PixelIndexError { index, len: N })?;
        *pixel = color;
        Ok(())
    }

    /// Set every pixel to `color` and emit the frame
    pub fn fill<T: DelayNs>(&mut self, color: Rgb, delay: &mut T) {
        self.pixels.fill(color);
        self.emit(delay);
    }

    /// Paint each layer with the palette color at the same position.
    ///
    /// Does not emit.
    pub fn paint_layers(&mut self, layers: &[Layer], palette: &[Rgb]) {
        for (layer, color) in layers.iter().zip(palette) {
            for index in layer.range() {
                let painted = self.set(index, *color);
                debug_assert!(painted.is_ok(), "layer exceeds the pixel buffer");
            }
        }
    }

    /// Brightness-scaled frame in wire order
    pub fn compose(&self) -> [u32; N] {
        let mut frame = self.pixels;
        self.brightness.apply(&mut frame);
        frame.map(pack_grb)
    }

    /// Hand the current frame to the transmitter, then wait for the latch
    /// time to pass
    pub fn emit<T: DelayNs>(&mut self, delay: &mut T) {
        let frame = self.compose();
        self.driver.write(&frame);
        block_for(delay, self.latch);
    }

    /// Stored (unscaled) colors
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness.brightness()
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }
}
