//! Strip transmitter seam
//!
//! The controller never touches the LED data line itself. It hands
//! finished frames to an [`OutputDriver`], which clocks them out with the
//! timing the LEDs require.

use smart_leds::SmartLedsWrite;

use crate::color::{Rgb, unpack_grb};

/// Abstract LED transmitter
///
/// Implement this trait to support different hardware platforms.
pub trait OutputDriver {
    /// Transmit one frame: one packed `0x00GGRRBB` word per LED, in strip
    /// order.
    fn write(&mut self, frame: &[u32]);
}

/// Adapter feeding frames to any `smart-leds` writer
///
/// The writer receives plain colors and applies the GRB wire order
/// itself, so the bytes on the wire match the packed words.
pub struct SmartLedsDriver<W> {
    writer: W,
}

impl<W> SmartLedsDriver<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite,
    Rgb: Into<W::Color>,
{
    fn write(&mut self, frame: &[u32]) {
        let colors = frame.iter().map(|word| unpack_grb(*word));
        if self.writer.write(colors).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("strip transmit failed, frame dropped");
        }
    }
}
