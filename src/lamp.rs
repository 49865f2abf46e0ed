//! Lamp state machine
//!
//! Owns the current mode and the pixel buffer. Entering a mode is what
//! renders it: there is no separate "redraw" step.

use embedded_hal::delay::DelayNs;

use crate::OutputDriver;
use crate::color::BLACK;
use crate::config::{LED_COUNT, LampConfig};
use crate::effect::{Palette, StartupSweep, day_palette, night_palette};
use crate::layer::LAYERS;
use crate::mode::Mode;
use crate::pixel_buffer::PixelBuffer;

/// Pixel buffer sized for the lamp strip
pub type LampPixels<D> = PixelBuffer<D, LED_COUNT>;

pub struct LampStateMachine<D: OutputDriver> {
    current: Mode,
    pixels: LampPixels<D>,
}

impl<D: OutputDriver> LampStateMachine<D> {
    /// Create a lamp in sleep mode.
    ///
    /// Nothing is rendered until the first [`enter`](Self::enter).
    pub fn new(driver: D, config: &LampConfig) -> Self {
        Self {
            current: Mode::Sleep,
            pixels: PixelBuffer::new(driver, config.brightness, config.timings.latch),
        }
    }

    /// Resting mode
    pub const fn current(&self) -> Mode {
        self.current
    }

    pub const fn pixels(&self) -> &LampPixels<D> {
        &self.pixels
    }

    /// Render `mode` and make it current.
    ///
    /// Modes that only play an animation are followed through to the mode
    /// they settle in, which becomes current instead. Returns the new
    /// current mode.
    pub fn enter<T: DelayNs>(&mut self, mode: Mode, delay: &mut T) -> Mode {
        let mut target = mode;
        loop {
            #[cfg(feature = "defmt")]
            defmt::info!("Dino is now in {} mode", target.as_str());
            self.render(target, delay);
            match target.settles_to() {
                Some(next) => target = next,
                None => break,
            }
        }
        self.current = target;
        target
    }

    /// Enter the mode following the current one in the rotation
    pub fn advance<T: DelayNs>(&mut self, delay: &mut T) -> Mode {
        self.enter(self.current.advance(), delay)
    }

    fn render<T: DelayNs>(&mut self, mode: Mode, delay: &mut T) {
        match mode {
            Mode::Sleep => self.pixels.fill(BLACK, delay),
            Mode::Wake => self.play_startup(delay),
            Mode::Night => self.show_layers(night_palette(), delay),
            Mode::Day => self.show_layers(day_palette(), delay),
        }
    }

    /// Blocks for `StartupSweep::FRAMES` latch periods
    fn play_startup<T: DelayNs>(&mut self, delay: &mut T) {
        let sweep = StartupSweep;
        for frame in 0..StartupSweep::FRAMES {
            for index in 0..LED_COUNT {
                let painted = self.pixels.set(index, sweep.color(frame, index, LED_COUNT));
                debug_assert!(painted.is_ok(), "sweep exceeds the pixel buffer");
            }
            self.pixels.emit(delay);
        }
    }

    fn show_layers<T: DelayNs>(&mut self, palette: &Palette, delay: &mut T) {
        self.pixels.paint_layers(&LAYERS, palette);
        self.pixels.emit(delay);
    }
}
