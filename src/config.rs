//! Compile-time lamp configuration.
//!
//! The lamp has a single fixed run mode: LED count, layer geometry,
//! brightness and input timings are all decided at build time.

use embassy_time::Duration;

/// Number of addressable LEDs on the strip
pub const LED_COUNT: usize = 45;

/// Number of stacked layers the strip is split into
pub const LAYER_COUNT: usize = 5;

/// Number of LEDs in every layer
pub const LAYER_SIZE: usize = LED_COUNT / LAYER_COUNT;

/// Output brightness applied to every channel on emission (0.0-1.0)
pub const BRIGHTNESS: f32 = 0.1;

/// Delay between detecting a press and re-reading the pin
pub const DEBOUNCE: Duration = Duration::from_millis(200);

/// Interval between pin reads while waiting for the button release
pub const RELEASE_POLL: Duration = Duration::from_millis(100);

/// Main loop polling cadence
pub const TICK: Duration = Duration::from_millis(100);

/// Minimum settle time after a frame is handed to the transmitter
pub const LATCH: Duration = Duration::from_millis(10);

/// Blocking waits used by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LampTimings {
    /// Wait between the first low read and the confirmation read
    pub debounce: Duration,
    /// Poll interval while the button is held
    pub release_poll: Duration,
    /// Main loop tick
    pub tick: Duration,
    /// Wait after every emitted frame
    pub latch: Duration,
}

impl Default for LampTimings {
    fn default() -> Self {
        Self {
            debounce: DEBOUNCE,
            release_poll: RELEASE_POLL,
            tick: TICK,
            latch: LATCH,
        }
    }
}

/// Configuration for the lamp controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LampConfig {
    /// Output brightness (0.0-1.0)
    pub brightness: f32,
    pub timings: LampTimings,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            brightness: BRIGHTNESS,
            timings: LampTimings::default(),
        }
    }
}
