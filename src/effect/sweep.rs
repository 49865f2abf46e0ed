//! Startup rainbow sweep
//!
//! Spreads the whole hue wheel across the strip and rotates it one step
//! per frame. Played once when the lamp wakes up.

use super::wheel;
use crate::color::{BLACK, Rgb};

/// Rainbow sweep played on wake
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupSweep;

impl StartupSweep {
    /// Number of frames in one playback
    pub const FRAMES: u16 = 255;

    /// Color of pixel `index` of a `count` pixel strip at frame `frame`.
    ///
    /// That is the wheel color at `(index * 256 / count + frame) mod 256`.
    /// A zero `count` yields black.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn color(self, frame: u16, index: usize, count: usize) -> Rgb {
        if count == 0 {
            return BLACK;
        }
        let offset = index * 256 / count;
        let position = (offset + usize::from(frame)) & 0xFF;
        wheel(position as i32)
    }
}
