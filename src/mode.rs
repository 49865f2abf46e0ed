//! Lamp modes and their rotation order
//!
//! The button walks through the modes in a fixed cycle:
//! sleep -> wake -> night -> day -> sleep.

const MODE_NAME_SLEEP: &str = "sleep";
const MODE_NAME_WAKE: &str = "wake";
const MODE_NAME_NIGHT: &str = "night";
const MODE_NAME_DAY: &str = "day";

const MODE_ID_SLEEP: u8 = 0;
const MODE_ID_WAKE: u8 = 1;
const MODE_ID_NIGHT: u8 = 2;
const MODE_ID_DAY: u8 = 3;

/// Lighting mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// All LEDs off
    #[default]
    Sleep = MODE_ID_SLEEP,
    /// Startup rainbow, settles into night
    Wake = MODE_ID_WAKE,
    /// Night palette
    Night = MODE_ID_NIGHT,
    /// Day palette
    Day = MODE_ID_DAY,
}

/// Button rotation order
pub const ROTATION: [Mode; 4] = [Mode::Sleep, Mode::Wake, Mode::Night, Mode::Day];

impl Mode {
    /// Position in [`ROTATION`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Next mode in the rotation, wrapping from day back to sleep
    pub const fn advance(self) -> Self {
        ROTATION[(self.index() + 1) % ROTATION.len()]
    }

    /// Mode the lamp ends up in once this mode has been rendered.
    ///
    /// Wake only plays its animation and is never the resting mode.
    pub const fn settles_to(self) -> Option<Self> {
        match self {
            Self::Wake => Some(Self::Night),
            Self::Sleep | Self::Night | Self::Day => None,
        }
    }

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_SLEEP => Self::Sleep,
            MODE_ID_WAKE => Self::Wake,
            MODE_ID_NIGHT => Self::Night,
            MODE_ID_DAY => Self::Day,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sleep => MODE_NAME_SLEEP,
            Self::Wake => MODE_NAME_WAKE,
            Self::Night => MODE_NAME_NIGHT,
            Self::Day => MODE_NAME_DAY,
        }
    }
}
