use crate::color::Rgb;
use crate::config::LAYER_COUNT;

/// One color per layer, bottom layer first
pub type Palette = [Rgb; LAYER_COUNT];

/// Night mode colors
pub const NIGHT_PALETTE: Palette = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 128, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
    Rgb { r: 255, g: 0, b: 255 },
    Rgb {
        r: 255,
        g: 255,
        b: 255,
    },
];

/// Day mode colors
pub const DAY_PALETTE: Palette = [
    Rgb { r: 255, g: 128, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 153, b: 0 },
    Rgb {
        r: 102,
        g: 255,
        b: 255,
    },
    Rgb { r: 255, g: 0, b: 0 },
];

pub const fn night_palette() -> &'static Palette {
    &NIGHT_PALETTE
}

pub const fn day_palette() -> &'static Palette {
    &DAY_PALETTE
}
