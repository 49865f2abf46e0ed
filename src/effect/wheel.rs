use crate::color::{BLACK, Rgb};

/// Width of each of the three hue bands
const BAND: i32 = 85;

/// Map a position on the hue wheel (0-255) to a color.
///
/// The colors go red -> green -> blue -> back to red. Positions outside
/// 0-255 are black.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn wheel(position: i32) -> Rgb {
    if position < 0 || position > 255 {
        return BLACK;
    }
    if position < BAND {
        let up = (position * 3) as u8;
        return Rgb {
            r: 255 - up,
            g: up,
            b: 0,
        };
    }
    if position < BAND * 2 {
        let up = ((position - BAND) * 3) as u8;
        return Rgb {
            r: 0,
            g: 255 - up,
            b: up,
        };
    }
    let up = ((position - BAND * 2) * 3) as u8;
    Rgb {
        r: up,
        g: 0,
        b: 255 - up,
    }
}
