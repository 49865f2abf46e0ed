mod utils;

use smart_leds::RGB8;
pub use utils::{pack_grb, unpack_grb};

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
