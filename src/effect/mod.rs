//! Color effects
//!
//! Pure color computations used by the lamp modes: the hue wheel, the
//! startup rainbow sweep and the per-layer palettes.

mod palette;
mod sweep;
mod wheel;

pub use palette::{DAY_PALETTE, NIGHT_PALETTE, Palette, day_palette, night_palette};
pub use sweep::StartupSweep;
pub use wheel::wheel;
