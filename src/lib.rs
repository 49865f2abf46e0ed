//! Controller for a layered addressable-LED lamp.
//!
//! A single push-button cycles the lamp through sleep, wake, night and day.
//! Sleep turns every LED off, wake plays a rainbow sweep and settles into
//! night, night and day paint each layer with a fixed palette.
//!
//! Hardware access goes through three seams: an [`OutputDriver`] that
//! transmits frames, an `embedded_hal` input pin for the button and an
//! `embedded_hal` delay for every blocking wait.

#![no_std]

pub mod button;
pub mod color;
pub mod config;
mod delay;
pub mod driver;
pub mod effect;
pub mod filter;
pub mod input;
pub mod lamp;
pub mod layer;
pub mod mode;
pub mod pixel_buffer;
pub mod runner;

pub use button::ButtonReader;
pub use config::{LED_COUNT, LampConfig, LampTimings};
pub use driver::{OutputDriver, SmartLedsDriver};
pub use input::{InputController, PollOutcome};
pub use lamp::LampStateMachine;
pub use layer::{LAYERS, Layer};
pub use mode::{Mode, ROTATION};
pub use pixel_buffer::{PixelBuffer, PixelIndexError};
pub use runner::Runner;

pub use color::Rgb;
pub use effect::{DAY_PALETTE, NIGHT_PALETTE, wheel};
pub use embassy_time::Duration;
