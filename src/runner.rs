//! Main loop
//!
//! Polls the button at a fixed cadence, forever. Everything runs on one
//! thread of control: while a mode is being rendered (the wake animation
//! takes a few seconds) the button is not read.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::OutputDriver;
use crate::button::ButtonReader;
use crate::config::{LampConfig, LampTimings};
use crate::delay::block_for;
use crate::input::{InputController, PollOutcome};
use crate::lamp::LampStateMachine;
use crate::mode::Mode;

pub struct Runner<D: OutputDriver, P, T> {
    lamp: LampStateMachine<D>,
    input: InputController<P>,
    delay: T,
    timings: LampTimings,
}

impl<D, P, T> Runner<D, P, T>
where
    D: OutputDriver,
    P: InputPin,
    T: DelayNs,
{
    pub fn new(driver: D, pin: P, delay: T, config: &LampConfig) -> Self {
        Self {
            lamp: LampStateMachine::new(driver, config),
            input: InputController::new(ButtonReader::new(pin), config.timings),
            delay,
            timings: config.timings,
        }
    }

    /// Render the initial mode
    pub fn start(&mut self) -> Mode {
        #[cfg(feature = "defmt")]
        defmt::info!("It's dino time!");
        self.lamp.enter(Mode::Sleep, &mut self.delay)
    }

    /// One loop iteration: poll the button, then wait a tick
    pub fn step(&mut self) -> PollOutcome {
        let outcome = self.input.poll(&mut self.lamp, &mut self.delay);
        block_for(&mut self.delay, self.timings.tick);
        outcome
    }

    /// Start the lamp and poll until power-off
    pub fn run(mut self) -> ! {
        self.start();
        loop {
            self.step();
        }
    }

    pub const fn lamp(&self) -> &LampStateMachine<D> {
        &self.lamp
    }

    pub const fn input(&self) -> &InputController<P> {
        &self.input
    }

    pub const fn delay(&self) -> &T {
        &self.delay
    }
}
