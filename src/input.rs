//! Button debouncing
//!
//! A press is only accepted if the pin still reads low after the debounce
//! interval. Once accepted, no new press is detected until the button has
//! been physically released.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::OutputDriver;
use crate::button::ButtonReader;
use crate::config::LampTimings;
use crate::delay::block_for;
use crate::lamp::LampStateMachine;
use crate::mode::Mode;

/// Debounce state. Always `Idle` between polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    /// Waiting for the pin to go low
    Idle,
    /// Pin went low, confirmation pending
    PressDetected,
    /// Press accepted, waiting for the pin to go high again
    AwaitingRelease,
}

/// What a single poll did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// Button not pressed
    Idle,
    /// Pin bounced back high before the press was confirmed
    Bounced,
    /// Press confirmed, the lamp now rests in the given mode
    Advanced(Mode),
}

pub struct InputController<P> {
    button: ButtonReader<P>,
    state: ButtonState,
    timings: LampTimings,
}

impl<P: InputPin> InputController<P> {
    pub const fn new(button: ButtonReader<P>, timings: LampTimings) -> Self {
        Self {
            button,
            state: ButtonState::Idle,
            timings,
        }
    }

    /// Read the button once and handle a press if there is one.
    ///
    /// A confirmed press blocks until the lamp has rendered the next mode
    /// and the button has been released.
    pub fn poll<D, T>(&mut self, lamp: &mut LampStateMachine<D>, delay: &mut T) -> PollOutcome
    where
        D: OutputDriver,
        T: DelayNs,
    {
        let mut outcome = PollOutcome::Idle;
        loop {
            self.state = match self.state {
                ButtonState::Idle => {
                    if !self.button.is_pressed() {
                        return outcome;
                    }
                    ButtonState::PressDetected
                }
                ButtonState::PressDetected => {
                    block_for(delay, self.timings.debounce);
                    if !self.button.is_pressed() {
                        #[cfg(feature = "defmt")]
                        defmt::debug!("button bounced, press ignored");
                        self.state = ButtonState::Idle;
                        return PollOutcome::Bounced;
                    }
                    outcome = PollOutcome::Advanced(confirm_press(lamp, delay));
                    ButtonState::AwaitingRelease
                }
                ButtonState::AwaitingRelease => {
                    while self.button.is_pressed() {
                        block_for(delay, self.timings.release_poll);
                    }
                    ButtonState::Idle
                }
            };
            if self.state == ButtonState::Idle {
                return outcome;
            }
        }
    }
}

/// Advance the lamp after a confirmed press
fn confirm_press<D, T>(lamp: &mut LampStateMachine<D>, delay: &mut T) -> Mode
where
    D: OutputDriver,
    T: DelayNs,
{
    let current = lamp.current();
    let next = current.advance();
    #[cfg(feature = "defmt")]
    defmt::info!(
        "Button was pressed, switching from {} (index {}) to {}",
        current.as_str(),
        current.index(),
        next.as_str()
    );
    lamp.enter(next, delay)
}
