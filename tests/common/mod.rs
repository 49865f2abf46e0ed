#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use dino_lamp::{OutputDriver, Rgb};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin};
use smart_leds::SmartLedsWrite;

/// Keeps every frame it is asked to transmit
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<u32>>,
}

impl RecordingDriver {
    pub fn last(&self) -> Option<&[u32]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, frame: &[u32]) {
        self.frames.push(frame.to_vec());
    }
}

/// Pin that plays back a fixed sequence of reads.
///
/// `true` means the pin reads low (button held). Once the script runs
/// out the pin reads high.
#[derive(Debug, Default)]
pub struct ScriptedPin {
    script: VecDeque<bool>,
    pub reads: usize,
}

impl ScriptedPin {
    pub fn new(script: &[bool]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            reads: 0,
        }
    }

    fn next_low(&mut self) -> bool {
        self.reads += 1;
        self.script.pop_front().unwrap_or(false)
    }
}

impl ErrorType for ScriptedPin {
    type Error = Infallible;
}

impl InputPin for ScriptedPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.next_low())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.next_low())
    }
}

#[derive(Debug)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Pin whose every read fails
pub struct FaultyPin;

impl ErrorType for FaultyPin {
    type Error = PinFault;
}

impl InputPin for FaultyPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}

/// Delay that only advances a virtual clock
#[derive(Debug, Default)]
pub struct VirtualDelay {
    pub elapsed_ns: u64,
}

impl VirtualDelay {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for VirtualDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}

/// `smart-leds` writer that records every color it is handed.
///
/// The colors live behind a shared handle so the test keeps access after
/// the writer moves into a driver.
#[derive(Debug, Default, Clone)]
pub struct CaptureWriter {
    pub colors: Rc<RefCell<Vec<Rgb>>>,
}

impl SmartLedsWrite for CaptureWriter {
    type Error = Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let mut colors = self.colors.borrow_mut();
        colors.clear();
        colors.extend(iterator.into_iter().map(Into::into));
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct TransmitFault;

/// `smart-leds` writer whose every transmission fails
#[derive(Debug, Default)]
pub struct FailingWriter {
    pub attempts: Rc<Cell<usize>>,
}

impl SmartLedsWrite for FailingWriter {
    type Error = TransmitFault;
    type Color = Rgb;

    fn write<T, I>(&mut self, _iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.attempts.set(self.attempts.get() + 1);
        Err(TransmitFault)
    }
}
