use embedded_hal::digital::InputPin;

/// Active-low push button
///
/// The pin is expected to be pulled high, pressing the button pulls it
/// to ground. No hardware debouncing is assumed.
pub struct ButtonReader<P> {
    pin: P,
}

impl<P: InputPin> ButtonReader<P> {
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Check if the pin currently reads low.
    ///
    /// A failed read counts as released.
    pub fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}
