use crate::color::Rgb;

mod brightness;

pub use brightness::BrightnessFilter;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgb]);
}
