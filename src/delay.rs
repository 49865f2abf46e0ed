use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

/// Block for the given duration using a hardware delay provider.
///
/// Durations that do not fit into `u32` microseconds saturate.
pub(crate) fn block_for<T: DelayNs>(delay: &mut T, duration: Duration) {
    let micros = u32::try_from(duration.as_micros()).unwrap_or(u32::MAX);
    if micros == 0 {
        return;
    }
    delay.delay_us(micros);
}
