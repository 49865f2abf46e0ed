//! Dino lamp firmware for the Raspberry Pi Pico.
//!
//! Wiring:
//! - GPIO22: WS2812 data line (45 LEDs)
//! - GPIO20: push button to ground, internal pull-up

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use dino_lamp::{LampConfig, Runner, SmartLedsDriver};
use rp2040_hal::{
    self as hal, Clock, Timer,
    clocks::init_clocks_and_plls,
    gpio::{FunctionPio0, Pin, PullDown},
    pac,
    pio::PIOExt,
    sio::Sio,
    watchdog::Watchdog,
};
use ws2812_pio::Ws2812;

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

/// Pico crystal frequency
const XOSC_CRYSTAL_FREQ: u32 = 12_000_000;

#[hal::entry]
fn main() -> ! {
    let Some(mut pac) = pac::Peripherals::take() else {
        defmt::panic!("peripherals already taken");
    };
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let Ok(clocks) = init_clocks_and_plls(
        XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    ) else {
        defmt::panic!("clock setup failed");
    };

    let sio = Sio::new(pac.SIO);
    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let led_pin: Pin<_, FunctionPio0, PullDown> = pins.gpio22.into_function();
    let strip = Ws2812::new(
        led_pin,
        &mut pio,
        sm0,
        clocks.peripheral_clock.freq(),
        timer.count_down(),
    );

    let button = pins.gpio20.into_pull_up_input();

    Runner::new(
        SmartLedsDriver::new(strip),
        button,
        timer,
        &LampConfig::default(),
    )
    .run()
}
