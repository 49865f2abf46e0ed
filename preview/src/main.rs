//! Desktop preview for the dino lamp
//!
//! Runs the real controller loop on a background thread, with a simulated
//! button and a window standing in for the LED strip. Hold the on-screen
//! button (or the space bar) to press it.

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration as StdDuration;

use dino_lamp::{
    LAYERS, LED_COUNT, LampConfig, Mode, OutputDriver, Runner, color::unpack_grb,
};
use eframe::egui::{self};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin};

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 24.0;

/// Gap between LEDs
const LED_GAP: f32 = 4.0;

/// State shared between the controller thread and the UI
struct Shared {
    /// Last frame handed to the "strip"
    frame: Mutex<[u32; LED_COUNT]>,
    /// Resting mode after the last poll
    mode: AtomicU8,
    /// Simulated button level (true = held down)
    held: AtomicBool,
}

/// Output driver that publishes frames to the UI
struct PreviewDriver {
    shared: Arc<Shared>,
}

impl OutputDriver for PreviewDriver {
    fn write(&mut self, frame: &[u32]) {
        if let Ok(mut shown) = self.shared.frame.lock() {
            shown.copy_from_slice(frame);
        }
    }
}

/// Active-low button driven by the UI
struct SimulatedButton {
    shared: Arc<Shared>,
}

impl ErrorType for SimulatedButton {
    type Error = Infallible;
}

impl InputPin for SimulatedButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.shared.held.load(Ordering::Relaxed))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.shared.held.load(Ordering::Relaxed))
    }
}

/// Blocking delay backed by the OS scheduler
struct ThreadDelay;

impl DelayNs for ThreadDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(StdDuration::from_nanos(u64::from(ns)));
    }
}

fn main() -> eframe::Result<()> {
    let shared = Arc::new(Shared {
        frame: Mutex::new([0; LED_COUNT]),
        mode: AtomicU8::new(Mode::Sleep as u8),
        held: AtomicBool::new(false),
    });
    let config = LampConfig::default();
    spawn_controller(Arc::clone(&shared), config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 360.0])
            .with_title("Dino Lamp Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "dino-lamp-preview",
        options,
        Box::new(move |_cc| Ok(Box::new(PreviewApp::new(shared, config.brightness)))),
    )
}

/// Run the controller loop until the process exits
fn spawn_controller(shared: Arc<Shared>, config: LampConfig) {
    thread::spawn(move || {
        let driver = PreviewDriver {
            shared: Arc::clone(&shared),
        };
        let button = SimulatedButton {
            shared: Arc::clone(&shared),
        };
        let mut runner = Runner::new(driver, button, ThreadDelay, &config);
        runner.start();
        loop {
            runner.step();
            shared
                .mode
                .store(runner.lamp().current() as u8, Ordering::Relaxed);
        }
    });
}

struct PreviewApp {
    shared: Arc<Shared>,
    /// Multiplier undoing the output brightness so dim frames stay visible
    gain: f32,
    led_size: f32,
}

impl PreviewApp {
    fn new(shared: Arc<Shared>, brightness: f32) -> Self {
        let gain = if brightness > 0.0 { 1.0 / brightness } else { 1.0 };
        Self {
            shared,
            gain,
            led_size: LED_SIZE,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn boost(&self, channel: u8) -> u8 {
        (f32::from(channel) * self.gain).clamp(0.0, 255.0) as u8
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = self
            .shared
            .frame
            .lock()
            .map(|frame| *frame)
            .unwrap_or([0; LED_COUNT]);
        let mode = Mode::from_raw(self.shared.mode.load(Ordering::Relaxed)).unwrap_or_default();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut held = ctx.input(|input| input.key_down(egui::Key::Space));
            ui.horizontal(|ui| {
                let button = ui.add(
                    egui::Button::new("Press").sense(egui::Sense::click_and_drag()),
                );
                held |= button.is_pointer_button_down_on();

                ui.add_space(8.0);
                ui.label(format!("Mode: {}", mode.as_str()));
            });
            self.shared.held.store(held, Ordering::Relaxed);

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Gain:");
                ui.add(egui::Slider::new(&mut self.gain, 1.0..=20.0));
                ui.add_space(8.0);
                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 8.0..=48.0));
            });

            ui.add_space(16.0);

            // === Lamp Display ===
            // One row per layer, the bottom layer drawn last
            let led_pitch = self.led_size + LED_GAP;
            let widest = LAYERS.iter().map(|layer| layer.count()).max().unwrap_or(0);
            #[allow(clippy::cast_precision_loss)]
            let size = egui::vec2(
                f32::from(widest) * led_pitch,
                LAYERS.len() as f32 * led_pitch,
            );
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (row, layer) in LAYERS.iter().rev().enumerate() {
                for (col, index) in layer.range().enumerate() {
                    let pixel = unpack_grb(frame[index]);
                    let x = origin.x + col as f32 * led_pitch;
                    let y = origin.y + row as f32 * led_pitch;

                    let rect = egui::Rect::from_min_size(
                        egui::pos2(x, y),
                        egui::vec2(self.led_size, self.led_size),
                    );
                    let color = egui::Color32::from_rgb(
                        self.boost(pixel.r),
                        self.boost(pixel.g),
                        self.boost(pixel.b),
                    );
                    painter.rect_filled(rect, 3.0, color);
                }
            }
        });
    }
}
