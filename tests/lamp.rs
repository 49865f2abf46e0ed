mod common;

mod tests {
    use dino_lamp::color::unpack_grb;
    use dino_lamp::effect::StartupSweep;
    use dino_lamp::layer::LAYERS;
    use dino_lamp::{DAY_PALETTE, LampConfig, LampStateMachine, Mode, NIGHT_PALETTE, Rgb};

    use crate::common::{RecordingDriver, VirtualDelay};

    fn lamp() -> LampStateMachine<RecordingDriver> {
        LampStateMachine::new(RecordingDriver::default(), &LampConfig::default())
    }

    #[test]
    fn test_enter_sleep_blacks_out() {
        let mut lamp = lamp();
        let mut delay = VirtualDelay::default();
        lamp.enter(Mode::Day, &mut delay);
        assert_eq!(lamp.enter(Mode::Sleep, &mut delay), Mode::Sleep);

        assert_eq!(lamp.current(), Mode::Sleep);
        assert!(lamp.pixels().pixels().iter().all(|&c| c == Rgb::default()));
        let frames = &lamp.pixels().driver().frames;
        assert_eq!(frames.len(), 2);
        assert!(frames[1].iter().all(|&word| word == 0));
    }

    #[test]
    fn test_enter_wake_settles_in_night() {
        let mut lamp = lamp();
        let mut delay = VirtualDelay::default();

        assert_eq!(lamp.enter(Mode::Wake, &mut delay), Mode::Night);
        assert_eq!(lamp.current(), Mode::Night);

        // 255 sweep frames, then the night frame
        assert_eq!(lamp.pixels().driver().frames.len(), 256);
        assert_eq!(delay.elapsed_ms(), 256 * 10);

        for (layer, color) in LAYERS.iter().zip(NIGHT_PALETTE) {
            for index in layer.range() {
                assert_eq!(lamp.pixels().pixels()[index], color);
            }
        }
    }

    #[test]
    fn test_wake_first_frame_is_scaled_sweep() {
        let mut lamp = lamp();
        let mut delay = VirtualDelay::default();
        lamp.enter(Mode::Wake, &mut delay);

        let first = &lamp.pixels().driver().frames[0];
        // wheel(0) = (255, 0, 0) at 0.1 brightness, GRB packed
        assert_eq!(first[0], 0x0000_1900);
    }

    #[test]
    fn test_wake_frames_cover_whole_strip() {
        let mut lamp = lamp();
        let mut delay = VirtualDelay::default();
        lamp.enter(Mode::Wake, &mut delay);

        let frames = &lamp.pixels().driver().frames;
        for frame in [0u16, 100, 254] {
            let sent = &frames[usize::from(frame)];
            assert_eq!(sent.len(), 45);
            for (index, &word) in sent.iter().enumerate() {
                let color = StartupSweep.color(frame, index, 45);
                let expected = Rgb::new(color.r / 10, color.g / 10, color.b / 10);
                assert_eq!(unpack_grb(word), expected, "frame {frame} pixel {index}");
            }
        }
    }

    #[test]
    fn test_enter_day_paints_layers() {
        let mut lamp = lamp();
        let mut delay = VirtualDelay::default();
        assert_eq!(lamp.enter(Mode::Day, &mut delay), Mode::Day);

        for (layer, color) in LAYERS.iter().zip(DAY_PALETTE) {
            for index in layer.range() {
                assert_eq!(lamp.pixels().pixels()[index], color);
            }
        }
        assert_eq!(lamp.pixels().pixels()[20], Rgb::new(0, 153, 0));
        assert_eq!(lamp.pixels().driver().frames.len(), 1);
    }

    #[test]
    fn test_advance_from_night_goes_to_day() {
        let mut lamp = lamp();
        let mut delay = VirtualDelay::default();
        lamp.enter(Mode::Night, &mut delay);
        assert_eq!(lamp.advance(&mut delay), Mode::Day);
        assert_eq!(lamp.advance(&mut delay), Mode::Sleep);
        assert_eq!(lamp.advance(&mut delay), Mode::Night);
    }

    #[test]
    fn test_new_lamp_renders_nothing() {
        let lamp = lamp();
        assert_eq!(lamp.current(), Mode::Sleep);
        assert!(lamp.pixels().driver().frames.is_empty());
    }
}
