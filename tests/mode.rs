mod tests {
    use dino_lamp::{Mode, ROTATION};

    #[test]
    fn test_advance_follows_rotation() {
        assert_eq!(Mode::Sleep.advance(), Mode::Wake);
        assert_eq!(Mode::Wake.advance(), Mode::Night);
        assert_eq!(Mode::Night.advance(), Mode::Day);
        assert_eq!(Mode::Day.advance(), Mode::Sleep);
    }

    #[test]
    fn test_advance_cycles_in_four() {
        for mode in ROTATION {
            let cycled = mode.advance().advance().advance().advance();
            assert_eq!(cycled, mode);
        }
    }

    #[test]
    fn test_only_wake_is_transient() {
        assert_eq!(Mode::Wake.settles_to(), Some(Mode::Night));
        assert_eq!(Mode::Sleep.settles_to(), None);
        assert_eq!(Mode::Night.settles_to(), None);
        assert_eq!(Mode::Day.settles_to(), None);
    }

    #[test]
    fn test_mode_names() {
        for mode in ROTATION {
            assert_eq!(Mode::from_raw(mode as u8), Some(mode));
        }
        assert_eq!(Mode::Night.as_str(), "night");
        assert_eq!(Mode::Wake.as_str(), "wake");
        assert_eq!(Mode::from_raw(4), None);
    }

    #[test]
    fn test_starts_asleep() {
        assert_eq!(Mode::default(), Mode::Sleep);
        assert_eq!(Mode::Sleep.index(), 0);
        assert_eq!(Mode::Day.index(), 3);
    }
}
