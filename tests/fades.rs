mod tests {
    use embassy_time::{Duration, Instant};
    use pixel_lamp_engine::animations::{Animation, FadeIn, FadeOut};
    use pixel_lamp_engine::color::Rgb;
    use pixel_lamp_engine::strip::{FrameStrip, Strip};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_fade_out_is_monotone_and_reaches_black() {
        let mut strip = FrameStrip::<4>::new();
        strip.set_pixel(0, RED);
        strip.set_pixel(2, RED);

        // 2550 ms: one brightness level per 10 ms
        let mut fade = FadeOut::<4>::new(Duration::from_millis(2550));
        assert!(!fade.step(true, at(1000), &mut strip));

        let mut last_r = 255u8;
        for k in 1..=254u64 {
            assert!(!fade.step(false, at(1000 + k * 10), &mut strip));
            let r = strip.pixels()[0].r;
            assert!(r <= last_r, "brightness never increases");
            last_r = r;
            // untouched pixels stay untouched
            assert_eq!(strip.pixels()[1], BLACK);
        }

        // one level left just before the end
        assert!(!fade.step(false, at(3540), &mut strip));
        // finishes exactly when the level first reaches zero
        assert!(fade.step(false, at(3550), &mut strip));
        assert_eq!(strip.pixels()[0], BLACK);
        assert_eq!(strip.pixels()[2], BLACK);
        // and stays finished until restarted
        assert!(fade.step(false, at(9000), &mut strip));
    }

    #[test]
    fn test_fade_out_restart_resnapshots() {
        let mut strip = FrameStrip::<4>::new();
        strip.set_pixel(0, RED);

        let mut fade = FadeOut::<4>::new(Duration::from_millis(100));
        fade.step(true, at(0), &mut strip);
        for k in 1..=10u64 {
            fade.step(false, at(k * 10), &mut strip);
        }
        assert!(fade.step(false, at(200), &mut strip));

        // repaint and restart: the fade picks up the new frame
        strip.set_pixel(3, RED);
        assert!(!fade.step(true, at(300), &mut strip));
        fade.step(false, at(350), &mut strip);
        assert!(strip.pixels()[3].r < 255);
        assert!(strip.pixels()[3].r > 0);
    }

    #[test]
    fn test_fade_in_blends_toward_target() {
        let mut strip = FrameStrip::<4>::new();

        // 512 ms: one progress step per millisecond
        let mut fade = FadeIn::<4>::full(RED, Duration::from_millis(512));
        assert!(!fade.step(true, at(1000), &mut strip));

        assert!(!fade.step(false, at(1256), &mut strip));
        assert_eq!(strip.pixels()[0], Rgb { r: 127, g: 0, b: 0 });

        // finishes exactly when progress first reaches the full span
        assert!(!fade.step(false, at(1511), &mut strip));
        assert!(fade.step(false, at(1512), &mut strip));
        assert_eq!(strip.pixels(), &[RED; 4]);
        assert!(fade.step(false, at(2000), &mut strip));
    }

    #[test]
    #[should_panic(expected = "snapshot capacity below strip length")]
    fn test_fade_out_rejects_undersized_snapshot() {
        let mut strip = FrameStrip::<4>::new();
        let mut fade = FadeOut::<2>::new(Duration::from_millis(100));
        fade.step(true, at(0), &mut strip);
    }

    #[test]
    fn test_fade_in_respects_cutoff_window() {
        let mut strip = FrameStrip::<4>::new();

        // only indices [1, 3) move
        let mut fade = FadeIn::<4>::new(RED, Duration::from_millis(100), 0.25, 0.75);
        fade.step(true, at(0), &mut strip);
        for k in 1..=11u64 {
            fade.step(false, at(k * 10), &mut strip);
        }

        assert_eq!(strip.pixels()[0], BLACK);
        assert_eq!(strip.pixels()[1], RED);
        assert_eq!(strip.pixels()[2], RED);
        assert_eq!(strip.pixels()[3], BLACK);
    }
}
