mod tests {
    use embassy_time::{Duration, Instant};
    use pixel_lamp_engine::animations::{Animation, Police};
    use pixel_lamp_engine::strip::FrameStrip;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    /// Lit pixel indices of an 8-pixel strip
    fn lit(strip: &FrameStrip<8>) -> Vec<usize> {
        strip.lit_indices().collect()
    }

    const LEFT: [usize; 5] = [0, 1, 2, 3, 4];
    const RIGHT: [usize; 4] = [4, 5, 6, 7];

    #[test]
    fn test_police_full_cycle() {
        let mut strip = FrameStrip::<8>::new();
        // 800 ms cycle: flashes stay lit 100 ms, dark gaps 50 ms
        let mut police = Police::new(Duration::from_millis(800));

        assert!(!police.step(true, at(0), &mut strip));
        assert_eq!(police.phase(), 0);

        // (tick time, expected finished, expected lit pixels)
        let timeline: [(u64, bool, &[usize]); 9] = [
            (1000, false, &LEFT),  // flash 1 left painted on entry
            (1100, false, &[]),    // gap after 100 ms of flash
            (1150, false, &LEFT),  // flash 2 left after 50 ms of gap
            (1250, false, &[]),    // gap
            (1300, false, &RIGHT), // flash 1 right
            (1400, false, &[]),    // gap
            (1450, false, &RIGHT), // flash 2 right
            (1550, true, &LEFT),   // wraps to state 0, one true per cycle
            (1650, false, &[]),    // second cycle continues
        ];

        for (time, finished, pixels) in timeline {
            assert_eq!(
                police.step(false, at(time), &mut strip),
                finished,
                "at t={time}"
            );
            assert_eq!(lit(&strip), pixels, "at t={time}");
        }
    }

    #[test]
    fn test_police_flash_outlasts_gap() {
        let mut strip = FrameStrip::<8>::new();
        let mut police = Police::new(Duration::from_millis(800));

        police.step(true, at(0), &mut strip);
        police.step(false, at(1000), &mut strip);
        assert_eq!(police.phase(), 0);
        assert_eq!(lit(&strip), LEFT);

        // the flash dwells 100 ms, twice the 50 ms gap
        for t in 1001..1100u64 {
            assert!(!police.step(false, at(t), &mut strip));
            assert_eq!(police.phase(), 0, "at t={t}");
        }
        assert_eq!(lit(&strip), LEFT, "flash still lit just before 100 ms");

        assert!(!police.step(false, at(1100), &mut strip));
        assert_eq!(police.phase(), 1);
        assert!(lit(&strip).is_empty(), "gap begins after the full dwell");
    }

    #[test]
    fn test_police_restart_forces_state_zero() {
        let mut strip = FrameStrip::<8>::new();
        let mut police = Police::new(Duration::from_millis(800));

        police.step(true, at(0), &mut strip);
        for t in [1000, 1100, 1150, 1250, 1300] {
            police.step(false, at(t), &mut strip);
        }
        assert_eq!(police.phase(), 4);

        assert!(!police.step(true, at(1350), &mut strip));
        assert_eq!(police.phase(), 0);
        // the phase timer is zeroed too: the next tick paints immediately
        assert!(!police.step(false, at(1350), &mut strip));
        assert_eq!(lit(&strip), LEFT);
    }
}
