mod tests {
    use embassy_time::Duration;
    use pixel_lamp_engine::math8::{blend8, progress8, progress16, scale8};

    #[test]
    fn test_scale8() {
        // identity and zero factors
        assert_eq!(scale8(200, 255), 200);
        assert_eq!(scale8(255, 0), 0);
        assert_eq!(scale8(0, 200), 0);
        // halving and quartering
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(100, 128), 50);
        assert_eq!(scale8(255, 64), 64);
    }

    #[test]
    fn test_blend8() {
        // exact endpoints
        assert_eq!(blend8(10, 20, 0), 10);
        assert_eq!(blend8(10, 20, 255), 20);
        // rounding midpoints in both directions
        assert_eq!(blend8(0, 100, 128), 50);
        assert_eq!(blend8(200, 100, 128), 150);
        assert_eq!(blend8(0, 255, 127), 127);
    }

    #[test]
    fn test_progress8() {
        let total = Duration::from_millis(100);
        assert_eq!(progress8(Duration::from_millis(0), total), 0);
        assert_eq!(progress8(Duration::from_millis(25), total), 63);
        assert_eq!(progress8(Duration::from_millis(50), total), 127);
        assert_eq!(progress8(Duration::from_millis(100), total), 255);
        assert_eq!(progress8(Duration::from_millis(500), total), 255);
    }

    #[test]
    fn test_progress16() {
        let total = Duration::from_millis(512);
        assert_eq!(progress16(Duration::from_millis(0), total, 512), 0);
        assert_eq!(progress16(Duration::from_millis(256), total, 512), 256);
        assert_eq!(progress16(Duration::from_millis(999), total, 512), 512);
        // zero duration completes immediately
        assert_eq!(
            progress16(Duration::from_millis(0), Duration::from_millis(0), 512),
            512
        );
    }
}
