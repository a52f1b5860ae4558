//! Two-phase effects built from the wipes

use embassy_time::{Duration, Instant};

use super::{Animation, ColorWipe, DotWipe, WipeDirection};
use crate::color::Rgb;
use crate::strip::Strip;

const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Dot sweep down the strip, then back up
///
/// Each sub-wipe gets half the total duration. Finishes when the
/// ascending phase does.
#[derive(Debug, Clone)]
pub struct DotPingPong {
    descend: DotWipe,
    ascend: DotWipe,
    /// True once the descending phase has finished
    pong: bool,
}

impl DotPingPong {
    pub const fn new(color: Rgb, duration: Duration) -> Self {
        let half = Duration::from_millis(duration.as_millis() / 2);
        Self {
            descend: DotWipe::new(color, half, WipeDirection::Down),
            ascend: DotWipe::new(color, half, WipeDirection::Up),
            pong: false,
        }
    }
}

impl Animation for DotPingPong {
    fn step(&mut self, restart: bool, now: Instant, strip: &mut dyn Strip) -> bool {
        if restart {
            self.pong = false;
            self.descend.step(true, now, strip);
            self.ascend.step(true, now, strip);
            return false;
        }

        if self.pong {
            return self.ascend.step(false, now, strip);
        }
        self.pong = self.descend.step(false, now, strip);
        false
    }
}

/// Rise to a color, then fall back to black
///
/// Phase 1 fills the strip upward with the target color; phase 2 wipes
/// back down to black over `duration * cutoff`, producing a breathing
/// look. Finishes when the fall completes.
#[derive(Debug, Clone)]
pub struct ColorPulse {
    rise: ColorWipe,
    fall: ColorWipe,
    falling: bool,
}

impl ColorPulse {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub fn new(color: Rgb, duration: Duration, cutoff: f32) -> Self {
        let cutoff = cutoff.clamp(0.0, 1.0);
        let fall_ms = (duration.as_millis() as f32 * cutoff) as u64;
        Self {
            rise: ColorWipe::new(color, duration, WipeDirection::Up),
            fall: ColorWipe::new(BLACK, Duration::from_millis(fall_ms), WipeDirection::Down),
            falling: false,
        }
    }
}

impl Animation for ColorPulse {
    fn step(&mut self, restart: bool, now: Instant, strip: &mut dyn Strip) -> bool {
        if restart {
            self.falling = false;
            self.rise.step(true, now, strip);
            self.fall.step(true, now, strip);
            return false;
        }

        if self.falling {
            return self.fall.step(false, now, strip);
        }
        self.falling = self.rise.step(false, now, strip);
        false
    }
}
