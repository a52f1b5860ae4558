//! Police-light strobe
//!
//! An explicit seven-state automaton: a blue double-flash on the left
//! half of the strip, then on the right half, with dark gaps in between.
//! Unlike the wipes this effect never stays finished; the phase counter
//! wraps and `step` pulses `true` once per full cycle.

use embassy_time::{Duration, Instant};

use super::Animation;
use crate::color::Rgb;
use crate::strip::Strip;

const BLUE: Rgb = Rgb::new(0, 0, 255);

const PHASE_COUNT: u8 = 7;

/// Dwell divisors per phase: the painted phase stays on screen for
/// `duration / divisor` milliseconds. Flash phases (even) dwell twice as
/// long as the dark gaps (odd).
const PHASE_DWELL_DIVISOR: [u64; PHASE_COUNT as usize] = [8, 16, 8, 16, 8, 16, 8];

#[derive(Debug, Clone)]
pub struct Police {
    duration: Duration,
    phase: u8,
    phase_start: Instant,
    /// False until phase 0 has been painted after a restart
    entered: bool,
}

impl Police {
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            phase: 0,
            phase_start: Instant::from_millis(0),
            entered: false,
        }
    }

    /// Currently active automaton state (0..=6)
    pub const fn phase(&self) -> u8 {
        self.phase
    }

    fn paint(strip: &mut dyn Strip, phase: u8) {
        let count = strip.pixel_count();
        let half = count / 2;

        strip.clear();
        match phase {
            // left double-flash
            0 | 2 => strip.fill(BLUE, 0, (half + 1).min(count)),
            // right double-flash
            4 | 6 => strip.fill(BLUE, half, count),
            // dark gap
            _ => {}
        }
        strip.show();
    }
}

impl Animation for Police {
    fn step(&mut self, restart: bool, now: Instant, strip: &mut dyn Strip) -> bool {
        if restart {
            self.phase = 0;
            self.phase_start = Instant::from_millis(0);
            self.entered = false;
            return false;
        }

        // The dwell is indexed by the phase currently on screen; a phase is
        // painted on entry and displayed until its own dwell expires.
        let divisor = PHASE_DWELL_DIVISOR[usize::from(self.phase)];
        let dwell = Duration::from_millis(self.duration.as_millis() / divisor);

        if now.duration_since(self.phase_start) >= dwell {
            self.phase_start = now;

            let mut wrapped = false;
            if self.entered {
                wrapped = self.phase == PHASE_COUNT - 1;
                self.phase = if wrapped { 0 } else { self.phase + 1 };
            } else {
                // first tick after a restart paints phase 0 itself
                self.entered = true;
            }
            Self::paint(strip, self.phase);
            return wrapped;
        }

        false
    }
}
