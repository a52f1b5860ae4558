//! Pixel-sweep effects
//!
//! A wipe walks the strip one pixel per segment delay. Dot wipes light a
//! single moving pixel; color wipes fill permanently as the sweep front
//! passes, blending the pixel just ahead of the front for a smooth,
//! non-stepped look.

use embassy_time::{Duration, Instant};

use super::{Animation, segment_delay};
use crate::color::{Rgb, gradient, hsv16_to_rgb};
use crate::gamma::gamma_rgb;
use crate::strip::Strip;

const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Sweep direction over the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WipeDirection {
    /// Index 0 toward the end of the strip
    Down,
    /// End of the strip toward index 0
    Up,
}

impl WipeDirection {
    /// Pixel index for a progress counter in `[0, count)`
    fn pixel_at(self, progress: u16, count: u16) -> u16 {
        match self {
            Self::Down => progress,
            Self::Up => count - 1 - progress,
        }
    }
}

/// Single lit pixel sweeping across the strip
#[derive(Debug, Clone)]
pub struct DotWipe {
    color: Rgb,
    duration: Duration,
    direction: WipeDirection,
    progress: u16,
    phase_start: Instant,
}

impl DotWipe {
    pub const fn new(color: Rgb, duration: Duration, direction: WipeDirection) -> Self {
        Self {
            color,
            duration,
            direction,
            progress: 0,
            phase_start: Instant::from_millis(0),
        }
    }
}

impl Animation for DotWipe {
    fn step(&mut self, restart: bool, now: Instant, strip: &mut dyn Strip) -> bool {
        if restart {
            self.progress = 0;
            self.phase_start = Instant::from_millis(0);
            return false;
        }

        let count = strip.pixel_count();
        if self.progress >= count {
            return true;
        }

        let delay = segment_delay(self.duration, count);
        if now.duration_since(self.phase_start) >= delay {
            self.phase_start = now;

            strip.clear();
            strip.set_pixel(self.direction.pixel_at(self.progress, count), self.color);
            self.progress += 1;
            strip.show();
        }

        false
    }
}

/// Dot wipe whose color follows the hue ring along the strip
///
/// Pixel `i` gets hue `i / count` of a full ring, gamma-corrected.
#[derive(Debug, Clone)]
pub struct DotWipeRainbow {
    duration: Duration,
    direction: WipeDirection,
    progress: u16,
    phase_start: Instant,
}

impl DotWipeRainbow {
    pub const fn new(duration: Duration, direction: WipeDirection) -> Self {
        Self {
            duration,
            direction,
            progress: 0,
            phase_start: Instant::from_millis(0),
        }
    }
}

impl Animation for DotWipeRainbow {
    fn step(&mut self, restart: bool, now: Instant, strip: &mut dyn Strip) -> bool {
        if restart {
            self.progress = 0;
            self.phase_start = Instant::from_millis(0);
            return false;
        }

        let count = strip.pixel_count();
        if self.progress >= count {
            return true;
        }

        let delay = segment_delay(self.duration, count);
        if now.duration_since(self.phase_start) >= delay {
            self.phase_start = now;

            let index = self.direction.pixel_at(self.progress, count);
            #[allow(clippy::cast_possible_truncation)]
            let hue = (u32::from(index) * 65535 / u32::from(count)) as u16;

            strip.clear();
            strip.set_pixel(index, gamma_rgb(hsv16_to_rgb(hue, 255, 255)));
            self.progress += 1;
            strip.show();
        }

        false
    }
}

/// Permanent fill sweeping across the strip
///
/// Between advances, the pixel at the sweep front is repainted with a
/// gradient from its prior color toward the target, proportional to the
/// elapsed fraction of the current segment delay.
#[derive(Debug, Clone)]
pub struct ColorWipe {
    color: Rgb,
    duration: Duration,
    direction: WipeDirection,
    progress: u16,
    phase_start: Instant,
    /// Prior color of the pixel just ahead of the sweep front
    next_color: Rgb,
}

impl ColorWipe {
    pub const fn new(color: Rgb, duration: Duration, direction: WipeDirection) -> Self {
        Self {
            color,
            duration,
            direction,
            progress: 0,
            phase_start: Instant::from_millis(0),
            next_color: BLACK,
        }
    }
}

impl Animation for ColorWipe {
    #[allow(clippy::cast_precision_loss)]
    fn step(&mut self, restart: bool, now: Instant, strip: &mut dyn Strip) -> bool {
        if restart {
            self.progress = 0;
            self.phase_start = Instant::from_millis(0);
            self.next_color = BLACK;
            return false;
        }

        let count = strip.pixel_count();
        if self.progress >= count {
            return true;
        }

        let delay = segment_delay(self.duration, count);
        let elapsed = now.duration_since(self.phase_start);
        if elapsed >= delay {
            self.phase_start = now;

            strip.set_pixel(self.direction.pixel_at(self.progress, count), self.color);
            self.progress += 1;
            self.next_color = if self.progress < count {
                strip.get_pixel(self.direction.pixel_at(self.progress, count))
            } else {
                BLACK
            };
        } else {
            // Blend the front pixel toward the target within this segment
            let coeff = elapsed.as_millis() as f32 / delay.as_millis() as f32;
            strip.set_pixel(
                self.direction.pixel_at(self.progress, count),
                gradient(self.next_color, self.color, coeff),
            );
        }

        strip.show();
        false
    }
}
