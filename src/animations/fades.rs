//! Global brightness fades
//!
//! Unlike the wipes, fades start from whatever the strip currently shows.
//! On restart they snapshot every pixel so the interpolation source is the
//! real prior frame, not black.

use embassy_time::{Duration, Instant};

use super::Animation;
use crate::color::{Rgb, gradient, hsv16_to_rgb, hue_of};
use crate::math8::{progress8, progress16};
use crate::strip::Strip;

const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Progress resolution of [`FadeIn`], finer than the 256 levels of
/// [`FadeOut`] for smoother perceived motion.
const FADE_IN_SPAN: u16 = 512;

/// Fade every lit pixel down to black
///
/// Each tick maps elapsed time onto a 255→0 brightness level and repaints
/// every non-black snapshot pixel at that level (hue preserved, full
/// saturation). Finishes when the level reaches 0.
///
/// `MAX_PIXELS` must cover the whole strip; pixels past the snapshot
/// capacity would never fade (checked by `debug_assert` on restart).
#[derive(Debug, Clone)]
pub struct FadeOut<const MAX_PIXELS: usize> {
    duration: Duration,
    started_at: Instant,
    last_level: u8,
    snapshot: heapless::Vec<Rgb, MAX_PIXELS>,
}

impl<const MAX_PIXELS: usize> FadeOut<MAX_PIXELS> {
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: Instant::from_millis(0),
            last_level: 255,
            snapshot: heapless::Vec::new(),
        }
    }
}

impl<const MAX_PIXELS: usize> Animation for FadeOut<MAX_PIXELS> {
    fn step(&mut self, restart: bool, now: Instant, strip: &mut dyn Strip) -> bool {
        if restart {
            debug_assert!(
                usize::from(strip.pixel_count()) <= MAX_PIXELS,
                "snapshot capacity below strip length"
            );
            self.started_at = now;
            self.last_level = 255;
            self.snapshot.clear();
            for index in 0..strip.pixel_count() {
                let _ = self.snapshot.push(strip.get_pixel(index));
            }
            return false;
        }

        if self.last_level == 0 {
            return true;
        }

        let level = 255 - progress8(now.duration_since(self.started_at), self.duration);
        if level != self.last_level {
            self.last_level = level;

            for (index, color) in self.snapshot.iter().enumerate() {
                if *color == BLACK {
                    continue;
                }
                #[allow(clippy::cast_possible_truncation)]
                strip.set_pixel(index as u16, hsv16_to_rgb(hue_of(*color), 255, level));
            }
            strip.show();
        }

        self.last_level == 0
    }
}

/// Blend a window of the strip toward a target color
///
/// Only pixels in the `[first_cutoff, second_cutoff)` index window move;
/// each one interpolates from its snapshot color toward the target.
///
/// `MAX_PIXELS` must cover the whole strip; pixels past the snapshot
/// capacity would blend from black instead of their prior color (checked
/// by `debug_assert` on restart).
#[derive(Debug, Clone)]
pub struct FadeIn<const MAX_PIXELS: usize> {
    target: Rgb,
    duration: Duration,
    first_cutoff: f32,
    second_cutoff: f32,
    started_at: Instant,
    last_level: u16,
    snapshot: heapless::Vec<Rgb, MAX_PIXELS>,
}

impl<const MAX_PIXELS: usize> FadeIn<MAX_PIXELS> {
    pub fn new(target: Rgb, duration: Duration, first_cutoff: f32, second_cutoff: f32) -> Self {
        Self {
            target,
            duration,
            first_cutoff: first_cutoff.clamp(0.0, 1.0),
            second_cutoff: second_cutoff.clamp(0.0, 1.0),
            started_at: Instant::from_millis(0),
            last_level: 0,
            snapshot: heapless::Vec::new(),
        }
    }

    /// Blend the whole strip toward the target
    pub fn full(target: Rgb, duration: Duration) -> Self {
        Self::new(target, duration, 0.0, 1.0)
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn window(&self, count: u16) -> (u16, u16) {
        let first = (self.first_cutoff * f32::from(count)) as u16;
        let second = (self.second_cutoff * f32::from(count)) as u16;
        (first.min(count), second.min(count))
    }
}

impl<const MAX_PIXELS: usize> Animation for FadeIn<MAX_PIXELS> {
    fn step(&mut self, restart: bool, now: Instant, strip: &mut dyn Strip) -> bool {
        if restart {
            debug_assert!(
                usize::from(strip.pixel_count()) <= MAX_PIXELS,
                "snapshot capacity below strip length"
            );
            self.started_at = now;
            self.last_level = 0;
            self.snapshot.clear();
            for index in 0..strip.pixel_count() {
                let _ = self.snapshot.push(strip.get_pixel(index));
            }
            return false;
        }

        if self.last_level == FADE_IN_SPAN {
            return true;
        }

        let level = progress16(
            now.duration_since(self.started_at),
            self.duration,
            FADE_IN_SPAN,
        );
        if level != self.last_level {
            self.last_level = level;

            let (first, second) = self.window(strip.pixel_count());
            let t = f32::from(level) / f32::from(FADE_IN_SPAN);
            for index in first..second {
                let source = self
                    .snapshot
                    .get(usize::from(index))
                    .copied()
                    .unwrap_or(BLACK);
                strip.set_pixel(index, gradient(source, self.target, t));
            }
            strip.show();
        }

        self.last_level == FADE_IN_SPAN
    }
}
