//! Blocking rainbow demo sequence
//!
//! Deliberately outside the [`Animation`](super::Animation) step contract:
//! this routine owns its own delay loop and is meant as a startup/demo
//! sequence, not as a mode the dispatcher ticks.

use embassy_time::Duration;

use crate::color::hsv16_to_rgb;
use crate::gamma::gamma_rgb;
use crate::strip::Strip;

const FADE_MAX: u32 = 100;
const HUE_STEP: u32 = 256;
const FULL_RING: u32 = 65536;

/// Sweep the hue ring across the strip for `rainbow_loops` full loops,
/// fading brightness in over the first loop and out over the last.
///
/// `delay` is called once per frame with `wait`; the caller supplies the
/// platform sleep.
pub fn rainbow_fade_to_white(
    strip: &mut dyn Strip,
    wait: Duration,
    rainbow_loops: u16,
    mut delay: impl FnMut(Duration),
) {
    let count = strip.pixel_count();
    if count == 0 || rainbow_loops == 0 {
        return;
    }

    let total = u32::from(rainbow_loops) * FULL_RING;
    let mut fade_val: u32 = 0;
    let mut first_pixel_hue: u32 = 0;

    while first_pixel_hue < total {
        for index in 0..count {
            // One full hue revolution along the strip length
            let pixel_hue = first_pixel_hue + u32::from(index) * FULL_RING / u32::from(count);
            #[allow(clippy::cast_possible_truncation)]
            let value = (255 * fade_val / FADE_MAX) as u8;
            #[allow(clippy::cast_possible_truncation)]
            let color = gamma_rgb(hsv16_to_rgb((pixel_hue % FULL_RING) as u16, 255, value));
            strip.set_pixel(index, color);
        }
        strip.show();
        delay(wait);

        if first_pixel_hue < FULL_RING {
            // first loop: fade in
            if fade_val < FADE_MAX {
                fade_val += 1;
            }
        } else if first_pixel_hue >= total - FULL_RING {
            // last loop: fade out
            fade_val = fade_val.saturating_sub(1);
        } else {
            fade_val = FADE_MAX;
        }

        first_pixel_hue += HUE_STEP;
    }
}
