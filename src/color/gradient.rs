//! Two-color interpolation and analog fill level

use crate::color::{Rgb, hsv16_to_rgb, hue_of};
use crate::math8::blend8;
use crate::strip::Strip;

/// Linear interpolation between two colors.
///
/// `t` is clamped to `[0, 1]` before use, so `gradient(a, b, 0) == a`,
/// `gradient(a, b, 1) == b` and `gradient(c, c, t) == c` for any `t`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gradient(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let amount = (t.clamp(0.0, 1.0) * 255.0) as u8;
    Rgb {
        r: blend8(from.r, to.r, amount),
        g: blend8(from.g, to.g, amount),
        b: blend8(from.b, to.b, amount),
    }
}

/// Render an analog "fill level" onto the strip.
///
/// Pixels below `cutoff * pixelCount` show their base color solidly. The
/// single pixel at the boundary is dimmed by the fractional remainder via
/// an HSV brightness blend, everything above is off. `cutoff` is clamped
/// to `[0, 1]`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn apply_cutoff(strip: &mut dyn Strip, base_colors: &[Rgb], cutoff: f32) {
    let count = strip.pixel_count();
    if count == 0 {
        return;
    }

    let level = cutoff.clamp(0.0, 1.0) * f32::from(count);
    let whole = (level as u16).min(count);
    let fraction = level - f32::from(whole);

    let base_at = |index: u16| {
        base_colors
            .get(usize::from(index))
            .copied()
            .unwrap_or(Rgb::new(0, 0, 0))
    };

    for index in 0..whole {
        strip.set_pixel(index, base_at(index));
    }

    // Partial pixel at the boundary
    if whole < count {
        let base = base_at(whole);
        let value = (fraction * 255.0) as u8;
        strip.set_pixel(whole, hsv16_to_rgb(hue_of(base), 255, value));
    }

    for index in whole.saturating_add(1)..count {
        strip.set_pixel(index, Rgb::new(0, 0, 0));
    }
}
