//! 16-bit hue ring conversions
//!
//! The lamp quantizes the 360° HSV hue domain onto a 16-bit ring
//! (0..=65535). Conversions in both directions live here: the max/min
//! segment formula for RGB → hue, and the 1530-position ramp for
//! hue → RGB.

use libm::{fmaxf, fminf, fmodf};

use crate::color::Rgb;

/// One full turn of the 16-bit hue ring
pub(crate) const HUE_MAX: u32 = 65535;

/// Convert a 16-bit hue plus 8-bit saturation/value to RGB.
///
/// Port of the classic NeoPixel `ColorHSV`: the hue ring is remapped onto
/// a 1530-position ramp (six 255-step sectors), then saturation and value
/// are applied with the `(((c * s1) >> 8) + s2) * v1 >> 8` fixed-point
/// form.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv16_to_rgb(hue: u16, sat: u8, val: u8) -> Rgb {
    let hue = (u32::from(hue) * 1530 + 32768) / 65536;

    let (r, g, b): (u32, u32, u32) = if hue < 510 {
        // red to green
        if hue < 255 {
            (255, hue, 0)
        } else {
            (510 - hue, 255, 0)
        }
    } else if hue < 1020 {
        // green to blue
        if hue < 765 {
            (0, 255, hue - 510)
        } else {
            (0, 1020 - hue, 255)
        }
    } else if hue < 1530 {
        // blue to red
        if hue < 1275 {
            (hue - 1020, 0, 255)
        } else {
            (255, 0, 1530 - hue)
        }
    } else {
        (255, 0, 0)
    };

    let v1 = 1 + u32::from(val);
    let s1 = 1 + u32::from(sat);
    let s2 = 255 - u32::from(sat);

    Rgb {
        r: (((((r * s1) >> 8) + s2) * v1) >> 8) as u8,
        g: (((((g * s1) >> 8) + s2) * v1) >> 8) as u8,
        b: (((((b * s1) >> 8) + s2) * v1) >> 8) as u8,
    }
}

/// Extract the 16-bit hue of an RGB triple given as floats in `[0, 1]`.
///
/// Standard max/min HSV derivation. Achromatic input (`r == g == b`)
/// yields hue 0 rather than an undefined value.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
pub fn rgb_to_hue16(r: f32, g: f32, b: f32) -> u16 {
    let cmax = fmaxf(r, fmaxf(g, b));
    let cmin = fminf(r, fminf(g, b));
    let diff = cmax - cmin;

    if cmax == cmin {
        return 0;
    }

    let degrees = if cmax == r {
        60.0 * ((g - b) / diff) + 360.0
    } else if cmax == g {
        60.0 * ((b - r) / diff) + 120.0
    } else {
        60.0 * ((r - g) / diff) + 240.0
    };

    #[allow(clippy::cast_precision_loss)]
    let hue = fmodf(degrees, 360.0) / 360.0 * HUE_MAX as f32;
    hue as u16
}

/// 16-bit hue of an 8-bit RGB color
pub fn hue_of(color: Rgb) -> u16 {
    rgb_to_hue16(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
    )
}

/// Fully saturated color half a hue ring away from the input
pub fn complementary_color(color: Rgb) -> Rgb {
    let hue = hue_of(color);
    #[allow(clippy::cast_possible_truncation)]
    let shifted = hue.wrapping_add((HUE_MAX / 2) as u16);
    hsv16_to_rgb(shifted, 255, 255)
}
