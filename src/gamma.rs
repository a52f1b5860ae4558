//! Gamma correction for WS2812-class strips
//!
//! Perceived LED brightness is wildly nonlinear; rainbow colors in
//! particular look washed out without correction. This applies the usual
//! 2.6 power curve per channel.

use libm::powf;

use crate::color::Rgb;

const GAMMA: f32 = 2.6;

/// Gamma-correct a single 8-bit channel
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gamma8(value: u8) -> u8 {
    let normalized = f32::from(value) / 255.0;
    (powf(normalized, GAMMA) * 255.0 + 0.5) as u8
}

/// Gamma-correct all three channels of a color
pub fn gamma_rgb(color: Rgb) -> Rgb {
    Rgb {
        r: gamma8(color.r),
        g: gamma8(color.g),
        b: gamma8(color.b),
    }
}
