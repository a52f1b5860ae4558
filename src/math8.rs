//! Fixed-point helpers for 8-bit channel math
//!
//! `scale8` and `blend8` back the brightness and gradient paths; the
//! progress helpers map elapsed time onto an effect's progress span.

use embassy_time::Duration;

/// Multiply an 8-bit value by an 8-bit fraction (255 = 1.0).
///
/// `scale8(x, 255) == x` and `scale8(x, 0) == 0`.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Mix `a` toward `b` by an 8-bit amount (255 = all `b`), with rounding.
///
/// Both endpoints are exact: `blend8(a, b, 0) == a`, `blend8(a, b, 255) == b`.
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    // 16.16 fixed point: a + delta * amount * (65536 / 255), rounded
    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Elapsed time mapped onto 0-255 progress
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress8(elapsed: Duration, duration: Duration) -> u8 {
    progress16(elapsed, duration, 255) as u8
}

/// Elapsed time mapped onto 0-span progress
///
/// The fade effects use spans finer than 255 (512 steps) for smoother
/// perceived motion.
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress16(elapsed: Duration, duration: Duration, span: u16) -> u16 {
    if duration.as_millis() == 0 {
        return span;
    }
    if elapsed.as_millis() >= duration.as_millis() {
        return span;
    }

    ((elapsed.as_millis() * span as u64) / duration.as_millis()) as u16
}
