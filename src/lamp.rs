//! Lamp capability configuration
//!
//! The lamp flavor is resolved at startup into an explicit config struct
//! rather than selected with compile-time feature flags.

use crate::color::Rgb;
use crate::math8::scale8;

/// Hardware flavor of the lamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampKind {
    /// Single-color white lamp
    Simple,
    /// Tunable-white lamp (color temperature only)
    ColorTemperature,
    /// Fully addressable RGB strip
    Indexable,
}

impl LampKind {
    /// Pixels are individually addressable
    pub const fn is_indexable(self) -> bool {
        matches!(self, Self::Indexable)
    }

    /// The lamp can show arbitrary colors
    pub const fn has_color(self) -> bool {
        matches!(self, Self::Indexable)
    }
}

/// Startup-resolved lamp configuration
#[derive(Debug, Clone, Copy)]
pub struct LampConfig {
    pub kind: LampKind,
    pub pixel_count: u16,
    /// Base brightness, 0 (min) to 255 (max)
    pub brightness: u8,
}

impl LampConfig {
    pub const fn new(kind: LampKind, pixel_count: u16) -> Self {
        Self {
            kind,
            pixel_count,
            brightness: 255,
        }
    }

    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Scale a color by the configured base brightness.
    ///
    /// Applied by the platform glue just before pixels hit the wire, so the
    /// effects always compute in full range.
    pub const fn apply_brightness(&self, color: Rgb) -> Rgb {
        Rgb {
            r: scale8(color.r, self.brightness),
            g: scale8(color.g, self.brightness),
            b: scale8(color.b, self.brightness),
        }
    }
}
