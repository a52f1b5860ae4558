//! Pixel strip abstraction
//!
//! The engine never talks to hardware directly. Everything renders through
//! the [`Strip`] trait, so the same effects run against a real LED driver
//! or against [`FrameStrip`] in tests and host previews.

use crate::color::Rgb;

/// Abstract addressable pixel strip
///
/// Implement this trait to support different hardware platforms.
/// The animation engine is generic over this trait (via `&mut dyn Strip`).
///
/// Out-of-range access must be harmless: `get_pixel` past the end returns
/// black and `set_pixel` past the end is a no-op. The wipe effects rely on
/// this when they read one pixel ahead of the sweep front.
pub trait Strip {
    /// Number of addressable pixels
    fn pixel_count(&self) -> u16;

    /// Set a pixel color in the working buffer
    fn set_pixel(&mut self, index: u16, color: Rgb);

    /// Read a pixel color back from the working buffer
    fn get_pixel(&self, index: u16) -> Rgb;

    /// Turn every pixel off in the working buffer
    fn clear(&mut self);

    /// Push the working buffer to the LEDs
    fn show(&mut self);

    /// Fill the half-open pixel range `[start, end)` with one color
    fn fill(&mut self, color: Rgb, start: u16, end: u16) {
        for index in start..end.min(self.pixel_count()) {
            self.set_pixel(index, color);
        }
    }
}

/// In-memory strip backed by a fixed pixel array
///
/// Used by the test suite and host previews. `show()` only counts how many
/// times the frame was pushed; the working buffer is always inspectable.
#[derive(Debug, Clone)]
pub struct FrameStrip<const N: usize> {
    pixels: [Rgb; N],
    show_count: u32,
}

impl<const N: usize> FrameStrip<N> {
    pub const fn new() -> Self {
        Self {
            pixels: [Rgb::new(0, 0, 0); N],
            show_count: 0,
        }
    }

    /// Number of times `show()` was called since creation
    pub const fn show_count(&self) -> u32 {
        self.show_count
    }

    /// The working buffer as a slice
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Indices of pixels that are not black
    pub fn lit_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != Rgb::new(0, 0, 0))
            .map(|(i, _)| i)
    }
}

impl<const N: usize> Default for FrameStrip<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Strip for FrameStrip<N> {
    #[allow(clippy::cast_possible_truncation)]
    fn pixel_count(&self) -> u16 {
        N as u16
    }

    fn set_pixel(&mut self, index: u16, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(usize::from(index)) {
            *pixel = color;
        }
    }

    fn get_pixel(&self, index: u16) -> Rgb {
        self.pixels
            .get(usize::from(index))
            .copied()
            .unwrap_or(Rgb::new(0, 0, 0))
    }

    fn clear(&mut self) {
        self.pixels = [Rgb::new(0, 0, 0); N];
    }

    fn show(&mut self) {
        self.show_count += 1;
    }
}
