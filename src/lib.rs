#![no_std]

pub mod animations;
pub mod button;
pub mod color;
pub mod gamma;
pub mod lamp;
pub mod math8;
pub mod mode;
pub mod strip;

pub use animations::{
    Animation, ColorPulse, ColorWipe, DotPingPong, DotWipe, DotWipeRainbow, FadeIn, FadeOut,
    Police, WipeDirection, rainbow_fade_to_white,
};
pub use button::{ButtonPin, ButtonState, Debouncer, PressSignal};
pub use color::{Hsv, Rgb};
pub use lamp::{LampConfig, LampKind};
pub use mode::{LampMode, ModeTable};
pub use strip::{FrameStrip, Strip};

pub use embassy_time::{Duration, Instant};
