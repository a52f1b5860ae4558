//! Resumable, time-driven visual effects
//!
//! Every effect implements [`Animation`] and renders incrementally: one
//! call per scheduler tick, advancing at most one unit of progress when
//! its segment delay has elapsed. Sub-threshold calls are (near) no-ops,
//! so the tick rate never changes what an effect looks like.
//!
//! Terminal behavior is deliberately not uniform across effects. Wipes
//! and fades keep returning `true` once finished until restarted, while
//! [`Police`] wraps its phase counter and pulses `true` once per full
//! cycle. Callers depend on both behaviors, so neither is unified here.

mod composite;
mod fades;
mod police;
mod rainbow;
mod wipes;

use embassy_time::{Duration, Instant};

pub use composite::{ColorPulse, DotPingPong};
pub use fades::{FadeIn, FadeOut};
pub use police::Police;
pub use rainbow::rainbow_fade_to_white;
pub use wipes::{ColorWipe, DotWipe, DotWipeRainbow, WipeDirection};

use crate::strip::Strip;

pub trait Animation {
    /// Advance the effect by at most one unit of progress.
    ///
    /// With `restart = true` all internal progress resets to the initial
    /// state and the call returns `false` without advancing time.
    /// Otherwise the effect compares `now` against its last recorded
    /// transition and repaints only when the segment delay has elapsed.
    ///
    /// Returns `true` on the tick where progress reaches its terminal
    /// bound (see the module docs for what happens after that).
    fn step(&mut self, restart: bool, now: Instant, strip: &mut dyn Strip) -> bool;
}

/// Wall-clock gap between successive progress advances
pub(crate) fn segment_delay(duration: Duration, segments: u16) -> Duration {
    if segments == 0 {
        return Duration::from_millis(0);
    }
    Duration::from_millis(duration.as_millis() / u64::from(segments))
}
