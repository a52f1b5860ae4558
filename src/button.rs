//! Button debounce and multi-click / hold recognition
//!
//! Two halves with a deliberately narrow seam between them:
//!
//! - [`PressSignal`] is the interrupt side. The pin-change handler calls
//!   [`PressSignal::record`] and nothing else; it writes a level flag, a
//!   press timestamp and a press sequence counter inside one short
//!   critical section.
//! - [`Debouncer`] is the polling side. Once per tick it ingests the
//!   recorded edges and runs all the decision logic: click counting,
//!   burst flushing and long-press tracking.
//!
//! A missed or glitchy interrupt self-heals: every burst is force-flushed
//! after [`RELEASE_TIMING_MS`] of inactivity, so the worst case is one
//! miscounted click, never a stuck state.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::Instant;

/// Press-to-press gap below which consecutive presses are guaranteed to
/// join one burst. Presses further apart still join as long as the burst
/// has not been flushed yet.
pub const RELEASE_BETWEEN_CLICKS_MS: u64 = 50;

/// Inactivity gap after which an unterminated burst is flushed
pub const RELEASE_TIMING_MS: u64 = 200;

/// Continuous press duration after which a burst becomes a hold
pub const HOLD_BUTTON_MIN_MS: u64 = 1000;

/// Physical button pin as seen by the platform glue
///
/// The lamp button is wired with a pull-up, so a pressed button reads low.
pub trait ButtonPin {
    fn is_high(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
struct RawEdge {
    /// Current pin level (true = pressed)
    level: bool,
    /// Incremented on every press edge; lets the poller detect edges it
    /// has not seen yet
    press_seq: u32,
    /// Timestamp of the most recent press edge, in milliseconds
    pressed_at: u64,
}

/// Interrupt-to-poll handoff for button edges
///
/// Intended to live in a `static`; the interrupt handler and the polling
/// loop share it by reference.
pub struct PressSignal {
    inner: Mutex<Cell<RawEdge>>,
}

impl PressSignal {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(RawEdge {
                level: false,
                press_seq: 0,
                pressed_at: 0,
            })),
        }
    }

    /// Record a pin change. This is the only call the interrupt handler
    /// makes; it must stay flag-and-timestamp writes only.
    pub fn record(&self, pressed: bool, now: Instant) {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut raw = cell.get();
            if pressed {
                raw.press_seq = raw.press_seq.wrapping_add(1);
                raw.pressed_at = now.as_millis();
            }
            raw.level = pressed;
            cell.set(raw);
        });
    }

    /// Record a pin change from a pull-up wired pin (pressed = low)
    pub fn record_from_pin(&self, pin: &impl ButtonPin, now: Instant) {
        self.record(!pin.is_high(), now);
    }

    fn snapshot(&self) -> RawEdge {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl Default for PressSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Burst-tracking state, mutated only by [`Debouncer::handle_events`]
#[derive(Debug, Clone, Copy)]
pub struct ButtonState {
    /// A burst is in flight (cleared when the burst is flushed)
    pub pressed: bool,
    /// Presses counted in the current burst
    pub click_count: u8,
    /// Start of the press currently being timed for hold detection
    pub first_hold_at: Instant,
    /// Last press edge, refreshed each tick while the pin stays held
    pub last_edge_at: Instant,
    /// The current burst has been reclassified as a hold
    pub is_long_pressed: bool,
    /// A burst is awaiting flush
    pub was_triggered: bool,
}

impl ButtonState {
    const fn new() -> Self {
        Self {
            pressed: false,
            click_count: 0,
            first_hold_at: Instant::from_millis(0),
            last_edge_at: Instant::from_millis(0),
            is_long_pressed: false,
            was_triggered: false,
        }
    }
}

/// Converts recorded press edges into click-serie and hold events
///
/// Call [`handle_events`](Self::handle_events) once per scheduler tick.
/// `click_serie` fires once per completed burst with the click count;
/// `click_hold_serie` fires on every tick of an ongoing hold with the
/// growing duration, then exactly once with duration 0 after release.
pub struct Debouncer {
    state: ButtonState,
    seen_press_seq: u32,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            state: ButtonState::new(),
            seen_press_seq: 0,
        }
    }

    /// Current burst state, by value
    pub const fn state(&self) -> ButtonState {
        self.state
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn handle_events(
        &mut self,
        now: Instant,
        signal: &PressSignal,
        mut click_serie: impl FnMut(u8),
        mut click_hold_serie: impl FnMut(u8, u32),
    ) {
        let raw = signal.snapshot();

        // Ingest press edges recorded since the last poll. Every edge that
        // lands before the burst is flushed joins it; click accumulation
        // freezes once the burst is a hold.
        let new_presses = raw.press_seq.wrapping_sub(self.seen_press_seq);
        if new_presses > 0 {
            self.seen_press_seq = raw.press_seq;
            let edge = Instant::from_millis(raw.pressed_at);
            let counted = u8::try_from(new_presses).unwrap_or(u8::MAX);

            if !self.state.was_triggered {
                self.state.click_count = counted;
                self.state.first_hold_at = edge;
            } else if !self.state.is_long_pressed {
                self.state.click_count = self.state.click_count.saturating_add(counted);
                self.state.first_hold_at = edge;
            }
            self.state.last_edge_at = edge;
            self.state.was_triggered = true;
            self.state.pressed = true;
        }

        let since_last = now.as_millis().saturating_sub(self.state.last_edge_at.as_millis());
        let press_duration = now
            .as_millis()
            .saturating_sub(self.state.first_hold_at.as_millis());

        self.state.is_long_pressed =
            self.state.pressed && press_duration > HOLD_BUTTON_MIN_MS;

        // Flush the burst once the button has gone quiet. Holds flush on
        // half the gap so the hold-end event stays snappy.
        if self.state.was_triggered
            && (since_last > RELEASE_TIMING_MS
                || (self.state.is_long_pressed && since_last > RELEASE_TIMING_MS / 2))
        {
            if self.state.is_long_pressed {
                // duration 0 signals hold-end
                click_hold_serie(self.state.click_count, 0);
            } else {
                click_serie(self.state.click_count);
            }

            self.state.pressed = false;
            self.state.is_long_pressed = false;
            self.state.click_count = 0;
            self.state.first_hold_at = now;
            self.state.was_triggered = false;
        }

        // While the pin stays held the burst never goes quiet
        if raw.level {
            self.state.last_edge_at = now;
        }

        // Repeating-event semantics: an ongoing hold reports on every tick
        if self.state.is_long_pressed {
            self.state.was_triggered = true;
            click_hold_serie(self.state.click_count, press_duration as u32);
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
