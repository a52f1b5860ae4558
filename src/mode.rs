//! Runtime mode dispatch
//!
//! Modes are registered in a [`ModeTable`] and selected by small integer
//! indices. The table owns the restart handshake: the first step after
//! any selection (including re-selecting the active mode) runs with
//! `restart = true`, so animations always begin from their initial state.

use embassy_time::Instant;

use crate::strip::Strip;

/// A user-visible lamp mode driven by the dispatcher
pub trait LampMode {
    /// Advance the mode by one tick. `restart` is true on the first tick
    /// after the dispatcher switched to this mode.
    fn step(&mut self, restart: bool, now: Instant, strip: &mut dyn Strip);

    /// Drop retained state when the dispatcher switches away
    fn reset(&mut self) {}

    /// Whether this mode consumes button events itself. Modes that leave
    /// this false never see click events; the dispatcher's caller applies
    /// the default lamp UI instead.
    fn handles_button_ui(&self) -> bool {
        false
    }

    /// A completed click serie routed from the debouncer
    fn on_click_serie(&mut self, _count: u8) {}

    /// A click-then-hold serie routed from the debouncer
    /// (duration 0 = hold end)
    fn on_click_hold_serie(&mut self, _count: u8, _hold_ms: u32) {}
}

/// Table of registered modes with one active at a time
pub struct ModeTable<'a, const N: usize> {
    modes: heapless::Vec<&'a mut dyn LampMode, N>,
    active: usize,
    needs_restart: bool,
}

impl<'a, const N: usize> ModeTable<'a, N> {
    pub const fn new() -> Self {
        Self {
            modes: heapless::Vec::new(),
            active: 0,
            needs_restart: true,
        }
    }

    /// Register a mode. Returns the mode back if the table is full.
    pub fn push(&mut self, mode: &'a mut dyn LampMode) -> Result<(), &'a mut dyn LampMode> {
        self.modes.push(mode)
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Index of the active mode
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// Select a mode by index (wraps past the end). The previous mode is
    /// reset; the next tick runs with `restart = true`.
    pub fn select(&mut self, index: usize) {
        if self.modes.is_empty() {
            return;
        }
        let index = index % self.modes.len();
        if index != self.active {
            if let Some(mode) = self.modes.get_mut(self.active) {
                mode.reset();
            }
        }
        self.active = index;
        self.needs_restart = true;
    }

    /// Cycle to the next registered mode
    pub fn next_mode(&mut self) {
        self.select(self.active.wrapping_add(1));
    }

    /// Tick the active mode
    pub fn tick(&mut self, now: Instant, strip: &mut dyn Strip) {
        let restart = self.needs_restart;
        self.needs_restart = false;
        if let Some(mode) = self.modes.get_mut(self.active) {
            mode.step(restart, now, strip);
        }
    }

    /// Route a completed click serie to the active mode.
    ///
    /// Returns `false` when the active mode does not handle button events
    /// itself; the caller then applies the default lamp UI.
    pub fn click_serie(&mut self, count: u8) -> bool {
        if let Some(mode) = self.modes.get_mut(self.active) {
            if mode.handles_button_ui() {
                mode.on_click_serie(count);
                return true;
            }
        }
        false
    }

    /// Route a click-then-hold serie to the active mode. Same consumption
    /// contract as [`click_serie`](Self::click_serie).
    pub fn click_hold_serie(&mut self, count: u8, hold_ms: u32) -> bool {
        if let Some(mode) = self.modes.get_mut(self.active) {
            if mode.handles_button_ui() {
                mode.on_click_hold_serie(count, hold_ms);
                return true;
            }
        }
        false
    }
}

impl<const N: usize> Default for ModeTable<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}
