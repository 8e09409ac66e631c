//! Button input controller
//!
//! Two active-low buttons step a shared counter up and down. Both buttons
//! go through one debounce gate: after any accepted press, every edge on
//! either button is ignored until the window has passed.
//!
//! The controller is the only writer of the counter. Everything else reads
//! it through [`Counter::get`], so a single-word load is all the
//! synchronization the display side needs.

use portable_atomic::{AtomicI32, Ordering};

use crate::config::DEBOUNCE_US;

/// Which button produced an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Button A: count up
    Increment,
    /// Button B: count down
    Decrement,
}

impl Button {
    /// Change applied to the counter when a press is accepted
    pub const fn delta(self) -> i32 {
        match self {
            Button::Increment => 1,
            Button::Decrement => -1,
        }
    }
}

/// Falling edge seen on a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: Button,
    /// Monotonic timestamp of the edge in microseconds
    pub at_us: u64,
}

/// Result of handling one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Press accepted, counter now holds this value
    Accepted(i32),
    /// Edge fell inside the debounce window and was dropped
    Debounced,
}

/// Shared counter value
///
/// The raw value is allowed to run past the displayable range in either
/// direction (and wraps at the `i32` limits); only its residue modulo 10
/// is shown.
#[derive(Debug)]
pub struct Counter {
    value: AtomicI32,
}

impl Counter {
    /// Create a counter starting at zero
    pub const fn new() -> Self {
        Self::with_value(0)
    }

    /// Create a counter starting at a given value
    pub const fn with_value(value: i32) -> Self {
        Self {
            value: AtomicI32::new(value),
        }
    }

    /// Current raw value
    pub fn get(&self) -> i32 {
        self.value.load(Ordering::Acquire)
    }

    /// Add a delta and return the new value
    ///
    /// Load and store are separate: this is only sound with one writer,
    /// which is why it stays private to the input controller.
    fn apply(&self, delta: i32) -> i32 {
        let next = self.value.load(Ordering::Relaxed).wrapping_add(delta);
        self.value.store(next, Ordering::Release);
        next
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimum-interval gate between accepted events
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceGate {
    window_us: u64,
    last_accepted_us: u64,
}

impl DebounceGate {
    /// Create a gate; the reference time starts at zero
    pub const fn new(window_us: u64) -> Self {
        Self {
            window_us,
            last_accepted_us: 0,
        }
    }

    /// Accept the event if at least one window has passed since the last one
    pub fn try_accept(&mut self, now_us: u64) -> bool {
        if now_us.saturating_sub(self.last_accepted_us) >= self.window_us {
            self.last_accepted_us = now_us;
            true
        } else {
            false
        }
    }

    /// Timestamp of the last accepted event
    pub fn last_accepted_us(&self) -> u64 {
        self.last_accepted_us
    }
}

/// Edge handler for the two counter buttons
///
/// Runs in the edge context: no blocking, no rendering, just a timestamp
/// comparison and an integer add.
pub struct InputController<'a> {
    counter: &'a Counter,
    gate: DebounceGate,
}

impl<'a> InputController<'a> {
    /// Create the controller with the default debounce window
    pub fn new(counter: &'a Counter) -> Self {
        Self::with_window(counter, DEBOUNCE_US)
    }

    /// Create the controller with a custom debounce window
    pub fn with_window(counter: &'a Counter, window_us: u64) -> Self {
        Self {
            counter,
            gate: DebounceGate::new(window_us),
        }
    }

    /// Handle one falling edge
    pub fn on_edge(&mut self, event: ButtonEvent) -> EdgeOutcome {
        if !self.gate.try_accept(event.at_us) {
            return EdgeOutcome::Debounced;
        }

        EdgeOutcome::Accepted(self.counter.apply(event.button.delta()))
    }

    /// Timestamp of the last accepted press
    pub fn last_press_us(&self) -> u64 {
        self.gate.last_accepted_us()
    }
}
