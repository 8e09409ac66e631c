//! GPIO pin abstractions
//!
//! Provides traits for digital outputs and edge-triggered inputs that can be
//! implemented by chip-specific HALs.

use core::future::Future;

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Errors reported by an edge source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeError {
    /// The underlying interrupt could not be armed
    Unavailable,
}

/// Input that can be awaited for a falling edge
///
/// This is the registration point for button handlers: the caller awaits
/// the edge, then runs its handler with an event descriptor. The future
/// must be driven by the pin's interrupt, not by polling the level.
pub trait EdgeInput {
    /// Wait until the next high-to-low transition
    fn wait_for_falling_edge(&mut self) -> impl Future<Output = Result<(), EdgeError>>;
}
