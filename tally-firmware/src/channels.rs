//! State shared between tasks
//!
//! The counter is written only by the input task and read by the display
//! loop. The signal is a wake-up hint; the counter stays the source of
//! truth.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use tally_core::Counter;

/// Counter stepped by the buttons and shown on the matrix
pub static COUNTER: Counter = Counter::new();

/// Raised by the input task after an accepted press (carries the new value)
pub static COUNTER_CHANGED: Signal<CriticalSectionRawMutex, i32> = Signal::new();
