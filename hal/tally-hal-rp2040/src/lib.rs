//! RP2040-specific HAL for the Tally firmware
//!
//! Implements the `tally-hal` and `tally-core` traits on top of
//! `embassy-rp`:
//!
//! - PIO-based one-wire LED encoder (implements `tally_core::PixelSink`)
//! - GPIO adapters for the status LED and the buttons

#![no_std]

pub mod gpio;
pub mod ws2812;

pub use gpio::{RpButton, RpOutput};
pub use ws2812::PioPixelOutput;
