//! Tally Hardware Abstraction Layer
//!
//! Chip-agnostic pin traits used by `tally-core`. Chip-specific crates
//! (currently only `tally-hal-rp2040`) implement them on top of their
//! peripheral drivers, so the counter, debounce and blink logic can be
//! exercised on the host with mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tally-firmware (tasks, wiring)         │
//! └─────────────────────────────────────────┘
//!            │                    │
//!            ▼                    ▼
//! ┌────────────────────┐  ┌─────────────────┐
//! │ tally-core (logic) │  │ tally-hal-rp2040│
//! └────────────────────┘  └─────────────────┘
//!            │                    │
//!            └─────────┬──────────┘
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │  tally-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (status LED)
//! - [`gpio::EdgeInput`] - Awaitable falling-edge source (buttons)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{EdgeError, EdgeInput, OutputPin};
