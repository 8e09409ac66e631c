//! Board-agnostic core logic for the Tally digit counter
//!
//! This crate contains all application logic that does not depend on
//! a specific chip:
//!
//! - Color and pixel frame types
//! - The 0-9 glyph table for the 5x5 matrix
//! - One-wire LED protocol model (word layout, bit timing, clock divider)
//! - Matrix renderer (generic over a pixel sink and a delay)
//! - Button input controller with a shared debounce gate
//! - Status LED blink controller
//! - Compile-time configuration constants

#![no_std]
#![deny(unsafe_code)]

pub mod blink;
pub mod color;
pub mod config;
pub mod glyph;
pub mod input;
pub mod protocol;
pub mod render;
pub mod traits;

pub use blink::Blinker;
pub use color::{Color, PixelFrame};
pub use glyph::{normalize, Glyph, GLYPHS};
pub use input::{Button, ButtonEvent, Counter, EdgeOutcome, InputController};
pub use render::MatrixRenderer;
pub use traits::PixelSink;
