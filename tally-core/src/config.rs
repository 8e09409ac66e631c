//! Compile-time configuration
//!
//! Every tunable of the firmware lives here. There is no runtime
//! configuration: pin choices are made in the firmware crate and all
//! timing constants below are fixed at build time.

use crate::color::Color;

/// Matrix width in cells
pub const MATRIX_WIDTH: usize = 5;

/// Matrix height in cells
pub const MATRIX_HEIGHT: usize = 5;

/// Number of LEDs in the chain
pub const LED_COUNT: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Color of a lit glyph cell (dim green)
pub const ON_COLOR: Color = Color::new(0, 20, 0);

/// Color of an unlit glyph cell
pub const OFF_COLOR: Color = Color::BLACK;

// ===================================================================
// One-wire LED protocol timing
// ===================================================================

/// Bit rate of the LED data line
pub const BIT_RATE_HZ: u32 = 800_000;

/// Cycles the line is high at the start of every bit
pub const T1_CYCLES: u8 = 2;

/// Cycles that decide the bit value (high for "1", low for "0")
pub const T2_CYCLES: u8 = 5;

/// Cycles the line is low at the end of every bit
pub const T3_CYCLES: u8 = 3;

/// Bits shifted out per pixel (GRB, 8 bits each)
pub const BITS_PER_PIXEL: u32 = 24;

/// Minimum low time that latches a frame into the LEDs
///
/// WS2812B parts from 2017 on need 280µs; older ones 50µs.
pub const LATCH_US: u32 = 280;

/// Depth of the joined TX FIFO feeding the encoder
pub const TX_FIFO_DEPTH: u32 = 8;

/// Time the renderer waits after the last pixel of a frame
pub const SETTLE_US: u32 = 1_000;

/// Worst-case time for a full TX FIFO to drain onto the wire
pub const FIFO_DRAIN_US: u32 = TX_FIFO_DEPTH * BITS_PER_PIXEL * 1_000_000 / BIT_RATE_HZ;

// The settle delay starts when the last word is queued, not when it has
// left the FIFO, so it has to cover the drain as well as the latch.
const _: () = assert!(SETTLE_US >= FIFO_DRAIN_US + LATCH_US);

// ===================================================================
// Input and timing
// ===================================================================

/// Minimum time between two accepted button presses (either button)
pub const DEBOUNCE_US: u64 = 200_000;

/// Blink controller tick (half of the full blink period)
pub const BLINK_INTERVAL_MS: u64 = 100;

/// Main loop idle time between renders
pub const IDLE_MS: u64 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_drain_time() {
        // 8 words * 24 bits * 1.25µs
        assert_eq!(FIFO_DRAIN_US, 240);
    }

    #[test]
    fn test_bit_cell_cycles() {
        let cycles = (T1_CYCLES + T2_CYCLES + T3_CYCLES) as u32;
        assert_eq!(cycles, 10);
    }
}
