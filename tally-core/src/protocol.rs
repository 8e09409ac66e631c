//! One-wire addressable LED protocol model
//!
//! WS2812-class LEDs take 24 bits per pixel, green first, MSB first. Every
//! bit cell is split into three phases:
//!
//! ```text
//!            T1     T2     T3
//!          ┌─────┬──────┐
//!  "1"     │     │      │      │
//!        ──┘     │      └──────┘
//!          ┌─────┐
//!  "0"     │     │             │
//!        ──┘     └─────────────┘
//! ```
//!
//! With T1 = 2, T2 = 5, T3 = 3 cycles and a 10-cycle cell at 800 kHz, a
//! cycle is 125ns: a "1" is 875ns high / 375ns low and a "0" is 250ns high /
//! 1000ns low. The peripheral runs the cell at `BIT_RATE_HZ * 10` and the
//! data words are queued in the layout [`fifo_word`] produces.

use crate::color::Color;
use crate::config::{BITS_PER_PIXEL, BIT_RATE_HZ, T1_CYCLES, T2_CYCLES, T3_CYCLES};

/// Cycles in one bit cell
pub const CYCLES_PER_BIT: u32 = (T1_CYCLES + T2_CYCLES + T3_CYCLES) as u32;

/// Pack a color into the 24-bit GRB word (`G << 16 | R << 8 | B`)
pub const fn grb_word(color: Color) -> u32 {
    ((color.g as u32) << 16) | ((color.r as u32) << 8) | color.b as u32
}

/// Word pushed to the serializer's FIFO
///
/// The serializer shifts out the 24 most significant bits, so the GRB word
/// is moved up one byte and the low byte is padding.
pub const fn fifo_word(color: Color) -> u32 {
    grb_word(color) << 8
}

/// Data bits of one pixel in transmission order (MSB of green first)
pub fn bits(color: Color) -> impl Iterator<Item = bool> {
    let word = grb_word(color);
    (0..BITS_PER_PIXEL).rev().map(move |i| (word >> i) & 1 == 1)
}

/// Line levels of one bit cell, in peripheral cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    pub high_cycles: u8,
    pub low_cycles: u8,
}

impl Pulse {
    /// Cell for a "1" bit: long high, short low
    pub const ONE: Pulse = Pulse {
        high_cycles: T1_CYCLES + T2_CYCLES,
        low_cycles: T3_CYCLES,
    };

    /// Cell for a "0" bit: short high, long low
    pub const ZERO: Pulse = Pulse {
        high_cycles: T1_CYCLES,
        low_cycles: T2_CYCLES + T3_CYCLES,
    };

    pub const fn for_bit(bit: bool) -> Self {
        if bit {
            Self::ONE
        } else {
            Self::ZERO
        }
    }

    /// High time in nanoseconds
    pub const fn high_ns(&self) -> u32 {
        self.high_cycles as u32 * cycle_ns()
    }

    /// Low time in nanoseconds
    pub const fn low_ns(&self) -> u32 {
        self.low_cycles as u32 * cycle_ns()
    }
}

/// Duration of one peripheral cycle in nanoseconds
pub const fn cycle_ns() -> u32 {
    1_000_000_000 / (BIT_RATE_HZ * CYCLES_PER_BIT)
}

/// Waveform of one pixel: 24 bit cells
pub fn waveform(color: Color) -> impl Iterator<Item = Pulse> {
    bits(color).map(Pulse::for_bit)
}

/// Calculate the serializer clock divider for the configured bit rate
///
/// The state machine runs at `sys_clk_hz / divider` and spends
/// [`CYCLES_PER_BIT`] cycles per bit, so:
/// divider = sys_clk / (bit_rate * cycles_per_bit)
///
/// Returns (integer_part, fractional_part) for a 16.8 fixed-point divider.
pub fn clock_divider(sys_clk_hz: u32) -> (u16, u8) {
    let cell_hz = BIT_RATE_HZ as u64 * CYCLES_PER_BIT as u64;

    // Multiply by 256 first to keep 8 fractional bits
    let divider_x256 = (sys_clk_hz as u64 * 256) / cell_hz;

    let int_part = (divider_x256 / 256).min(0xFFFF) as u16;
    let frac_part = (divider_x256 % 256) as u8;

    (int_part, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grb_word_layout() {
        assert_eq!(grb_word(Color::new(0x11, 0x22, 0x33)), 0x22_11_33);
        assert_eq!(fifo_word(Color::new(0x11, 0x22, 0x33)), 0x22_11_33_00);
    }

    #[test]
    fn test_dim_green_bit_pattern() {
        // g = 20 = 0b0001_0100, r = 0, b = 0
        let color = Color::new(0, 20, 0);
        assert_eq!(grb_word(color), 0x14_00_00);
        assert_eq!(fifo_word(color), 0x14_00_00_00);

        let mut expected = [false; 24];
        expected[3] = true;
        expected[5] = true;

        let mut count = 0;
        for (i, bit) in bits(color).enumerate() {
            assert_eq!(bit, expected[i], "bit {}", i);
            count += 1;
        }
        assert_eq!(count, 24);

        let ones = waveform(color).filter(|p| *p == Pulse::ONE).count();
        assert_eq!(ones, 2);
    }

    #[test]
    fn test_black_is_all_zero_cells() {
        assert_eq!(fifo_word(Color::BLACK), 0);
        assert_eq!(waveform(Color::BLACK).count(), 24);
        assert!(waveform(Color::BLACK).all(|p| p == Pulse::ZERO));
    }

    #[test]
    fn test_green_is_sent_first() {
        let first: [bool; 8] = {
            let mut out = [false; 8];
            for (i, bit) in bits(Color::new(0, 0xFF, 0)).take(8).enumerate() {
                out[i] = bit;
            }
            out
        };
        assert_eq!(first, [true; 8]);
        assert!(bits(Color::new(0, 0xFF, 0)).skip(8).all(|b| !b));
        assert!(bits(Color::new(0xFF, 0, 0)).take(8).all(|b| !b));
    }

    #[test]
    fn test_pulse_timing() {
        assert_eq!(cycle_ns(), 125);

        assert_eq!(Pulse::ONE.high_ns(), 875);
        assert_eq!(Pulse::ONE.low_ns(), 375);
        assert_eq!(Pulse::ZERO.high_ns(), 250);
        assert_eq!(Pulse::ZERO.low_ns(), 1000);

        // Both cells last exactly one bit period (1.25µs)
        for pulse in [Pulse::ONE, Pulse::ZERO] {
            assert_eq!(pulse.high_ns() + pulse.low_ns(), 1250);
        }
    }

    #[test]
    fn test_clock_divider() {
        // 125MHz / 8MHz = 15.625 -> 15 + 160/256
        assert_eq!(clock_divider(125_000_000), (15, 160));

        // 133MHz / 8MHz = 16.625 -> 16 + 160/256
        assert_eq!(clock_divider(133_000_000), (16, 160));

        // 8MHz runs the cell clock undivided
        assert_eq!(clock_divider(8_000_000), (1, 0));
    }
}
