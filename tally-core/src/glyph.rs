//! Digit glyphs for the 5x5 matrix
//!
//! Each glyph is written as five rows of five bits; the most significant of
//! the five bits is the leftmost column. They are expanded at compile time
//! into flat on/off masks in raster order.

use crate::color::{Color, PixelFrame};
use crate::config::{LED_COUNT, MATRIX_HEIGHT, MATRIX_WIDTH};

/// On/off mask over the matrix cells, in raster order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    cells: [bool; LED_COUNT],
}

impl Glyph {
    /// Build a glyph from five 5-bit rows (bit 4 = column 0)
    pub const fn from_rows(rows: [u8; MATRIX_HEIGHT]) -> Self {
        let mut cells = [false; LED_COUNT];
        let mut row = 0;
        while row < MATRIX_HEIGHT {
            let mut col = 0;
            while col < MATRIX_WIDTH {
                let bit = MATRIX_WIDTH - 1 - col;
                cells[row * MATRIX_WIDTH + col] = (rows[row] >> bit) & 1 == 1;
                col += 1;
            }
            row += 1;
        }
        Self { cells }
    }

    /// Glyph for any counter value (wraps into 0-9)
    pub fn for_value(value: i32) -> &'static Glyph {
        &GLYPHS[normalize(value)]
    }

    /// Check if the cell at a raster index is lit
    pub fn is_on(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    /// Raw mask in raster order
    pub fn cells(&self) -> &[bool; LED_COUNT] {
        &self.cells
    }

    /// Paint the glyph into a pixel frame
    pub fn to_frame(&self, on: Color, off: Color) -> PixelFrame {
        let mut frame = PixelFrame::blank();
        for (i, lit) in self.cells.iter().enumerate() {
            frame.set(i, if *lit { on } else { off });
        }
        frame
    }
}

/// Wrap any counter value into the displayable range 0-9
///
/// Equivalent to `((value % 10) + 10) % 10`, so negative values count down
/// from 9: -1 shows as 9, -10 as 0.
pub fn normalize(value: i32) -> usize {
    value.rem_euclid(10) as usize
}

#[rustfmt::skip]
pub const GLYPHS: [Glyph; 10] = [
    // 0
    Glyph::from_rows([0b11111, 0b10001, 0b10001, 0b10001, 0b11111]),
    // 1
    Glyph::from_rows([0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    // 2
    Glyph::from_rows([0b11111, 0b00001, 0b11111, 0b10000, 0b11111]),
    // 3
    Glyph::from_rows([0b11111, 0b00001, 0b11111, 0b00001, 0b11111]),
    // 4
    Glyph::from_rows([0b10001, 0b10001, 0b11111, 0b00001, 0b00001]),
    // 5
    Glyph::from_rows([0b11111, 0b10000, 0b11111, 0b00001, 0b11111]),
    // 6
    Glyph::from_rows([0b11111, 0b10000, 0b11111, 0b10001, 0b11111]),
    // 7
    Glyph::from_rows([0b11111, 0b00001, 0b00001, 0b00001, 0b00001]),
    // 8
    Glyph::from_rows([0b11111, 0b10001, 0b11111, 0b10001, 0b11111]),
    // 9
    Glyph::from_rows([0b11111, 0b10001, 0b11111, 0b00001, 0b11111]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_normalize(n: i32) -> i32 {
        ((n % 10) + 10) % 10
    }

    #[test]
    fn test_from_rows_layout() {
        let glyph = Glyph::from_rows([0b10000, 0b00001, 0, 0, 0b00100]);
        assert!(glyph.is_on(0)); // row 0, col 0
        assert!(!glyph.is_on(4));
        assert!(glyph.is_on(9)); // row 1, col 4
        assert!(glyph.is_on(22)); // row 4, col 2
        assert_eq!(glyph.cells().iter().filter(|c| **c).count(), 3);
        assert!(!glyph.is_on(25));
    }

    #[test]
    fn test_glyph_one_is_center_column() {
        let one = &GLYPHS[1];
        for i in 0..LED_COUNT {
            assert_eq!(one.is_on(i), i % MATRIX_WIDTH == 2, "cell {}", i);
        }
    }

    #[test]
    fn test_glyph_zero_is_ring() {
        let zero = &GLYPHS[0];
        for row in 0..MATRIX_HEIGHT {
            for col in 0..MATRIX_WIDTH {
                let edge = row == 0 || row == 4 || col == 0 || col == 4;
                assert_eq!(zero.is_on(row * MATRIX_WIDTH + col), edge);
            }
        }
    }

    #[test]
    fn test_glyph_lit_counts() {
        let expected = [16, 5, 17, 17, 11, 17, 18, 9, 19, 18];
        for (digit, glyph) in GLYPHS.iter().enumerate() {
            let lit = glyph.cells().iter().filter(|c| **c).count();
            assert_eq!(lit, expected[digit], "digit {}", digit);
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        for a in 0..10 {
            for b in (a + 1)..10 {
                assert_ne!(GLYPHS[a], GLYPHS[b], "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_normalize_wraps() {
        assert_eq!(normalize(0), 0);
        assert_eq!(normalize(9), 9);
        assert_eq!(normalize(10), 0);
        assert_eq!(normalize(-1), 9);
        assert_eq!(normalize(-10), 0);
        assert_eq!(normalize(-11), 9);
        assert_eq!(normalize(i32::MIN), 2);
        assert_eq!(normalize(i32::MAX), 7);
    }

    #[test]
    fn test_for_value() {
        assert_eq!(Glyph::for_value(-1), &GLYPHS[9]);
        assert_eq!(Glyph::for_value(10), &GLYPHS[0]);
        assert_eq!(Glyph::for_value(1234), &GLYPHS[4]);
    }

    #[test]
    fn test_to_frame() {
        let on = Color::new(0, 20, 0);
        let frame = GLYPHS[7].to_frame(on, Color::BLACK);
        assert_eq!(frame.at(0, 0), Some(on));
        assert_eq!(frame.at(1, 0), Some(Color::BLACK));
        assert_eq!(frame.at(4, 4), Some(on));
        assert_eq!(frame.lit_count(), 9);
    }

    proptest! {
        #[test]
        fn prop_normalize_in_range(n in any::<i32>()) {
            prop_assert!(normalize(n) <= 9);
        }

        #[test]
        fn prop_normalize_matches_reference(n in any::<i32>()) {
            prop_assert_eq!(normalize(n) as i32, reference_normalize(n));
        }

        #[test]
        fn prop_normalize_periodic(n in (i32::MIN + 10)..(i32::MAX - 10)) {
            prop_assert_eq!(normalize(n), normalize(n + 10));
        }

        #[test]
        fn prop_increment_decrement_round_trip(n in any::<i32>()) {
            let shown = normalize(n) as i32;
            prop_assert_eq!(normalize(shown + 1 - 1), normalize(n));
        }
    }
}
