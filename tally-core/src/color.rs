//! Color and pixel frame types

use crate::config::LED_COUNT;

/// 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// All channels off
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Check if every channel is zero
    pub const fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// One color per matrix cell, in raster order (row 0 first)
///
/// Built fresh for every render and streamed out front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFrame {
    cells: [Color; LED_COUNT],
}

impl PixelFrame {
    /// Create a frame with every cell black
    pub const fn blank() -> Self {
        Self {
            cells: [Color::BLACK; LED_COUNT],
        }
    }

    /// Set the color of one cell (raster index)
    ///
    /// Indexes past the end of the matrix are ignored.
    pub fn set(&mut self, index: usize, color: Color) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color;
        }
    }

    /// Get the color at a row/column position
    pub fn at(&self, row: usize, col: usize) -> Option<Color> {
        if row >= crate::config::MATRIX_HEIGHT || col >= crate::config::MATRIX_WIDTH {
            return None;
        }
        Some(self.cells[row * crate::config::MATRIX_WIDTH + col])
    }

    /// Cells in transmission order
    pub fn cells(&self) -> &[Color; LED_COUNT] {
        &self.cells
    }

    /// Number of lit (non-black) cells
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_black()).count()
    }
}

impl Default for PixelFrame {
    fn default() -> Self {
        Self::blank()
    }
}
