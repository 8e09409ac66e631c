//! Matrix renderer
//!
//! Turns a counter value into a glyph and streams the resulting 25 colors
//! to the LED chain, then holds the line idle long enough to latch.

use embedded_hal_async::delay::DelayNs;

use crate::color::PixelFrame;
use crate::config::{OFF_COLOR, ON_COLOR, SETTLE_US};
use crate::glyph::{normalize, Glyph};
use crate::traits::PixelSink;

/// Build the frame shown for a counter value
pub fn frame(value: i32) -> PixelFrame {
    Glyph::for_value(value).to_frame(ON_COLOR, OFF_COLOR)
}

/// Renders digits onto the LED matrix
pub struct MatrixRenderer<S, D> {
    sink: S,
    delay: D,
    /// Digit shown by the last completed render
    last_digit: Option<u8>,
}

impl<S: PixelSink, D: DelayNs> MatrixRenderer<S, D> {
    /// Create a new renderer over a pixel sink and a delay provider
    pub fn new(sink: S, delay: D) -> Self {
        Self {
            sink,
            delay,
            last_digit: None,
        }
    }

    /// Render a counter value
    ///
    /// Any integer is accepted; it is wrapped into 0-9 first. All 25 pixels
    /// go out back-to-back with no gap, then the call waits [`SETTLE_US`]
    /// so the chain latches before anything else is sent.
    pub async fn render(&mut self, value: i32) {
        let frame = frame(value);

        for color in frame.cells() {
            self.sink.emit(*color).await;
        }

        self.delay.delay_us(SETTLE_US).await;
        self.last_digit = Some(normalize(value) as u8);
    }

    /// Digit shown by the last completed render
    pub fn last_digit(&self) -> Option<u8> {
        self.last_digit
    }
}
