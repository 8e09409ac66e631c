//! Hardware abstraction traits owned by the core

use core::future::Future;

use crate::color::Color;

/// Serial output feeding the LED chain
///
/// One call transmits exactly one pixel. The future completes once the
/// pixel has been handed to the peripheral's queue and waits while that
/// queue is full, which paces callers to the wire speed. Transmission
/// faults are not observable, so there is no error path.
pub trait PixelSink {
    /// Queue one pixel
    fn emit(&mut self, color: Color) -> impl Future<Output = ()>;
}
