//! GPIO adapters
//!
//! Wrap `embassy-rp` pins so they implement the `tally-hal` traits.

use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;

use tally_hal::{EdgeError, EdgeInput, OutputPin};

/// Push-pull output (status LED channels)
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Configure a pin as output, starting low
    pub fn new_low<P: Pin>(pin: Peri<'d, P>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Active-low push button with the internal pull-up enabled
///
/// Falling edges are delivered by the GPIO bank interrupt.
pub struct RpButton<'d> {
    pin: Input<'d>,
}

impl<'d> RpButton<'d> {
    pub fn new_pull_up<P: Pin>(pin: Peri<'d, P>) -> Self {
        Self {
            pin: Input::new(pin, Pull::Up),
        }
    }
}

impl EdgeInput for RpButton<'_> {
    async fn wait_for_falling_edge(&mut self) -> Result<(), EdgeError> {
        self.pin.wait_for_falling_edge().await;
        Ok(())
    }
}
