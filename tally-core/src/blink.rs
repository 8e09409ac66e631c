//! Status LED blink controller
//!
//! Toggles one output on every timer tick, independent of the counter and
//! the display. A late tick only makes the blink uneven.

use tally_hal::OutputPin;

/// Periodic blinker for the status LED
pub struct Blinker<P> {
    pin: P,
    /// Level last written to the pin
    lit: bool,
}

impl<P: OutputPin> Blinker<P> {
    /// Create a blinker; the pin is driven low immediately
    pub fn new(mut pin: P) -> Self {
        pin.set_low();
        Self { pin, lit: false }
    }

    /// Timer callback
    ///
    /// Flips the state and writes it to the pin. Returns `true` to keep
    /// the timer running; the blinker never cancels itself.
    pub fn on_tick(&mut self) -> bool {
        self.lit = !self.lit;
        self.pin.set_state(self.lit);
        true
    }

    /// Current LED state
    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin that counts level changes
    struct MockPin {
        high: bool,
        transitions: u32,
    }

    impl MockPin {
        fn new(high: bool) -> Self {
            Self {
                high,
                transitions: 0,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.transitions += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.transitions += 1;
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_starts_low() {
        let blinker = Blinker::new(MockPin::new(true));
        assert!(!blinker.is_lit());
        assert!(blinker.pin.is_set_low());
    }

    #[test]
    fn test_full_period_returns_low() {
        let mut blinker = Blinker::new(MockPin::new(false));

        // 100ms tick: high at 100ms, low again at 200ms
        assert!(blinker.on_tick());
        assert!(blinker.pin.is_set_high());
        assert!(blinker.on_tick());
        assert!(blinker.pin.is_set_low());

        assert_eq!(blinker.pin.transitions, 2);
    }

    #[test]
    fn test_never_cancels() {
        let mut blinker = Blinker::new(MockPin::new(false));
        for _ in 0..1000 {
            assert!(blinker.on_tick());
        }
        // Even number of ticks ends low
        assert!(!blinker.is_lit());
        assert_eq!(blinker.pin.transitions, 1000);
    }
}
