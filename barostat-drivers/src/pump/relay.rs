//! GPIO relay output
//!
//! Drives the pump relay through a GPIO pin (directly or via an opto
//! module). The pin can be configured as active-high (default) or
//! active-low.

use barostat_core::traits::{OutputPin, PumpOutput};

/// GPIO relay output for the pump
pub struct GpioRelay<P> {
    pin: P,
    /// If true, relay energized = pin LOW
    inverted: bool,
    /// Current logical state (true = pump on)
    on: bool,
}

impl<P: OutputPin> GpioRelay<P> {
    /// Create a new GPIO relay output
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the relay energizes when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut relay = Self {
            pin,
            inverted,
            on: false,
        };
        // Ensure the pump starts off
        relay.set_on(false);
        relay
    }

    /// Create a new relay with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new relay with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> PumpOutput for GpioRelay<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.pin.set_state(on != self.inverted);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_relay() {
        let mut relay = GpioRelay::new_active_high(MockPin::new());

        // Initially off
        assert!(!relay.is_on());
        assert!(!relay.pin.is_set_high());

        relay.set_on(true);
        assert!(relay.is_on());
        assert!(relay.pin.is_set_high());

        relay.set_on(false);
        assert!(!relay.is_on());
        assert!(!relay.pin.is_set_high());
    }

    #[test]
    fn test_active_low_relay() {
        let mut relay = GpioRelay::new_active_low(MockPin::new());

        // Initially off (pin held high for active-low)
        assert!(!relay.is_on());
        assert!(relay.pin.is_set_high());

        relay.set_on(true);
        assert!(relay.is_on());
        assert!(!relay.pin.is_set_high());

        relay.set_on(false);
        assert!(!relay.is_on());
        assert!(relay.pin.is_set_high());
    }
}
