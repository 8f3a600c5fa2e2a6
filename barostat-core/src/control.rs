//! Hysteresis pump state transitions
//!
//! Bang-bang control with two thresholds: the pump turns on below
//! LOW_PRESSURE (with flow present) and off above HIGH_PRESSURE or when
//! flow stops. Between the thresholds the state holds, which prevents
//! relay chatter near a single setpoint.

use crate::config::ControlConfig;

/// Pump relay state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PumpState {
    /// Relay released, pump stopped
    Off,
    /// Relay energized, pump running
    On,
}

impl PumpState {
    /// Check if the pump is running in this state
    pub fn is_on(&self) -> bool {
        matches!(self, PumpState::On)
    }
}

/// Compute the next pump state for one control tick
///
/// The turn-on check runs first; the turn-off check runs unconditionally
/// after it and overrides a turn-on decision from the same tick. With the
/// default thresholds the two conditions are mutually exclusive, but the
/// evaluation order is part of the contract.
pub fn next_state(
    current: PumpState,
    pressure_x1000: i32,
    flow_present: bool,
    config: &ControlConfig,
) -> PumpState {
    let mut next = current;

    if pressure_x1000 < config.low_pressure_x1000 && flow_present {
        next = PumpState::On;
    }

    if pressure_x1000 > config.high_pressure_x1000 || !flow_present {
        next = PumpState::Off;
    }

    next
}
