//! Hysteresis pump controller
//!
//! Ties the pressure sensor, the flow-switch interlock and the relay
//! output together. One `update()` per control tick: read pressure, read
//! flow, apply the two-threshold transition, drive the relay. A sensor
//! fault fails safe: the pump is forced off before the error propagates.

use barostat_core::config::ControlConfig;
use barostat_core::control::{next_state, PumpState};
use barostat_core::traits::{InputPin, PressureSensor, PumpController, PumpOutput, SensorError};

/// Hysteresis controller driving the pump relay
///
/// The flow switch is active-high: a high input means water is flowing.
pub struct HysteresisController<S, P, F> {
    sensor: S,
    relay: P,
    flow: F,
    config: ControlConfig,
    state: PumpState,
    last_pressure_x1000: Option<i32>,
}

impl<S: PressureSensor, P: PumpOutput, F: InputPin> HysteresisController<S, P, F> {
    /// Create a new controller
    ///
    /// The relay output is expected to start off (GpioRelay guarantees
    /// this at construction).
    pub fn new(sensor: S, relay: P, flow: F, config: ControlConfig) -> Self {
        Self {
            sensor,
            relay,
            flow,
            config,
            state: PumpState::Off,
            last_pressure_x1000: None,
        }
    }

    /// Get access to the underlying sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Get access to the underlying relay
    pub fn relay(&self) -> &P {
        &self.relay
    }

    fn force_off(&mut self) {
        self.relay.set_on(false);
        self.state = PumpState::Off;
    }
}

impl<S: PressureSensor, P: PumpOutput, F: InputPin> PumpController
    for HysteresisController<S, P, F>
{
    fn state(&self) -> PumpState {
        self.state
    }

    fn last_pressure_x1000(&self) -> Option<i32> {
        self.last_pressure_x1000
    }

    fn update(&mut self) -> Result<i32, SensorError> {
        let pressure_x1000 = match self.sensor.read_pressure_x1000() {
            Ok(p) => p,
            Err(e) => {
                self.last_pressure_x1000 = None;
                self.force_off();
                return Err(e);
            }
        };
        self.last_pressure_x1000 = Some(pressure_x1000);

        let flow_present = self.flow.is_high();
        let next = next_state(self.state, pressure_x1000, flow_present, &self.config);

        if next != self.state {
            self.relay.set_on(next.is_on());
            self.state = next;
        }

        Ok(pressure_x1000)
    }
}
