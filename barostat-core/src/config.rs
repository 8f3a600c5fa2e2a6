//! Configuration type definitions
//!
//! Tunable constants for the sensor calibration, the control loop and the
//! display refresh. These are compile-time defaults passed down at boot;
//! there is no runtime configuration surface.

/// Pressure transducer calibration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Transducer output at zero pressure (mV)
    pub vmin_mv: i32,
    /// Transducer output at full-scale pressure (mV)
    pub vmax_mv: i32,
    /// Full-scale pressure (pressure units × 1000)
    pub pmax_x1000: i32,
    /// Allowed excursion outside the calibrated band before the reading
    /// is reported as a fault (mV)
    pub band_tolerance_mv: i32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            vmin_mv: 500,          // 0.5V
            vmax_mv: 4500,         // 4.5V
            pmax_x1000: 1200,      // 1.2 pressure units
            band_tolerance_mv: 150,
        }
    }
}

/// Hysteresis control loop configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlConfig {
    /// Turn the pump on below this pressure (× 1000)
    pub low_pressure_x1000: i32,
    /// Turn the pump off above this pressure (× 1000)
    pub high_pressure_x1000: i32,
    /// Relay settle time after an off→on transition (ms)
    pub on_settle_ms: u32,
    /// Relay settle time after an on→off transition (ms)
    pub off_settle_ms: u32,
    /// Control loop period (ms)
    pub tick_ms: u32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            low_pressure_x1000: 170,  // 0.17
            high_pressure_x1000: 270, // 0.27
            on_settle_ms: 1000,
            off_settle_ms: 10,
            tick_ms: 200, // 5 Hz sampling
        }
    }
}

/// Display refresh configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Time each digit stays lit before the multiplexer advances (µs)
    pub digit_period_us: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            digit_period_us: 2000, // 125 full-frame refreshes per second
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_leave_a_dead_band() {
        let config = ControlConfig::default();
        assert!(config.low_pressure_x1000 < config.high_pressure_x1000);
    }

    #[test]
    fn test_refresh_is_flicker_free() {
        let config = DisplayConfig::default();
        // 4 digits per frame; persistence of vision needs >= 60 frames/s
        let frame_period_us = config.digit_period_us * 4;
        assert!(frame_period_us <= 1_000_000 / 60);
    }
}
