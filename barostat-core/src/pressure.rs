//! Sample-to-pressure conversion
//!
//! The transducer is ratiometric: 0.5V at zero pressure, 4.5V at full
//! scale, read through a 10-bit ADC referenced to the 5V supply rail.
//! All math is integer-only; pressure is carried as milliunits (× 1000).

use crate::config::SensorConfig;

/// Full-scale value of a 10-bit conversion
pub const ADC_MAX: u16 = 1023;

/// ADC reference voltage in millivolts (supply rail)
pub const VREF_MV: i32 = 5000;

/// Convert a raw 10-bit sample to millivolts
pub fn sample_to_millivolts(sample: u16) -> i32 {
    sample as i32 * VREF_MV / ADC_MAX as i32
}

/// Convert a sensor voltage to pressure in milliunits
///
/// Linear over the calibrated band and deliberately unclamped: voltages
/// below `vmin_mv` produce negative values, voltages above `vmax_mv`
/// exceed `pmax_x1000`. Fault classification is the sensor driver's job.
pub fn millivolts_to_pressure_x1000(v_mv: i32, config: &SensorConfig) -> i32 {
    (v_mv - config.vmin_mv) * config.pmax_x1000 / (config.vmax_mv - config.vmin_mv)
}

/// Convert a raw 10-bit sample straight to pressure in milliunits
pub fn pressure_x1000_from_sample(sample: u16, config: &SensorConfig) -> i32 {
    millivolts_to_pressure_x1000(sample_to_millivolts(sample), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_calibration_endpoints() {
        let config = SensorConfig::default();

        // 102 counts ~ 0.5V = V_MIN -> zero pressure
        assert_eq!(pressure_x1000_from_sample(102, &config), 0);

        // 921 counts ~ 4.5V = V_MAX -> full scale
        assert_eq!(pressure_x1000_from_sample(921, &config), 1200);
    }

    #[test]
    fn test_unclamped_outside_band() {
        let config = SensorConfig::default();

        // Below V_MIN the value goes negative rather than saturating
        assert!(pressure_x1000_from_sample(50, &config) < 0);

        // At the top rail it exceeds full scale
        assert!(pressure_x1000_from_sample(ADC_MAX, &config) > config.pmax_x1000);
    }

    #[test]
    fn test_millivolt_scaling() {
        assert_eq!(sample_to_millivolts(0), 0);
        assert_eq!(sample_to_millivolts(ADC_MAX), VREF_MV);
        // Midpoint within one LSB of half the rail
        let mid = sample_to_millivolts(512);
        assert!((mid - 2500).abs() <= 5);
    }

    proptest! {
        #[test]
        fn prop_conversion_is_monotonic(sample in 0u16..ADC_MAX) {
            let config = SensorConfig::default();
            let lo = pressure_x1000_from_sample(sample, &config);
            let hi = pressure_x1000_from_sample(sample + 1, &config);
            prop_assert!(lo <= hi);
        }

        #[test]
        fn prop_conversion_stays_near_linear_form(sample in 0u16..=ADC_MAX) {
            let config = SensorConfig::default();
            let got = pressure_x1000_from_sample(sample, &config);
            // Reference value computed in one step at full precision;
            // staged integer division may only lose fractional milliunits
            let v_uv = sample as i64 * 5_000_000 / 1023;
            let want = (v_uv - 500_000) * 1200 / 4_000_000;
            prop_assert!((got as i64 - want).abs() <= 1);
        }
    }
}
