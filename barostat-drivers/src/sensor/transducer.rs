//! Ratiometric pressure transducer
//!
//! Common 0.5V-4.5V three-wire transducer read through a 10-bit ADC
//! referenced to the supply rail. The linear conversion itself lives in
//! barostat-core; this driver owns the ADC channel and classifies faults
//! before handing a reading to the controller.

use barostat_core::config::SensorConfig;
use barostat_core::pressure::{millivolts_to_pressure_x1000, sample_to_millivolts, ADC_MAX};
use barostat_core::traits::{PressureSensor, SensorError};

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read one blocking conversion (10-bit, 0-1023)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Samples this close to either rail are treated as a wiring fault
/// rather than a pressure reading
const RAIL_MARGIN: u16 = 8;

/// Ratiometric pressure transducer on an ADC channel
pub struct Transducer<ADC> {
    adc: ADC,
    config: SensorConfig,
}

impl<ADC> Transducer<ADC> {
    /// Create a new transducer reader
    ///
    /// # Arguments
    /// - `adc`: ADC channel the transducer signal is wired to
    /// - `config`: calibration band and full-scale pressure
    pub fn new(adc: ADC, config: SensorConfig) -> Self {
        Self { adc, config }
    }

    /// Classify a raw sample, returning its voltage if it is usable
    ///
    /// A sample pinned at either rail means the signal wire is shorted or
    /// floating; a voltage outside the calibrated band (plus tolerance)
    /// means the transducer is present but out of its operating range.
    pub fn sample_to_band_millivolts(&self, sample: u16) -> Result<i32, SensorError> {
        if sample < RAIL_MARGIN {
            return Err(SensorError::ShortCircuit);
        }
        if sample > ADC_MAX - RAIL_MARGIN {
            return Err(SensorError::OpenCircuit);
        }

        let v_mv = sample_to_millivolts(sample);
        if v_mv < self.config.vmin_mv - self.config.band_tolerance_mv
            || v_mv > self.config.vmax_mv + self.config.band_tolerance_mv
        {
            return Err(SensorError::OutOfRange);
        }

        Ok(v_mv)
    }
}

impl<ADC: AdcReader> PressureSensor for Transducer<ADC> {
    fn read_pressure_x1000(&mut self) -> Result<i32, SensorError> {
        let sample = self.adc.read().map_err(|_| SensorError::ConversionError)?;
        let v_mv = self.sample_to_band_millivolts(sample)?;
        Ok(millivolts_to_pressure_x1000(v_mv, &self.config))
    }
}

/// Dummy ADC for testing (returns a fixed value)
#[cfg(test)]
pub struct DummyAdc(pub u16);

#[cfg(test)]
impl AdcReader for DummyAdc {
    fn read(&mut self) -> Result<u16, ()> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transducer(sample: u16) -> Transducer<DummyAdc> {
        Transducer::new(DummyAdc(sample), SensorConfig::default())
    }

    #[test]
    fn test_in_band_reading() {
        // 1.22V -> ~0.216 pressure units
        let mut sensor = transducer(250);
        let pressure = sensor.read_pressure_x1000().unwrap();
        assert!((200..240).contains(&pressure));
    }

    #[test]
    fn test_slightly_below_zero_passes_through() {
        // Just under V_MIN but inside the tolerance band: raw negative
        // value, not a fault
        let mut sensor = transducer(95);
        let pressure = sensor.read_pressure_x1000().unwrap();
        assert!(pressure < 0);
    }

    #[test]
    fn test_rail_low_is_short_circuit() {
        let mut sensor = transducer(3);
        assert_eq!(
            sensor.read_pressure_x1000(),
            Err(SensorError::ShortCircuit)
        );
    }

    #[test]
    fn test_rail_high_is_open_circuit() {
        let mut sensor = transducer(1020);
        assert_eq!(sensor.read_pressure_x1000(), Err(SensorError::OpenCircuit));
    }

    #[test]
    fn test_below_band_is_out_of_range() {
        // ~0.1V: clearly off the rail but far below the calibrated band
        let mut sensor = transducer(20);
        assert_eq!(sensor.read_pressure_x1000(), Err(SensorError::OutOfRange));
    }

    #[test]
    fn test_above_band_is_out_of_range() {
        // ~4.9V: above V_MAX plus tolerance
        let mut sensor = transducer(1000);
        assert_eq!(sensor.read_pressure_x1000(), Err(SensorError::OutOfRange));
    }

    #[test]
    fn test_is_valid_helper() {
        assert!(transducer(500).is_valid());
        assert!(!transducer(3).is_valid());
    }
}
