//! Embassy peripheral adapters
//!
//! Thin newtypes bridging embassy-rp peripherals to the barostat-core
//! traits, plus the concrete driver type aliases the tasks take.

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};

use barostat_core::traits::{InputPin, OutputPin};
use barostat_drivers::display::MuxDisplay;
use barostat_drivers::pump::{GpioRelay, HysteresisController};
use barostat_drivers::sensor::{AdcReader, Transducer};

/// Transducer ADC channel read with blocking conversions
pub struct AdcInput {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl AdcInput {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for AdcInput {
    fn read(&mut self) -> Result<u16, ()> {
        // RP2040 conversions are 12-bit; the transducer contract is 10
        self.adc
            .blocking_read(&mut self.channel)
            .map(|raw| raw >> 2)
            .map_err(|_| ())
    }
}

/// Push-pull output line
pub struct OutLine(pub Output<'static>);

impl OutputPin for OutLine {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input line
pub struct InLine(pub Input<'static>);

impl InputPin for InLine {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// The pump controller as wired on this board
pub type PumpControl = HysteresisController<Transducer<AdcInput>, GpioRelay<OutLine>, InLine>;

/// The front-panel display as wired on this board
pub type FrontPanel = MuxDisplay<OutLine, OutLine, OutLine>;
