//! Barostat - Pump Pressure Controller Firmware
//!
//! Main firmware binary for RP2040-based pump controllers. Samples a
//! ratiometric pressure transducer, drives the pump relay with
//! two-threshold hysteresis gated by a flow-switch interlock, and
//! reports the measured pressure on a 4-digit multiplexed 7-segment
//! display behind cascaded 74HC595 shift registers.
//!
//! Named after the Greek "baros" meaning "weight, pressure" - a
//! barostat holds pressure inside a fixed band.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use barostat_core::config::{ControlConfig, DisplayConfig, SensorConfig};
use barostat_drivers::display::{Hc595Link, MuxDisplay};
use barostat_drivers::pump::{GpioRelay, HysteresisController};
use barostat_drivers::sensor::Transducer;

use crate::hw::{AdcInput, InLine, OutLine};

mod channels;
mod hw;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Barostat firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Transducer on ADC0 (GPIO26), blocking conversions
    let adc = Adc::new_blocking(p.ADC, embassy_rp::adc::Config::default());
    let sensor_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let sensor = Transducer::new(AdcInput::new(adc, sensor_channel), SensorConfig::default());

    // Flow switch is active-high, read against the internal pull-up
    let flow = InLine(Input::new(p.PIN_2, Pull::Up));

    // Pump relay module, energized high
    let relay = GpioRelay::new_active_high(OutLine(Output::new(p.PIN_3, Level::Low)));

    let controller = HysteresisController::new(sensor, relay, flow, ControlConfig::default());
    info!("ADC and pump controller initialized");

    // Display bus: serial data, shift clock, register latch
    let link = Hc595Link::new(
        OutLine(Output::new(p.PIN_4, Level::Low)),
        OutLine(Output::new(p.PIN_5, Level::Low)),
        OutLine(Output::new(p.PIN_6, Level::Low)),
    );
    let display = MuxDisplay::new(link);
    info!("Display bus initialized");

    // Spawn tasks
    spawner
        .spawn(tasks::control_task(controller, ControlConfig::default()))
        .unwrap();
    spawner
        .spawn(tasks::display_task(display, DisplayConfig::default()))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
