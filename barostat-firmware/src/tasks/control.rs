//! Pump control task
//!
//! Samples the transducer and runs the hysteresis controller at a slow,
//! human-relevant rate, then publishes the rendered pressure for the
//! display task. Relay settle delays block only this task; the display
//! keeps refreshing while the relay settles.

use defmt::*;
use embassy_time::{Duration, Ticker, Timer};

use barostat_core::config::ControlConfig;
use barostat_core::display::{render, render_pressure, FAULT_TEXT};
use barostat_core::traits::PumpController;

use crate::channels::DISPLAY_FRAME;
use crate::hw::PumpControl;

/// Pump control task
///
/// One tick: update the controller, render the reading (or the fault
/// pattern), publish the frame, then settle if the relay switched.
#[embassy_executor::task]
pub async fn control_task(mut controller: PumpControl, config: ControlConfig) {
    info!("Control task started");

    let mut ticker = Ticker::every(Duration::from_millis(config.tick_ms as u64));

    loop {
        let previous = controller.state();

        let frame = match controller.update() {
            Ok(pressure_x1000) => {
                trace!("pressure: {} milliunits", pressure_x1000);
                render_pressure(pressure_x1000)
            }
            Err(e) => {
                // Controller has already forced the pump off
                warn!("Pressure sensor fault: {:?}", e);
                render(FAULT_TEXT)
            }
        };

        *DISPLAY_FRAME.lock().await = frame;

        let state = controller.state();
        if state != previous {
            info!("Pump switched {}", if state.is_on() { "on" } else { "off" });
            let settle_ms = if state.is_on() {
                config.on_settle_ms
            } else {
                config.off_settle_ms
            };
            Timer::after_millis(settle_ms as u64).await;
        }

        ticker.next().await;
    }
}
