//! Display refresh task
//!
//! Lights one digit per tick. The digit rate comes from a real timer,
//! so the refresh rate is independent of CPU speed and of whatever the
//! control task is doing.

use defmt::*;
use embassy_time::{Duration, Ticker};

use barostat_core::config::DisplayConfig;

use crate::channels::DISPLAY_FRAME;
use crate::hw::FrontPanel;

/// Display refresh task
#[embassy_executor::task]
pub async fn display_task(mut display: FrontPanel, config: DisplayConfig) {
    info!("Display refresh task started");

    let mut ticker = Ticker::every(Duration::from_micros(config.digit_period_us as u64));

    loop {
        // Copy the frame out so the bus is never bit-banged under the lock
        let frame = *DISPLAY_FRAME.lock().await;
        display.step(&frame);

        ticker.next().await;
    }
}
