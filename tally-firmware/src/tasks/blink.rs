//! Status LED blink task
//!
//! Drives the red channel of the status LED from a fixed-rate ticker.
//! Ticker deadlines are absolute, so a late tick does not shift the ones
//! after it.

use defmt::*;
use embassy_time::{Duration, Ticker};

use tally_core::config::BLINK_INTERVAL_MS;
use tally_core::Blinker;
use tally_hal_rp2040::RpOutput;

#[embassy_executor::task]
pub async fn blink_task(red: RpOutput<'static>) {
    info!("Blink task started ({}ms)", BLINK_INTERVAL_MS);

    let mut blinker = Blinker::new(red);
    let mut ticker = Ticker::every(Duration::from_millis(BLINK_INTERVAL_MS));

    loop {
        ticker.next().await;

        if !blinker.on_tick() {
            break;
        }
        trace!("Heartbeat: status LED {}", blinker.is_lit());
    }

    warn!("Blink task stopped");
}
