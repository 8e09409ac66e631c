//! Button input task
//!
//! Waits on the falling-edge interrupt of both buttons at once and feeds
//! every edge to the input controller, which owns the counter writes.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Instant, Timer};

use tally_core::{normalize, Button, ButtonEvent, EdgeOutcome, InputController};
use tally_hal::EdgeInput;
use tally_hal_rp2040::RpButton;

use crate::channels::{COUNTER, COUNTER_CHANGED};

/// Back-off after a failed edge wait
const EDGE_RETRY_MS: u64 = 10;

#[embassy_executor::task]
pub async fn input_task(mut increment: RpButton<'static>, mut decrement: RpButton<'static>) {
    info!("Input task started");

    let mut controller = InputController::new(&COUNTER);

    loop {
        let (button, edge) = match select(
            increment.wait_for_falling_edge(),
            decrement.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(result) => (Button::Increment, result),
            Either::Second(result) => (Button::Decrement, result),
        };

        if let Err(e) = edge {
            warn!("Edge wait failed on {:?}: {:?}", button, e);
            Timer::after_millis(EDGE_RETRY_MS).await;
            continue;
        }

        // Sampled when this task resumes after the edge, not in the interrupt itself
        let event = ButtonEvent {
            button,
            at_us: Instant::now().as_micros(),
        };

        match controller.on_edge(event) {
            EdgeOutcome::Accepted(value) => {
                info!("{:?}: counter={} digit={}", button, value, normalize(value));
                COUNTER_CHANGED.signal(value);
            }
            EdgeOutcome::Debounced => {
                debug!("{:?}: edge debounced at {}us", button, event.at_us);
            }
        }
    }
}
