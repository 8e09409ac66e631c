//! Tally - 5x5 Digit Counter Firmware
//!
//! Main firmware binary for RP2040 boards with a 5x5 WS2812 matrix.
//! Two push buttons step a shared counter; the matrix shows the counter
//! modulo 10 and a status LED blinks to show the firmware is alive.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::Pio;
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use tally_core::config::IDLE_MS;
use tally_core::MatrixRenderer;
use tally_hal_rp2040::{PioPixelOutput, RpButton, RpOutput};

use crate::channels::{COUNTER, COUNTER_CHANGED};

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tally firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Status LED: red blinks, green and blue stay dark
    let status_red = RpOutput::new_low(p.PIN_11);
    let _status_green = RpOutput::new_low(p.PIN_12);
    let _status_blue = RpOutput::new_low(p.PIN_13);

    // Buttons are wired to ground
    let increment = RpButton::new_pull_up(p.PIN_5);
    let decrement = RpButton::new_pull_up(p.PIN_6);

    // Matrix data line on PIO0 state machine 0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let pixels = PioPixelOutput::new(&mut common, sm0, p.PIN_7);
    let mut renderer = MatrixRenderer::new(pixels, Delay);
    info!("Matrix output ready on GPIO7");

    unwrap!(spawner.spawn(tasks::input_task(increment, decrement)));
    unwrap!(spawner.spawn(tasks::blink_task(status_red)));
    info!("Tasks spawned");

    loop {
        let previous = renderer.last_digit();
        renderer.render(COUNTER.get()).await;

        if renderer.last_digit() != previous {
            if let Some(digit) = renderer.last_digit() {
                info!("Showing digit {}", digit);
            }
        }

        // A press cuts the idle short so the new digit shows at once
        if let Either::Second(value) =
            select(Timer::after_millis(IDLE_MS), COUNTER_CHANGED.wait()).await
        {
            trace!("Woken by counter change ({})", value);
        }
    }
}
