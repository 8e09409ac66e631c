//! PIO-based one-wire LED encoder
//!
//! Uses one RP2040 PIO state machine to serialize pixel words into the
//! WS2812 pulse train, so bit timing does not depend on the CPU.
//!
//! # Architecture
//!
//! The state machine pulls 24-bit words from a TX-only (8-deep) FIFO with
//! autopull, shifting left so the MSB goes first. Each bit takes
//! T1 + T2 + T3 = 10 PIO cycles; the clock divider is set so that is one
//! 800 kHz bit cell. When the FIFO runs dry the program stalls on `out`
//! with the side-set pin low, which is the latch condition.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use fixed::types::U24F8;

use tally_core::config::{BITS_PER_PIXEL, T1_CYCLES, T2_CYCLES, T3_CYCLES};
use tally_core::protocol::{clock_divider, fifo_word};
use tally_core::{Color, PixelSink};

// The delays in the program below are written as (T - 1) literals
const _: () = assert!(T1_CYCLES == 2 && T2_CYCLES == 5 && T3_CYCLES == 3);

/// PIO WS2812 encoder
pub struct PioPixelOutput<'d, PIO: Instance, const SM: usize> {
    /// PIO state machine running the bit program
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> PioPixelOutput<'d, PIO, SM> {
    /// Create the encoder and start the state machine
    ///
    /// # Arguments
    /// * `common` - PIO common resources (for loading program)
    /// * `sm` - State machine to use
    /// * `data_pin` - GPIO pin driving the LED chain (must be PIO-capable)
    pub fn new<DATA: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        data_pin: Peri<'d, DATA>,
    ) -> Self {
        // Side-set drives the data line; X holds the current bit
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1        side 0 [2]", // T3: low tail of previous bit, fetch bit
            "    jmp !x do_zero  side 1 [1]", // T1: every bit starts high
            "do_one:",
            "    jmp bitloop     side 1 [4]", // T2: stay high for a one
            "do_zero:",
            "    nop             side 0 [4]", // T2: drop low for a zero
            ".wrap"
        );

        let installed = common.load_program(&prg.program);

        let data_pio_pin = common.make_pio_pin(data_pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&data_pio_pin]);
        cfg.set_out_pins(&[&data_pio_pin]);

        let (int_div, frac_div) = clock_divider(clk_sys_freq());
        // U24F8: integer in upper 24 bits, fractional in lower 8 bits
        cfg.clock_divider = U24F8::from_bits(((int_div as u32) << 8) | (frac_div as u32));

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_PIXEL as u8,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&data_pio_pin]);
        sm.set_enable(true);

        Self { sm }
    }
}

impl<PIO: Instance, const SM: usize> PixelSink for PioPixelOutput<'_, PIO, SM> {
    async fn emit(&mut self, color: Color) {
        // Waits while the FIFO is full
        self.sm.tx().wait_push(fifo_word(color)).await;
    }
}
