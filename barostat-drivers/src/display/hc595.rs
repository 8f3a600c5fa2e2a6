//! 74HC595 shift-register display driver
//!
//! The display board carries two cascaded 595s behind a three-wire bus
//! (serial data, shift clock, register latch). Per digit, the segment
//! byte is shifted first and lands in the far register; the one-hot
//! digit-select byte follows into the near register; one latch pulse
//! then commits both to the parallel outputs. Only one digit is lit at
//! any instant - rapid cycling plus persistence of vision makes all
//! four appear steady.

use barostat_core::display::{DisplayFrame, DIGIT_COUNT};
use barostat_core::traits::OutputPin;

/// One-hot digit-select patterns, slot 0 through slot 3
pub const DIGIT_SELECT: [u8; DIGIT_COUNT] = [0x01, 0x02, 0x04, 0x08];

/// Three-wire serial link to the cascaded shift registers
pub struct Hc595Link<D, C, L> {
    data: D,
    clock: C,
    latch: L,
}

impl<D: OutputPin, C: OutputPin, L: OutputPin> Hc595Link<D, C, L> {
    /// Create a new link over the data, shift-clock and latch pins
    pub fn new(data: D, clock: C, latch: L) -> Self {
        Self { data, clock, latch }
    }

    /// Shift one byte onto the chain, most significant bit first
    pub fn shift_out(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.data.set_state(byte & (1 << bit) != 0);
            self.clock.set_low();
            self.clock.set_high();
        }
    }

    /// Pulse the latch line to commit the shifted bits to the outputs
    pub fn pulse_latch(&mut self) {
        self.latch.set_low();
        self.latch.set_high();
    }
}

/// Multiplexed 4-digit display behind an [`Hc595Link`]
pub struct MuxDisplay<D, C, L> {
    link: Hc595Link<D, C, L>,
    cursor: usize,
}

impl<D: OutputPin, C: OutputPin, L: OutputPin> MuxDisplay<D, C, L> {
    /// Create a new multiplexer over a shift-register link
    pub fn new(link: Hc595Link<D, C, L>) -> Self {
        Self { link, cursor: 0 }
    }

    /// Light one digit: segment byte, select byte, latch
    pub fn write_digit(&mut self, slot: usize, code: u8) {
        self.link.shift_out(code);
        self.link.shift_out(DIGIT_SELECT[slot]);
        self.link.pulse_latch();
    }

    /// One full multiplexing pass over the frame, slot 0 through slot 3
    pub fn refresh(&mut self, frame: &DisplayFrame) {
        for slot in 0..DIGIT_COUNT {
            self.write_digit(slot, frame.slot(slot));
        }
    }

    /// Light the next digit and advance the cursor
    ///
    /// This is the unit of work of the refresh task: calling it on a
    /// timer tick sets the digit rate from real elapsed time instead of
    /// an iteration count.
    pub fn step(&mut self, frame: &DisplayFrame) {
        self.write_digit(self.cursor, frame.slot(self.cursor));
        self.cursor = (self.cursor + 1) % DIGIT_COUNT;
    }
}
