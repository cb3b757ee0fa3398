//! Strobe and reset pulse widths.
//!
//! The defaults are the MSGEQ7 datasheet values. Every setter clamps up to
//! the datasheet minimum: a width can be stretched for slow ADCs or long
//! wiring, but never shortened below what the chip requires.

use crate::constants::{MAX_BANDS, RESET_PULSE_US, SETTLE_US, STROBE_GAP_US, STROBE_HIGH_US};

/// Pulse widths used by the driver, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    reset_pulse_us: u32,
    strobe_high_us: u32,
    settle_us: u32,
    strobe_gap_us: u32,
}

impl Timing {
    /// Datasheet timing: 1 µs reset, 18 µs strobe, 36 µs settle, 18 µs gap.
    pub const DATASHEET: Timing = Timing {
        reset_pulse_us: RESET_PULSE_US,
        strobe_high_us: STROBE_HIGH_US,
        settle_us: SETTLE_US,
        strobe_gap_us: STROBE_GAP_US,
    };

    /// Set the reset pulse width (min 1 µs).
    pub const fn with_reset_pulse_us(mut self, us: u32) -> Self {
        self.reset_pulse_us = max(us, RESET_PULSE_US);
        self
    }

    /// Set the strobe high time (min 18 µs).
    pub const fn with_strobe_high_us(mut self, us: u32) -> Self {
        self.strobe_high_us = max(us, STROBE_HIGH_US);
        self
    }

    /// Set the settle time between strobe falling and sampling (min 36 µs).
    pub const fn with_settle_us(mut self, us: u32) -> Self {
        self.settle_us = max(us, SETTLE_US);
        self
    }

    /// Set the gap between sampling and the next strobe (min 18 µs).
    pub const fn with_strobe_gap_us(mut self, us: u32) -> Self {
        self.strobe_gap_us = max(us, STROBE_GAP_US);
        self
    }

    /// Reset pulse width in µs.
    pub const fn reset_pulse_us(&self) -> u32 {
        self.reset_pulse_us
    }

    /// Strobe high time in µs.
    pub const fn strobe_high_us(&self) -> u32 {
        self.strobe_high_us
    }

    /// Settle time before sampling, in µs.
    pub const fn settle_us(&self) -> u32 {
        self.settle_us
    }

    /// Gap between sampling and the next strobe, in µs.
    pub const fn strobe_gap_us(&self) -> u32 {
        self.strobe_gap_us
    }

    /// Strobe-to-strobe period for one band (72 µs by default).
    pub const fn cycle_us(&self) -> u32 {
        self.strobe_high_us
            .saturating_add(self.settle_us)
            .saturating_add(self.strobe_gap_us)
    }

    /// Minimum blocking time of one full scan, excluding any reset (504 µs
    /// by default).
    pub const fn scan_us(&self) -> u32 {
        self.cycle_us().saturating_mul(MAX_BANDS as u32)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DATASHEET
    }
}

// `Ord::max` is not const.
const fn max(a: u32, b: u32) -> u32 {
    if a > b {
        a
    } else {
        b
    }
}
