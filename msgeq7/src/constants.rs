/// Number of frequency bands reported by the MSGEQ7.
pub const MAX_BANDS: usize = 7;

/// Reset pulse width in µs. The datasheet minimum is 100 ns.
pub const RESET_PULSE_US: u32 = 1;

/// Minimum strobe high time in µs.
pub const STROBE_HIGH_US: u32 = 18;

/// Output settle time after strobe falls, in µs.
pub const SETTLE_US: u32 = 36;

/// Gap after sampling before the next strobe, in µs.
pub const STROBE_GAP_US: u32 = 18;
