//! The seven MSGEQ7 frequency bands.

use crate::constants::MAX_BANDS;

/// One MSGEQ7 band, named by its centre frequency.
///
/// Discriminants are the scan order: the chip presents band 0 after a reset
/// and advances by one on every strobe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    /// 63 Hz.
    Hz63 = 0,
    /// 160 Hz.
    Hz160 = 1,
    /// 400 Hz.
    Hz400 = 2,
    /// 1 kHz.
    Khz1 = 3,
    /// 2.5 kHz.
    Khz2_5 = 4,
    /// 6.25 kHz.
    Khz6_25 = 5,
    /// 16 kHz.
    Khz16 = 6,
}

impl Band {
    /// All bands, low to high, in scan order.
    pub const ALL: [Band; MAX_BANDS] = [
        Band::Hz63,
        Band::Hz160,
        Band::Hz400,
        Band::Khz1,
        Band::Khz2_5,
        Band::Khz6_25,
        Band::Khz16,
    ];

    /// Buffer index of this band (0–6).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Band for a buffer index, or `None` past the last band.
    pub const fn from_index(index: usize) -> Option<Band> {
        if index < MAX_BANDS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Centre frequency in Hz.
    pub const fn center_hz(self) -> u32 {
        match self {
            Band::Hz63 => 63,
            Band::Hz160 => 160,
            Band::Hz400 => 400,
            Band::Khz1 => 1_000,
            Band::Khz2_5 => 2_500,
            Band::Khz6_25 => 6_250,
            Band::Khz16 => 16_000,
        }
    }
}
