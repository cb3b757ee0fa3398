//! MSGEQ7 driver.
//!
//! The driver is generic over two [`embedded_hal::digital::OutputPin`]s
//! (reset, strobe), an [`AnalogInput`] wired to the chip's OUT pin, and an
//! [`embedded_hal::delay::DelayNs`] provider for the datasheet pulse widths.
//! The two pins may come from different HALs (a native GPIO and an I/O
//! expander pin, say); each keeps its own error type.
//!
//! # Example
//!
//! ```ignore
//! let mut eq = Msgeq7::new(reset, strobe, analog, delay)?; // pulses reset
//! eq.read(false)?;                                         // ~504 µs, blocking
//! let bass = eq.get(0);
//! ```

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::analog::AnalogInput;
use crate::band::Band;
use crate::constants::MAX_BANDS;
use crate::timing::Timing;

// ── Errors ─────────────────────────────────────────────────────────────────

/// Collaborator error passed through by the driver.
///
/// The driver has no failure modes of its own. With `Infallible` pins and
/// ADC these variants cannot occur.
///
/// When a pulse's falling edge fails, the driver retries `set_low` once
/// before returning. If the retry fails too the line is left high: a stuck
/// reset holds the chip in reset, a stuck strobe freezes its band counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<RE, SE, AE> {
    /// Writing the reset pin failed.
    Reset(RE),
    /// Writing the strobe pin failed.
    Strobe(SE),
    /// Sampling the analog input failed.
    Analog(AE),
}

impl<RE: fmt::Debug, SE: fmt::Debug, AE: fmt::Debug> fmt::Display for Error<RE, SE, AE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Reset(e) => write!(f, "reset pin write failed: {:?}", e),
            Error::Strobe(e) => write!(f, "strobe pin write failed: {:?}", e),
            Error::Analog(e) => write!(f, "analog read failed: {:?}", e),
        }
    }
}

/// Shorthand for the driver's error over its collaborators.
pub type DeviceError<RST, STB, ANA> = Error<
    <RST as embedded_hal::digital::ErrorType>::Error,
    <STB as embedded_hal::digital::ErrorType>::Error,
    <ANA as AnalogInput>::Error,
>;

/// Drive `pin` low, retrying once on failure. Returns the first error.
fn drive_low<P: OutputPin>(pin: &mut P) -> Result<(), P::Error> {
    pin.set_low().or_else(|e| {
        let _ = pin.set_low();
        Err(e)
    })
}

// ── Driver struct ──────────────────────────────────────────────────────────

/// MSGEQ7 seven-band graphic equalizer driver.
///
/// Owns its pins, so one physical chip is driven by exactly one value.
/// Not `Clone`; use [`release()`](Self::release) to get the peripherals back.
pub struct Msgeq7<RST, STB, ANA, D> {
    reset_pin: RST,
    strobe_pin: STB,
    analog: ANA,
    delay: D,
    timing: Timing,
    /// Band readings from the last completed scan, low to high.
    data: [u16; MAX_BANDS],
}

impl<RST, STB, ANA, D> Msgeq7<RST, STB, ANA, D>
where
    RST: OutputPin,
    STB: OutputPin,
    ANA: AnalogInput,
    D: DelayNs,
{
    /// Number of bands per scan.
    pub const MAX_BANDS: usize = MAX_BANDS;

    /// Take ownership of the pins and pulse reset once, using datasheet
    /// timing.
    ///
    /// The pins must already be configured as outputs and the analog input
    /// as an input; HAL pin types carry that mode.
    pub fn new(
        reset: RST,
        strobe: STB,
        analog: ANA,
        delay: D,
    ) -> Result<Self, DeviceError<RST, STB, ANA>> {
        Self::new_with_timing(reset, strobe, analog, delay, Timing::DATASHEET)
    }

    /// Like [`new()`](Self::new) with custom (longer) pulse widths.
    pub fn new_with_timing(
        reset: RST,
        strobe: STB,
        analog: ANA,
        delay: D,
        timing: Timing,
    ) -> Result<Self, DeviceError<RST, STB, ANA>> {
        let mut dev = Self {
            reset_pin: reset,
            strobe_pin: strobe,
            analog,
            delay,
            timing,
            data: [0; MAX_BANDS],
        };
        debug!("msgeq7: init, scan {=u32} us", timing.scan_us());
        dev.reset()?;
        Ok(dev)
    }

    /// Pulse the reset line, returning the chip's band counter to band 0.
    pub fn reset(&mut self) -> Result<(), DeviceError<RST, STB, ANA>> {
        // Datasheet minimum is 100 ns active high
        self.reset_pin.set_high().map_err(Error::Reset)?;
        self.delay.delay_us(self.timing.reset_pulse_us());
        drive_low(&mut self.reset_pin).map_err(Error::Reset)?;
        trace!("msgeq7: reset");
        Ok(())
    }

    /// Scan all seven bands into the buffer, optionally resetting first.
    ///
    /// Without a reset the chip's own band counter decides where the scan
    /// starts; after seven strobes it wraps back to band 0, so continuous
    /// polling stays aligned.
    ///
    /// Blocks for [`Timing::scan_us()`] (504 µs by default). On error the
    /// buffer keeps the previous scan.
    pub fn read(&mut self, should_reset: bool) -> Result<(), DeviceError<RST, STB, ANA>> {
        if should_reset {
            self.reset()?;
        }

        let mut scan = [0u16; MAX_BANDS];
        for slot in scan.iter_mut() {
            self.strobe_pin.set_high().map_err(Error::Strobe)?;
            self.delay.delay_us(self.timing.strobe_high_us());
            drive_low(&mut self.strobe_pin).map_err(Error::Strobe)?;
            self.delay.delay_us(self.timing.settle_us());
            *slot = self.analog.read_sample().map_err(Error::Analog)?;
            self.delay.delay_us(self.timing.strobe_gap_us());
        }
        self.data = scan;

        trace!("msgeq7: scan {=[?]}", &self.data[..]);
        Ok(())
    }
}

impl<RST, STB, ANA, D> Msgeq7<RST, STB, ANA, D> {
    /// Reading for `channel` (0–6) from the last scan.
    ///
    /// Returns 0 for any channel past the last band, which cannot be told
    /// apart from a silent band.
    pub fn get(&self, channel: usize) -> u16 {
        self.data.get(channel).copied().unwrap_or(0)
    }

    /// Reading for `band` from the last scan.
    pub fn band(&self, band: Band) -> u16 {
        self.data[band.index()]
    }

    /// All seven readings from the last scan, low to high.
    pub fn bands(&self) -> &[u16; MAX_BANDS] {
        &self.data
    }

    /// Pulse widths in use.
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Release the pins, analog input and delay.
    pub fn release(self) -> (RST, STB, ANA, D) {
        (self.reset_pin, self.strobe_pin, self.analog, self.delay)
    }
}
