//! Analog sampling seam.
//!
//! embedded-hal 1.0 has no ADC trait, so the driver samples the MSGEQ7
//! output through [`AnalogInput`]. HAL ADCs plug in with [`from_fn`].

/// A single-channel analog input that yields one unsigned sample per call.
///
/// The sample width is implementation-defined (10-bit on AVR, 12-bit on
/// RP2040/RP2350) and is carried in a `u16`.
pub trait AnalogInput {
    /// Error type for sampling.
    type Error: core::fmt::Debug;

    /// Take one blocking sample.
    fn read_sample(&mut self) -> Result<u16, Self::Error>;
}

/// [`AnalogInput`] backed by a closure. Built by [`from_fn`].
pub struct FromFn<F> {
    f: F,
}

/// Adapt a sampling closure into an [`AnalogInput`].
///
/// ```ignore
/// let input = msgeq7::analog::from_fn(|| adc.blocking_read(&mut channel));
/// ```
pub fn from_fn<F, E>(f: F) -> FromFn<F>
where
    F: FnMut() -> Result<u16, E>,
    E: core::fmt::Debug,
{
    FromFn { f }
}

impl<F, E> AnalogInput for FromFn<F>
where
    F: FnMut() -> Result<u16, E>,
    E: core::fmt::Debug,
{
    type Error = E;

    fn read_sample(&mut self) -> Result<u16, E> {
        (self.f)()
    }
}
