//! # msgeq7
//!
//! A `no_std`, zero-allocation driver for the
//! [MSGEQ7](https://www.sparkfun.com/datasheets/Components/General/MSGEQ7.pdf)
//! seven-band graphic equalizer IC. The chip is driven with two digital
//! outputs (reset, strobe) and one analog input that carries the amplitude of
//! the currently selected band.
//!
//! ## Architecture
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`device`] | [`Msgeq7`] driver: reset pulse, 7-band strobe scan, buffered readings |
//! | [`timing`] | Datasheet pulse widths, lengthenable but never shortened |
//! | [`band`] | Typed band index with centre frequencies |
//! | [`analog`] | [`AnalogInput`](analog::AnalogInput) seam for the sampling ADC |
//! | [`constants`] | Band count and datasheet timing minimums |
//!
//! ## Quick start
//!
//! ```ignore
//! use msgeq7::{analog, Band, Msgeq7};
//!
//! let adc_in = analog::from_fn(|| adc.blocking_read(&mut a0));
//! let mut eq = Msgeq7::new(reset_pin, strobe_pin, adc_in, delay)?;
//!
//! loop {
//!     eq.read(false)?;
//!     let bass = eq.band(Band::Hz63);
//!     let treble = eq.get(6);
//! }
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `defmt` | no | `defmt` trace logging and `defmt::Format` on public types |
//!
//! ## Timing
//!
//! - **Reset pulse:** 1 µs (datasheet minimum 100 ns)
//! - **Strobe high:** 18 µs, **settle:** 36 µs, **gap:** 18 µs
//! - **Full scan:** 7 × 72 µs = 504 µs, blocking

#![no_std]

#[macro_use]
mod log;

pub mod analog;
pub mod band;
pub mod constants;
pub mod device;
pub mod timing;

pub use band::Band;
pub use constants::MAX_BANDS;
pub use device::{DeviceError, Error, Msgeq7};
pub use timing::Timing;
