//! MSGEQ7 device driver module.
//!
//! Provides [`Msgeq7`], which owns the reset pin, strobe pin, analog input
//! and delay provider of one MSGEQ7 and buffers the seven band readings of
//! the last completed scan.

mod msgeq7;

pub use msgeq7::{DeviceError, Error, Msgeq7};

#[cfg(test)]
mod mock;
