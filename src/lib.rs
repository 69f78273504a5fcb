//! Async `no_std` driver for the Bosch BMP280 barometric pressure sensor.
//!
//! The driver reads the six data registers over I2C, assembles the two 20-bit ADC codes and runs
//! the datasheet's fixed-point compensation to get °C and Pa. [`sampler::Sampler`] wraps that in
//! a periodic read-compute-report loop.
//!
//! Calibration coefficients are an input: pass [`calibration::CalibrationSet::REFERENCE`], your
//! own table, or a captured [`calibration::NvmImage`].
//!
//! Enable the `defmt` feature for logging and `defmt::Format` on public types, and `uom` for typed
//! physical quantities.
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

mod bmp280;
pub mod bus;
pub mod calibration;
pub mod config;
pub mod error;
mod measurement;
pub mod register;
pub mod sampler;

#[cfg(test)]
mod testing;

pub use bmp280::{Bmp280, Bmp280I2c, Bmp280Result};
pub use error::Bmp280Error;
pub use measurement::Measurement;

use embedded_hal::i2c::SevenBitAddress;

/// State of the SDO pin, which selects the I2C address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SdoPinState {
    /// SDO connected to GND, address 0x76
    Low,
    /// SDO connected to VDDIO, address 0x77
    High,
}

impl From<SdoPinState> for SevenBitAddress {
    fn from(state: SdoPinState) -> Self {
        match state {
            SdoPinState::Low => 0x76,
            SdoPinState::High => 0x77,
        }
    }
}
