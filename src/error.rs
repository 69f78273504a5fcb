//! Errors that can occur when sampling the BMP280.
//!
//! The error type is generic over the error type of the underlying I2C driver, which is carried
//! through untouched so callers can inspect it.

use core::fmt::{Debug, Display, Formatter};

use crate::calibration::DegenerateCalibration;

/// This represents all possible errors that can occur when reading from the BMP280.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bmp280Error<BusError> {
    /// An error has occurred in the I2C driver (device absent, NACK, bus fault...).
    ///
    /// The driver never retries. The error is handed back exactly as the transport reported it.
    Bus(BusError),

    /// The calibration set yields a zero denominator in the pressure compensation formula.
    ///
    /// This is not transient. Retrying with the same calibration set will fail again, the set
    /// itself has to be rejected. Temperature compensation is unaffected: the temperature of the
    /// failed cycle is available through [`DegenerateCalibration::temperature`].
    DegenerateCalibration(DegenerateCalibration),
}

impl<BusError> From<DegenerateCalibration> for Bmp280Error<BusError> {
    fn from(e: DegenerateCalibration) -> Self {
        Bmp280Error::DegenerateCalibration(e)
    }
}

impl<BusError: Debug> Display for Bmp280Error<BusError> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Bmp280Error::Bus(e) => write!(f, "bus transaction failed: {e:?}"),
            Bmp280Error::DegenerateCalibration(e) => write!(
                f,
                "calibration set yields a zero pressure denominator (temperature {} °C)",
                e.temperature().celsius()
            ),
        }
    }
}

impl<BusError: Debug> core::error::Error for Bmp280Error<BusError> {}
