use crate::bus::{Bus, I2c};
use crate::calibration::{CalibrationSet, CalibrationSource, Temperature};
use crate::error::Bmp280Error;
use crate::measurement::Measurement;
use crate::register::data::{DATA_REGISTERS, RawSample};
use crate::register::{BMP280_CHIP_ID, Register};
use crate::SdoPinState;

/// Type alias for a Bmp280 chip communicating over I2C
pub type Bmp280I2c<T> = Bmp280<I2c<T>>;

/// Type alias used to simplify return types throughout the driver
pub type Bmp280Result<T, BusError> = Result<T, Bmp280Error<BusError>>;

/// Main Bmp280 driver struct
pub struct Bmp280<B> {
    bus: B,
    calibration: CalibrationSet,
}

impl<T> Bmp280I2c<T>
where
    T: embedded_hal_async::i2c::I2c,
{
    /// Constructs a new Bmp280 driver instance that communicates over I2C
    ///
    /// No bus traffic happens here. The calibration set is taken from `calibration` once and
    /// kept for the lifetime of the driver.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use embedded_hal_async::i2c::I2c;
    /// # use bmp280_rs::Bmp280Result;
    ///  use bmp280_rs::{Bmp280, SdoPinState};
    ///  use bmp280_rs::calibration::CalibrationSet;
    /// # async fn demo<I: I2c>(i2c: I) -> Bmp280Result<(), I::Error> {
    ///
    ///  let mut device = Bmp280::new_i2c(i2c, SdoPinState::Low, CalibrationSet::REFERENCE);
    ///  let measurement = device.read_measurement().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_i2c(i2c: T, sdo_pin_state: SdoPinState, calibration: impl CalibrationSource) -> Self {
        Self::new(I2c::new(i2c, sdo_pin_state.into()), calibration)
    }
}

impl<B> Bmp280<B>
where
    B: Bus,
{
    pub fn new(bus: B, calibration: impl CalibrationSource) -> Self {
        Self { bus, calibration: calibration.calibration() }
    }

    pub fn calibration(&self) -> &CalibrationSet {
        &self.calibration
    }

    /// Gives back the bus, dropping the driver.
    pub fn release(self) -> B {
        self.bus
    }

    /// Reads a single register: one address write, one byte read.
    pub async fn read_register(&mut self, reg: Register) -> Bmp280Result<u8, B::Error> {
        self.bus.read_register(reg).await.map_err(Bmp280Error::Bus)
    }

    /// Returns true if the CHIP_ID (0xD0) register reads 0x58.
    pub async fn is_connected(&mut self) -> Bmp280Result<bool, B::Error> {
        Ok(self.read_register(Register::ChipId).await? == BMP280_CHIP_ID)
    }

    /// Reads the six data registers (0xF7..=0xFC) one at a time and assembles the 20-bit ADC codes.
    ///
    /// The first failing read aborts the sample; the remaining registers are not touched and
    /// nothing partial is returned.
    pub async fn read_raw_sample(&mut self) -> Bmp280Result<RawSample, B::Error> {
        let mut buffer = [0u8; 6];
        for (byte, reg) in buffer.iter_mut().zip(DATA_REGISTERS) {
            *byte = self.read_register(reg).await?;
        }

        let sample = RawSample::from_registers(&buffer);
        debug!(
            "raw sample: adc_p={=u32} adc_t={=u32}",
            sample.adc_pressure(),
            sample.adc_temperature()
        );

        Ok(sample)
    }

    /// Reads a fresh sample and compensates the temperature only.
    ///
    /// Works even when the pressure coefficients are degenerate.
    pub async fn read_temperature(&mut self) -> Bmp280Result<Temperature, B::Error> {
        let sample = self.read_raw_sample().await?;

        Ok(self.calibration.compensate_temperature(sample.adc_temperature()))
    }

    /// Reads a fresh sample and compensates temperature, then pressure using that temperature.
    ///
    /// If the pressure stage hits a degenerate calibration set, the error still carries this
    /// sample's temperature.
    pub async fn read_measurement(&mut self) -> Bmp280Result<Measurement, B::Error> {
        let sample = self.read_raw_sample().await?;

        let temperature = self.calibration.compensate_temperature(sample.adc_temperature());
        let pressure = self
            .calibration
            .compensate_pressure(sample.adc_pressure(), &temperature)?;

        Ok(Measurement::new(&temperature, pressure))
    }
}
