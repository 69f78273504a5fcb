use embedded_hal::i2c::SevenBitAddress;

use crate::register::Register;

/// Single-register access to the sensor.
///
/// Implementations do no retrying and no caching; a transport error is returned untouched.
pub trait Bus {
    type Error;

    /// Reads one byte from `reg`.
    fn read_register(&mut self, reg: Register) -> impl Future<Output = Result<u8, Self::Error>>;
}

/// I2C transport for the BMP280.
///
/// A register read is two separate transactions: a one-byte write of the register address,
/// followed by a one-byte read, both addressed to the sensor.
pub struct I2c<I2cType> {
    i2c: I2cType,
    address: SevenBitAddress,
}

impl<I2cType> I2c<I2cType>
where
    I2cType: embedded_hal_async::i2c::I2c,
{
    pub(crate) fn new(i2c: I2cType, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Gives back the I2C peripheral.
    pub fn release(self) -> I2cType {
        self.i2c
    }
}

impl<I2cType> Bus for I2c<I2cType>
where
    I2cType: embedded_hal_async::i2c::I2c,
{
    type Error = <I2cType as embedded_hal_async::i2c::ErrorType>::Error;

    async fn read_register(&mut self, reg: Register) -> Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.i2c.write(self.address, &[reg.addr()]).await?;
        self.i2c.read(self.address, &mut value).await?;

        Ok(value[0])
    }
}
