//! BMP280 register map (Bosch Sensortec BMP280 datasheet, section 4.2).
//!
//! Only the registers the driver touches are listed. Every access is a single byte: the address
//! is written, then one byte is read back.

pub mod data;

/// Chip identification code, always 0x58 for a BMP280.
pub const BMP280_CHIP_ID: u8 = 0x58;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// CHIP_ID (0xD0)
    ChipId = 0xD0,
    /// press_msb (0xF7), bits 19:12 of the raw pressure
    PressMsb = 0xF7,
    /// press_lsb (0xF8), bits 11:4 of the raw pressure
    PressLsb = 0xF8,
    /// press_xlsb (0xF9), bits 3:0 of the raw pressure in the upper nibble
    PressXlsb = 0xF9,
    /// temp_msb (0xFA), bits 19:12 of the raw temperature
    TempMsb = 0xFA,
    /// temp_lsb (0xFB), bits 11:4 of the raw temperature
    TempLsb = 0xFB,
    /// temp_xlsb (0xFC), bits 3:0 of the raw temperature in the upper nibble
    TempXlsb = 0xFC,
}

impl Register {
    pub const fn addr(self) -> u8 {
        self as u8
    }
}
