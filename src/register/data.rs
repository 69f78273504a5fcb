use crate::register::Register;

/// The six data registers in the order they are read: pressure first, then temperature.
pub(crate) const DATA_REGISTERS: [Register; 6] = [
    Register::PressMsb,
    Register::PressLsb,
    Register::PressXlsb,
    Register::TempMsb,
    Register::TempLsb,
    Register::TempXlsb,
];

/// Uncompensated ADC codes from one sampling cycle.
///
/// Both values are 20-bit unsigned. Use [`CalibrationSet`](crate::calibration::CalibrationSet) to
/// turn them into physical units.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    adc_pressure: u32,
    adc_temperature: u32,
}

impl RawSample {
    pub fn new(adc_pressure: u32, adc_temperature: u32) -> Self {
        Self { adc_pressure, adc_temperature }
    }

    /// Builds a sample from the bytes of registers 0xF7..=0xFC, in address order.
    pub fn from_registers(b: &[u8; 6]) -> Self {
        Self::new(assemble_20bit(b[0], b[1], b[2]), assemble_20bit(b[3], b[4], b[5]))
    }

    /// Returns the raw uncompensated pressure from press_msb, press_lsb and press_xlsb
    pub fn adc_pressure(&self) -> u32 { self.adc_pressure }

    /// Returns the raw uncompensated temperature from temp_msb, temp_lsb and temp_xlsb
    pub fn adc_temperature(&self) -> u32 { self.adc_temperature }
}

/// Packs a left-justified 20-bit value spread over three registers.
///
/// Only the upper nibble of `xlsb` carries data.
pub const fn assemble_20bit(msb: u8, lsb: u8, xlsb: u8) -> u32 {
    (msb as u32) << 12 | (lsb as u32) << 4 | (xlsb as u32) >> 4
}
