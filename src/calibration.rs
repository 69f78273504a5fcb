//! Calibration coefficients and the fixed-point compensation formulas.
//!
//! The formulas follow the BMP280 datasheet (BST-BMP280-DS001, section 3.11.3 and appendix 8.2):
//! 32-bit integer arithmetic for temperature and 64-bit integer arithmetic for pressure. They must
//! match the reference implementation bit for bit, so floating point is only used for the final
//! scaling.
//!
//! Coefficients are plain values supplied by a [`CalibrationSource`]. The driver never reads them
//! from the device on its own.

/// Pressure compensation failed because the calibration set is degenerate.
///
/// The pressure formula divides by a term that depends only on `t_fine` and the pressure
/// coefficients. When that term is zero the set cannot produce a pressure. The temperature the
/// pressure was compensated against is still valid and travels with the error.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DegenerateCalibration {
    temperature: Temperature,
}

impl DegenerateCalibration {
    /// Temperature of the cycle whose pressure could not be computed.
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }
}

/// Temperature and pressure trimming coefficients (dig_T1..dig_T3, dig_P1..dig_P9).
///
/// Field widths match the sensor's NVM layout. Any value that fits a field is accepted; intermediate
/// overflow wraps in two's complement, so out-of-factory sets give the same (meaningless) numbers
/// as the datasheet C code instead of panicking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationSet {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,
    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,
}

impl CalibrationSet {
    /// Example coefficient table from the datasheet's worked example.
    pub const REFERENCE: Self = Self {
        dig_t1: 27504,
        dig_t2: 26435,
        dig_t3: -1000,
        dig_p1: 36477,
        dig_p2: -10685,
        dig_p3: 3024,
        dig_p4: 2855,
        dig_p5: 140,
        dig_p6: -7,
        dig_p7: 15500,
        dig_p8: -14600,
        dig_p9: 6000,
    };

    /// Decodes the 24-byte calibration block stored at 0x88..=0xA1 (little-endian words).
    pub const fn from_le_bytes(b: &[u8; 24]) -> Self {
        Self {
            dig_t1: u16::from_le_bytes([b[0], b[1]]),
            dig_t2: i16::from_le_bytes([b[2], b[3]]),
            dig_t3: i16::from_le_bytes([b[4], b[5]]),
            dig_p1: u16::from_le_bytes([b[6], b[7]]),
            dig_p2: i16::from_le_bytes([b[8], b[9]]),
            dig_p3: i16::from_le_bytes([b[10], b[11]]),
            dig_p4: i16::from_le_bytes([b[12], b[13]]),
            dig_p5: i16::from_le_bytes([b[14], b[15]]),
            dig_p6: i16::from_le_bytes([b[16], b[17]]),
            dig_p7: i16::from_le_bytes([b[18], b[19]]),
            dig_p8: i16::from_le_bytes([b[20], b[21]]),
            dig_p9: i16::from_le_bytes([b[22], b[23]]),
        }
    }

    /// Compensates a raw 20-bit temperature code.
    ///
    /// The returned [`Temperature`] carries `t_fine`, which [`compensate_pressure`](Self::compensate_pressure)
    /// requires. Resolution is 0.01 °C.
    pub fn compensate_temperature(&self, adc_t: u32) -> Temperature {
        let adc_t = adc_t as i32;
        let t1 = self.dig_t1 as i32;
        let t2 = self.dig_t2 as i32;
        let t3 = self.dig_t3 as i32;

        // Two's-complement wrapping, like the datasheet C code, for any 16-bit coefficient
        let var1 = ((adc_t >> 3).wrapping_sub(t1 << 1)).wrapping_mul(t2) >> 11;
        let d = (adc_t >> 4).wrapping_sub(t1);
        let var2 = (d.wrapping_mul(d) >> 12).wrapping_mul(t3) >> 14;
        let t_fine = var1.wrapping_add(var2);

        // Hundredths of a degree
        let t = t_fine.wrapping_mul(5).wrapping_add(128) >> 8;

        Temperature {
            celsius: t as f32 / 100.0,
            t_fine,
        }
    }

    /// Compensates a raw 20-bit pressure code and returns pascal.
    ///
    /// Taking a [`Temperature`] rather than a bare `t_fine` guarantees the value came out of a
    /// temperature compensation.
    ///
    /// # Errors
    /// [`DegenerateCalibration`] if the calibration-derived divisor is zero. No division is
    /// attempted in that case.
    pub fn compensate_pressure(
        &self,
        adc_p: u32,
        temperature: &Temperature,
    ) -> Result<f32, DegenerateCalibration> {
        let p1 = self.dig_p1 as i64;
        let p2 = self.dig_p2 as i64;
        let p3 = self.dig_p3 as i64;
        let p4 = self.dig_p4 as i64;
        let p5 = self.dig_p5 as i64;
        let p6 = self.dig_p6 as i64;
        let p7 = self.dig_p7 as i64;
        let p8 = self.dig_p8 as i64;
        let p9 = self.dig_p9 as i64;

        let mut var1 = temperature.t_fine as i64 - 128000;
        let mut var2 = var1.wrapping_mul(var1).wrapping_mul(p6);
        var2 = var2.wrapping_add(var1.wrapping_mul(p5) << 17);
        var2 = var2.wrapping_add(p4 << 35);
        var1 = (var1.wrapping_mul(var1).wrapping_mul(p3) >> 8)
            .wrapping_add(var1.wrapping_mul(p2) << 12);
        var1 = ((1i64 << 47).wrapping_add(var1)).wrapping_mul(p1) >> 33;

        if var1 == 0 {
            return Err(DegenerateCalibration { temperature: *temperature });
        }

        let mut p = 1048576 - adc_p as i64;
        p = ((p << 31).wrapping_sub(var2)).wrapping_mul(3125).wrapping_div(var1);
        var1 = p9.wrapping_mul(p >> 13).wrapping_mul(p >> 13) >> 25;
        var2 = p8.wrapping_mul(p) >> 19;
        // Q24.8 pascal
        p = (p.wrapping_add(var1).wrapping_add(var2) >> 8).wrapping_add(p7 << 4);

        Ok(p as f32 / 256.0)
    }
}

impl Default for CalibrationSet {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Output of temperature compensation.
///
/// Can only be produced by [`CalibrationSet::compensate_temperature`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    celsius: f32,
    t_fine: i32,
}

impl Temperature {
    pub fn celsius(&self) -> f32 {
        self.celsius
    }

    /// Fine temperature, the fixed-point intermediate fed into pressure compensation.
    pub fn t_fine(&self) -> i32 {
        self.t_fine
    }
}

/// Something that can hand the driver a calibration set at construction time.
///
/// A fixed table and a decoded NVM dump satisfy the same contract.
pub trait CalibrationSource {
    fn calibration(&self) -> CalibrationSet;
}

impl CalibrationSource for CalibrationSet {
    fn calibration(&self) -> CalibrationSet {
        *self
    }
}

/// Raw copy of the calibration block (0x88..=0xA1), e.g. captured once at the factory.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NvmImage(pub [u8; 24]);

impl CalibrationSource for NvmImage {
    fn calibration(&self) -> CalibrationSet {
        CalibrationSet::from_le_bytes(&self.0)
    }
}
