use crate::calibration::Temperature;

/// Compensated temperature and pressure from one sampling cycle.
///
/// Only built from a successful cycle; there is no default or placeholder value.
///
/// The pressure is the compensated Q24.8 value divided by 256. Bosch's reference code and many
/// drivers label that quantity `pressure_hpa`, but its unit is pascal, so it is exposed as
/// [`pressure_pascal`](Self::pressure_pascal). [`pressure_hectopascal`](Self::pressure_hectopascal)
/// divides it by a further 100.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    temperature_c: f32,
    pressure_pa: f32,
}

impl Measurement {
    pub(crate) fn new(temperature: &Temperature, pressure_pa: f32) -> Self {
        Self {
            temperature_c: temperature.celsius(),
            pressure_pa,
        }
    }

    pub fn temperature_celsius(&self) -> f32 {
        self.temperature_c
    }

    /// `p / 256.0`, the value commonly reported as `pressure_hpa`.
    pub fn pressure_pascal(&self) -> f32 {
        self.pressure_pa
    }

    pub fn pressure_hectopascal(&self) -> f32 {
        self.pressure_pa / 100.0
    }
}

#[cfg(feature = "uom")]
impl Measurement {
    pub fn into_uom(self) -> (uom::si::f32::ThermodynamicTemperature, uom::si::f32::Pressure) {
        use uom::si::pressure::{Pressure, pascal};
        use uom::si::thermodynamic_temperature::{ThermodynamicTemperature, degree_celsius};
        (
            ThermodynamicTemperature::new::<degree_celsius>(self.temperature_c),
            Pressure::new::<pascal>(self.pressure_pa),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::CalibrationSet;

    #[test]
    fn hectopascal_view() {
        let temperature = CalibrationSet::REFERENCE.compensate_temperature(519888);
        let m = Measurement::new(&temperature, 100653.25);

        assert_eq!(25.08, m.temperature_celsius());
        assert_eq!(100653.25, m.pressure_pascal());
        assert!((m.pressure_hectopascal() - 1006.5325).abs() < 1e-3);
    }
}
