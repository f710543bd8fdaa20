//! Physical constants shared by every calculator.
//!
//! Formula functions never declare their own constants: they receive a
//! [`PhysicalConstants`] by reference, so a settings file can override a value
//! (e.g. a more precise gas constant) for every calculator at once.
use serde::{Deserialize, Serialize};

/// Faraday constant, C/mol
pub const FARADAY: f64 = 96485.0;
/// Gas constant, J/(mol·K)
pub const GAS_CONSTANT: f64 = 8.314;
/// Gas constant, L·atm/(mol·K)
pub const GAS_CONSTANT_LATM: f64 = 0.0821;
/// Avogadro number, 1/mol
pub const AVOGADRO: f64 = 6.022e23;
/// Boltzmann constant, J/K
pub const BOLTZMANN: f64 = 1.381e-23;
/// Planck constant, J·s
pub const PLANCK: f64 = 6.62607015e-34;
/// Speed of light in vacuum, m/s
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;
/// Electronvolt, J
pub const ELECTRON_VOLT: f64 = 1.602176634e-19;
/// pH + pOH of water at 25 °C
pub const PH_POH_SUM: f64 = 14.0;
/// 0 °C in K
pub const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    pub faraday: f64,
    pub gas_constant: f64,
    pub gas_constant_latm: f64,
    pub avogadro: f64,
    pub boltzmann: f64,
    pub planck: f64,
    pub speed_of_light: f64,
    pub electron_volt: f64,
    pub ph_poh_sum: f64,
    pub kelvin_offset: f64,
}

impl PhysicalConstants {
    pub const STANDARD: PhysicalConstants = PhysicalConstants {
        faraday: FARADAY,
        gas_constant: GAS_CONSTANT,
        gas_constant_latm: GAS_CONSTANT_LATM,
        avogadro: AVOGADRO,
        boltzmann: BOLTZMANN,
        planck: PLANCK,
        speed_of_light: SPEED_OF_LIGHT,
        electron_volt: ELECTRON_VOLT,
        ph_poh_sum: PH_POH_SUM,
        kelvin_offset: KELVIN_OFFSET,
    };

    /// Names of the constants that are not finite and strictly positive.
    pub fn invalid_entries(&self) -> Vec<&'static str> {
        let entries = [
            ("faraday", self.faraday),
            ("gas_constant", self.gas_constant),
            ("gas_constant_latm", self.gas_constant_latm),
            ("avogadro", self.avogadro),
            ("boltzmann", self.boltzmann),
            ("planck", self.planck),
            ("speed_of_light", self.speed_of_light),
            ("electron_volt", self.electron_volt),
            ("ph_poh_sum", self.ph_poh_sum),
            ("kelvin_offset", self.kelvin_offset),
        ];
        entries
            .iter()
            .filter(|(_, value)| !(value.is_finite() && *value > 0.0))
            .map(|(name, _)| *name)
            .collect()
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}
