//! Temperature dependence of the diffusion coefficient.

use uom::si::{
    f64::{MolarEnergy, ThermodynamicTemperature},
    molar_energy::{joule_per_mole, kilojoule_per_mole},
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{Diffusivity, DiffusivityExt};

/// Molar gas constant, J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314_462_618;

/// Arrhenius law `D(T) = D0 · exp(−Ea / (R·T))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrhenius {
    /// Pre-exponential factor `D0`.
    pub pre_exponential: Diffusivity,

    /// Activation energy `Ea`.
    pub activation_energy: MolarEnergy,
}

impl Arrhenius {
    /// Creates a law from its pre-exponential factor and activation energy.
    #[must_use]
    pub fn new(pre_exponential: Diffusivity, activation_energy: MolarEnergy) -> Self {
        Self {
            pre_exponential,
            activation_energy,
        }
    }

    /// Returns the diffusion coefficient at an absolute temperature.
    #[must_use]
    pub fn diffusivity(&self, temperature: ThermodynamicTemperature) -> Diffusivity {
        let d0 = self.pre_exponential.square_meters_per_second();
        let ea = self.activation_energy.get::<joule_per_mole>();
        let t = temperature.get::<kelvin>();
        Diffusivity::from_square_meters_per_second(d0 * (-ea / (GAS_CONSTANT * t)).exp())
    }
}

/// A slow-diffusing divalent cation in clinopyroxene, representative of
/// Fe–Mg interdiffusion: `D0 = 2.77e-7 m²/s`, `Ea = 320.7 kJ/mol`.
impl Default for Arrhenius {
    fn default() -> Self {
        Self {
            pre_exponential: Diffusivity::from_square_meters_per_second(2.77e-7),
            activation_energy: MolarEnergy::new::<kilojoule_per_mole>(320.7),
        }
    }
}

/// Diffusion laws for the core and rim segments.
///
/// Both segments usually share one law. Separate laws model a rim whose
/// composition changes the diffusivity of the tracked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLaws {
    /// Law applied to core nodes and the inward side of the interface.
    pub core: Arrhenius,

    /// Law applied to rim nodes and the outward side of the interface.
    pub rim: Arrhenius,
}

impl SegmentLaws {
    /// Uses the same law in both segments.
    #[must_use]
    pub fn uniform(law: Arrhenius) -> Self {
        Self {
            core: law,
            rim: law,
        }
    }
}

impl From<Arrhenius> for SegmentLaws {
    fn from(law: Arrhenius) -> Self {
        Self::uniform(law)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn zero_activation_energy_is_constant() {
        let law = Arrhenius::new(
            Diffusivity::from_square_meters_per_second(1e-19),
            MolarEnergy::new::<joule_per_mole>(0.0),
        );
        for t in [300.0, 900.0, 1500.0] {
            let d = law.diffusivity(ThermodynamicTemperature::new::<kelvin>(t));
            assert_relative_eq!(d.square_meters_per_second(), 1e-19);
        }
    }

    #[test]
    fn matches_hand_calculation() {
        let law = Arrhenius::default();
        let t = ThermodynamicTemperature::new::<degree_celsius>(1000.0);
        let expected = 2.77e-7 * (-320_700.0 / (GAS_CONSTANT * 1273.15_f64)).exp();
        assert_relative_eq!(
            law.diffusivity(t).square_meters_per_second(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn increases_with_temperature() {
        let law = Arrhenius::default();
        let cold = law.diffusivity(ThermodynamicTemperature::new::<degree_celsius>(950.0));
        let hot = law.diffusivity(ThermodynamicTemperature::new::<degree_celsius>(1033.0));
        assert!(hot.value > cold.value);
    }
}
