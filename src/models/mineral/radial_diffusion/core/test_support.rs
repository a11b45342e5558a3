use uom::si::{
    f64::{Length, MolarEnergy, ThermodynamicTemperature, Time},
    length::micrometer,
    molar_energy::joule_per_mole,
    thermodynamic_temperature::degree_celsius,
    time::year,
};

use crate::support::units::{Diffusivity, DiffusivityExt};

use super::{Arrhenius, BoundaryLevels, Geometry, LinearCooling, RadialDiffusion};

pub(super) fn years(value: f64) -> Time {
    Time::new::<year>(value)
}

pub(super) fn um(value: f64) -> Length {
    Length::new::<micrometer>(value)
}

pub(super) fn geometry(core: f64, rim: f64, dr: f64) -> Geometry {
    Geometry::new(um(core), um(rim), um(dr)).unwrap()
}

/// Temperature-independent law with `D` in m²/s.
pub(super) fn constant_law(d: f64) -> Arrhenius {
    Arrhenius::new(
        Diffusivity::from_square_meters_per_second(d),
        MolarEnergy::new::<joule_per_mole>(0.0),
    )
}

/// 1033 → 950 °C.
pub(super) fn cooling() -> LinearCooling {
    LinearCooling::new(
        ThermodynamicTemperature::new::<degree_celsius>(1033.0),
        ThermodynamicTemperature::new::<degree_celsius>(950.0),
    )
}

/// 50 um core in a 150 um grain at 1 um spacing, levels 0.8 and 0.3.
pub(super) fn scenario() -> RadialDiffusion {
    RadialDiffusion::new(
        geometry(50.0, 150.0, 1.0),
        cooling(),
        BoundaryLevels::new(0.8, 0.3),
        Arrhenius::default(),
    )
}
