//! Mass <-> volume conversion with dual results at 15 °C and at T.

use crate::correction::{density_at_reference, density_at_temperature};
use crate::product::Product;
use pf_core::numeric::percent_of;
use pf_core::units::{Density, Mass, Temperature, Volume};
use uom::si::{mass::kilogram, mass_density::kilogram_per_cubic_meter, volume::liter};

/// Which of the two densities the caller measured; the other is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityBasis {
    /// Supplied density is at the 15 °C reference.
    AtReference,
    /// Supplied density is at the measured temperature.
    AtTemperature,
}

impl DensityBasis {
    pub fn label(self) -> &'static str {
        match self {
            Self::AtReference => "at 15 °C",
            Self::AtTemperature => "at cargo temperature",
        }
    }
}

/// Conversion direction for the unified entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    MassToVolume,
    VolumeToMass,
}

/// Output of one conversion, carried at both temperatures.
///
/// `at_reference` and `at_temperature` are liters for mass -> volume and
/// kilograms for volume -> mass; the densities are always both populated and
/// consistent through the VCF for the product and temperature used.
#[derive(Debug, Clone)]
pub struct DualResult {
    /// Converted quantity at the 15 °C reference.
    pub at_reference: f64,
    /// Converted quantity at the measured temperature.
    pub at_temperature: f64,
    /// Density at the 15 °C reference.
    pub density15: Density,
    /// Density at the measured temperature.
    pub density_at_t: Density,
}

impl DualResult {
    /// Spread between the two carried quantities.
    pub fn difference(&self) -> f64 {
        self.at_temperature - self.at_reference
    }

    /// Spread relative to the reference quantity, in percent; 0 when the
    /// reference quantity is 0.
    pub fn percent_difference(&self) -> f64 {
        percent_of(self.difference(), self.at_reference)
    }

    pub fn density15_kg_l(&self) -> f64 {
        self.density15.get::<kilogram_per_cubic_meter>() / 1000.0
    }

    pub fn density_at_t_kg_l(&self) -> f64 {
        self.density_at_t.get::<kilogram_per_cubic_meter>() / 1000.0
    }
}

/// Resolve both densities from whichever one the caller measured.
pub fn resolve_densities(
    density: Density,
    basis: DensityBasis,
    temperature: Temperature,
    product: Product,
) -> (Density, Density) {
    match basis {
        DensityBasis::AtReference => {
            (density, density_at_temperature(density, temperature, product))
        }
        DensityBasis::AtTemperature => {
            (density_at_reference(density, temperature, product), density)
        }
    }
}

/// Mass -> liters at both 15 °C and the measured temperature.
pub fn mass_to_volume(
    mass: Mass,
    density: Density,
    temperature: Temperature,
    basis: DensityBasis,
    product: Product,
) -> DualResult {
    let (rho15, rho_t) = resolve_densities(density, basis, temperature, product);

    DualResult {
        at_reference: (mass / rho15).get::<liter>(),
        at_temperature: (mass / rho_t).get::<liter>(),
        density15: rho15,
        density_at_t: rho_t,
    }
}

/// Liters -> mass at both 15 °C and the measured temperature.
pub fn volume_to_mass(
    volume: Volume,
    density: Density,
    temperature: Temperature,
    basis: DensityBasis,
    product: Product,
) -> DualResult {
    let (rho15, rho_t) = resolve_densities(density, basis, temperature, product);

    DualResult {
        at_reference: (volume * rho15).get::<kilogram>(),
        at_temperature: (volume * rho_t).get::<kilogram>(),
        density15: rho15,
        density_at_t: rho_t,
    }
}

/// Unified entry point; `quantity` is kilograms or liters per `direction`.
pub fn convert(
    quantity: f64,
    density: Density,
    temperature: Temperature,
    basis: DensityBasis,
    product: Product,
    direction: Direction,
) -> DualResult {
    use pf_core::units::{kg, liters};

    match direction {
        Direction::MassToVolume => mass_to_volume(kg(quantity), density, temperature, basis, product),
        Direction::VolumeToMass => {
            volume_to_mass(liters(quantity), density, temperature, basis, product)
        }
    }
}
