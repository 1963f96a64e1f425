//! Trip data types.

use pf_core::numeric::percent_of;
use pf_core::units::{Density, Mass, Temperature, Volume, celsius, kg, kgm3, liters};
use pf_fluids::DensityBasis;
use uom::si::{
    mass::kilogram, mass_density::kilogram_per_cubic_meter,
    thermodynamic_temperature::degree_celsius, volume::liter,
};

/// One measurement location along a transport route (loading terminal,
/// discharge port, an intermediate survey). Mass is always the known
/// quantity at a trip point.
#[derive(Debug, Clone)]
pub struct TripPoint {
    pub name: String,
    pub mass: Mass,
    pub density: Density,
    pub temperature: Temperature,
    pub basis: DensityBasis,
}

impl TripPoint {
    pub fn new(
        name: impl Into<String>,
        mass: Mass,
        density: Density,
        temperature: Temperature,
        basis: DensityBasis,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            density,
            temperature,
            basis,
        }
    }
}

/// A trip point resolved against the correction kernel. Immutable once built.
#[derive(Debug, Clone)]
pub struct PointResult {
    pub name: String,
    pub mass: Mass,
    pub density15: Density,
    pub density_at_t: Density,
    pub temperature: Temperature,
    /// Volume at the 15 °C reference.
    pub v15: Volume,
    /// Volume at the measured temperature ("factual" volume).
    pub v_fact: Volume,
}

impl PointResult {
    pub fn mass_kg(&self) -> f64 {
        self.mass.get::<kilogram>()
    }

    pub fn density15_kg_l(&self) -> f64 {
        self.density15.get::<kilogram_per_cubic_meter>() / 1000.0
    }

    pub fn density_at_t_kg_l(&self) -> f64 {
        self.density_at_t.get::<kilogram_per_cubic_meter>() / 1000.0
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature.get::<degree_celsius>()
    }

    pub fn v15_l(&self) -> f64 {
        self.v15.get::<liter>()
    }

    pub fn v_fact_l(&self) -> f64 {
        self.v_fact.get::<liter>()
    }

    /// Placeholder point used when a trip has fewer than two measurements.
    pub(crate) fn zero() -> Self {
        Self {
            name: String::new(),
            mass: kg(0.0),
            density15: kgm3(0.0),
            density_at_t: kgm3(0.0),
            temperature: celsius(0.0),
            v15: liters(0.0),
            v_fact: liters(0.0),
        }
    }
}

/// Discrepancy between two resolved points, componentwise `to - from`.
/// Percentages are relative to `from` and forced to 0 on a zero reference.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TripDelta {
    pub mass_kg: f64,
    pub mass_percent: f64,
    pub v15_l: f64,
    pub v15_percent: f64,
    pub v_fact_l: f64,
    pub v_fact_percent: f64,
}

impl TripDelta {
    pub fn between(from: &PointResult, to: &PointResult) -> Self {
        let mass_kg = to.mass_kg() - from.mass_kg();
        let v15_l = to.v15_l() - from.v15_l();
        let v_fact_l = to.v_fact_l() - from.v_fact_l();

        Self {
            mass_kg,
            mass_percent: percent_of(mass_kg, from.mass_kg()),
            v15_l,
            v15_percent: percent_of(v15_l, from.v15_l()),
            v_fact_l,
            v_fact_percent: percent_of(v_fact_l, from.v_fact_l()),
        }
    }
}

/// One adjacent pair in the ordered sequence and the discrepancy between them.
#[derive(Debug, Clone)]
pub struct TripSegment {
    pub from: PointResult,
    pub to: PointResult,
    pub delta: TripDelta,
}

/// Full result of a trip calculation.
///
/// Invariants: `segments.len() == points.len() - 1` (0 below two points);
/// `total` always compares the first and last point of the caller-supplied
/// order, whatever lies between.
#[derive(Debug, Clone)]
pub struct TripResult {
    pub points: Vec<PointResult>,
    pub total: TripDelta,
    pub segments: Vec<TripSegment>,
}

impl TripResult {
    /// First point of the route, or the zero point for a degenerate trip.
    pub fn departure(&self) -> PointResult {
        self.points.first().cloned().unwrap_or_else(PointResult::zero)
    }

    /// Last point of the route, or the zero point for a degenerate trip.
    pub fn arrival(&self) -> PointResult {
        self.points.last().cloned().unwrap_or_else(PointResult::zero)
    }
}
