//! Serializable result records.
//!
//! Plain-number snapshots of engine output, decoupled from the uom-typed
//! calculation structs so the serialized schema stays stable.

use pf_fluids::DualResult;
use pf_trip::{PointResult, TripDelta, TripResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub at_reference: f64,
    pub at_temperature: f64,
    pub difference: f64,
    pub difference_percent: f64,
    pub density15_kg_l: f64,
    pub density_at_t_kg_l: f64,
}

impl ConversionRecord {
    pub fn from_result(result: &DualResult) -> Self {
        Self {
            at_reference: result.at_reference,
            at_temperature: result.at_temperature,
            difference: result.difference(),
            difference_percent: result.percent_difference(),
            density15_kg_l: result.density15_kg_l(),
            density_at_t_kg_l: result.density_at_t_kg_l(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointRecord {
    pub name: String,
    pub mass_kg: f64,
    pub density15_kg_l: f64,
    pub density_at_t_kg_l: f64,
    pub temperature_c: f64,
    pub v15_l: f64,
    pub v_fact_l: f64,
}

impl PointRecord {
    pub fn from_result(point: &PointResult) -> Self {
        Self {
            name: point.name.clone(),
            mass_kg: point.mass_kg(),
            density15_kg_l: point.density15_kg_l(),
            density_at_t_kg_l: point.density_at_t_kg_l(),
            temperature_c: point.temperature_c(),
            v15_l: point.v15_l(),
            v_fact_l: point.v_fact_l(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaRecord {
    pub mass_kg: f64,
    pub mass_percent: f64,
    pub v15_l: f64,
    pub v15_percent: f64,
    pub v_fact_l: f64,
    pub v_fact_percent: f64,
}

impl DeltaRecord {
    pub fn from_delta(delta: &TripDelta) -> Self {
        Self {
            mass_kg: delta.mass_kg,
            mass_percent: delta.mass_percent,
            v15_l: delta.v15_l,
            v15_percent: delta.v15_percent,
            v_fact_l: delta.v_fact_l,
            v_fact_percent: delta.v_fact_percent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    pub points: Vec<PointRecord>,
    pub total: DeltaRecord,
    pub segments: Vec<SegmentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub from: String,
    pub to: String,
    pub delta: DeltaRecord,
}

impl TripRecord {
    pub fn from_result(trip: &TripResult) -> Self {
        Self {
            points: trip.points.iter().map(PointRecord::from_result).collect(),
            total: DeltaRecord::from_delta(&trip.total),
            segments: trip
                .segments
                .iter()
                .map(|segment| SegmentRecord {
                    from: segment.from.name.clone(),
                    to: segment.to.name.clone(),
                    delta: DeltaRecord::from_delta(&segment.delta),
                })
                .collect(),
        }
    }
}
