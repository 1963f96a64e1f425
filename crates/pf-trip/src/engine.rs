//! Trip loss calculation over an ordered sequence of measurement points.

use crate::types::{PointResult, TripDelta, TripPoint, TripResult, TripSegment};
use pf_core::units::liters;
use pf_fluids::{Product, mass_to_volume};

/// Resolve one point through the conversion engine. Mass is the known
/// quantity at a trip point, so the conversion always runs mass -> volume.
fn resolve_point(point: &TripPoint, product: Product) -> PointResult {
    let dual = mass_to_volume(
        point.mass,
        point.density,
        point.temperature,
        point.basis,
        product,
    );

    PointResult {
        name: point.name.clone(),
        mass: point.mass,
        density15: dual.density15,
        density_at_t: dual.density_at_t,
        temperature: point.temperature,
        v15: liters(dual.at_reference),
        v_fact: liters(dual.at_temperature),
    }
}

/// Calculate losses across a transport route.
///
/// Points keep their caller-supplied order; `total` compares the first and
/// last point of that order regardless of how many surveys lie between.
/// Fewer than two points is a documented degenerate case, not an error: the
/// total is zero and there are no segments.
pub fn calculate_trip(points: &[TripPoint], product: Product) -> TripResult {
    let resolved: Vec<PointResult> = points
        .iter()
        .map(|point| resolve_point(point, product))
        .collect();

    let (total, segments) = if resolved.len() >= 2 {
        let total = TripDelta::between(&resolved[0], &resolved[resolved.len() - 1]);
        let segments = resolved
            .windows(2)
            .map(|pair| TripSegment {
                from: pair[0].clone(),
                to: pair[1].clone(),
                delta: TripDelta::between(&pair[0], &pair[1]),
            })
            .collect();
        (total, segments)
    } else {
        let zero = PointResult::zero();
        (TripDelta::between(&zero, &zero), Vec::new())
    };

    TripResult {
        points: resolved,
        total,
        segments,
    }
}
