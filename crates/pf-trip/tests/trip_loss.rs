//! Integration test: raw text through validation into the trip engine.

use pf_fluids::{DensityBasis, Product, input};
use pf_trip::{TripPoint, calculate_trip};

struct RawPoint {
    name: &'static str,
    mass: &'static str,
    density: &'static str,
    temperature: &'static str,
    basis: DensityBasis,
}

fn parse_point(raw: &RawPoint) -> Result<TripPoint, input::InputError> {
    Ok(TripPoint::new(
        raw.name,
        input::parse_mass(raw.mass, "mass")?,
        input::parse_density(raw.density, "density")?,
        input::parse_temperature(raw.temperature, "temperature")?,
        raw.basis,
    ))
}

#[test]
fn paperwork_to_trip_result() {
    // Values as they appear on cargo documents, decimal commas included.
    let raw = [
        RawPoint {
            name: "loading terminal",
            mass: "3200000",
            density: "0,846",
            temperature: "23",
            basis: DensityBasis::AtTemperature,
        },
        RawPoint {
            name: "discharge port",
            mass: "3192000",
            density: "0,845",
            temperature: "19",
            basis: DensityBasis::AtTemperature,
        },
    ];

    let points: Vec<TripPoint> = raw
        .iter()
        .map(parse_point)
        .collect::<Result<_, _>>()
        .expect("paperwork values are in range");

    let trip = calculate_trip(&points, Product::Refined);

    assert_eq!(trip.points.len(), 2);
    assert_eq!(trip.segments.len(), 1);
    assert_eq!(trip.departure().name, "loading terminal");
    assert_eq!(trip.arrival().name, "discharge port");

    // 8 t lost over the route, a quarter percent of the loaded mass.
    assert!((trip.total.mass_kg + 8_000.0).abs() < 1e-6);
    assert!((trip.total.mass_percent + 0.25).abs() < 1e-9);

    // Reference volume moves less than factual volume because the
    // temperature drop hides part of the physical loss.
    assert!(trip.total.v_fact_l < 0.0);
    assert!(trip.total.v15_l > trip.total.v_fact_l);
}

#[test]
fn out_of_range_paperwork_is_rejected_before_the_engine() {
    let raw = RawPoint {
        name: "loading terminal",
        mass: "3200000",
        density: "1.25", // bunker sludge, not a cargo density
        temperature: "23",
        basis: DensityBasis::AtTemperature,
    };

    let err = parse_point(&raw).unwrap_err();
    assert!(matches!(err, input::InputError::OutOfRange { .. }));
    assert_eq!(err.field(), "density");
}
