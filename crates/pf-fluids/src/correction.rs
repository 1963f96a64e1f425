//! Temperature density correction per API MPMS Chapter 11.1 (ASTM D1250).
//!
//! Implements Table 54B (refined products) and Table 54A (crude oil): the
//! thermal expansion coefficient, the Volume Correction Factor, and the two
//! density conversions between the 15 °C reference and the measured
//! temperature. The forward direction (reference -> T) is closed form; the
//! inverse direction requires a fixed-point iteration because the VCF depends
//! on the reference density being solved for.
//!
//! The internal exponential formula operates on kg/m³; the uom signatures
//! keep the API unit-agnostic.

use crate::product::Product;
use pf_core::units::{Density, Temperature, kgm3};
use uom::si::{mass_density::kilogram_per_cubic_meter, thermodynamic_temperature::degree_celsius};

/// Reference temperature for standard density, °C.
pub const REFERENCE_TEMPERATURE_C: f64 = 15.0;

/// Temperatures closer than this to the reference are treated as the
/// reference itself, skipping the exponential entirely.
const REFERENCE_BAND_C: f64 = 0.001;

/// Fixed-point step tolerance on density, kg/m³.
const CONVERGENCE_TOLERANCE: f64 = 1e-5;

/// Iteration cap. Physically valid cargo densities converge in 2-4 steps;
/// the cap only bounds degenerate inputs, whose last estimate is returned.
const MAX_ITERATIONS: usize = 100;

/// Thermal expansion coefficient α15 at a given reference density.
///
/// Returns 0 for non-positive densities rather than failing; downstream
/// formulas then collapse to the identity correction.
pub fn thermal_expansion_coefficient(density15: Density, product: Product) -> f64 {
    alpha15(density15.get::<kilogram_per_cubic_meter>(), product)
}

fn alpha15(density15_kg_m3: f64, product: Product) -> f64 {
    if density15_kg_m3 <= 0.0 {
        return 0.0;
    }
    product.k0() / (density15_kg_m3 * density15_kg_m3)
}

fn vcf(density15_kg_m3: f64, temperature_c: f64, product: Product) -> f64 {
    if (temperature_c - REFERENCE_TEMPERATURE_C).abs() < REFERENCE_BAND_C {
        return 1.0;
    }

    let alpha = alpha15(density15_kg_m3, product);
    let delta_t = temperature_c - REFERENCE_TEMPERATURE_C;
    let exponent = -alpha * delta_t * (1.0 + 0.8 * alpha * delta_t);

    exponent.exp()
}

/// Volume Correction Factor: multiplies a volume at `temperature` into its
/// equivalent at the 15 °C reference. Exactly 1.0 at the reference.
pub fn volume_correction_factor(
    density15: Density,
    temperature: Temperature,
    product: Product,
) -> f64 {
    vcf(
        density15.get::<kilogram_per_cubic_meter>(),
        temperature.get::<degree_celsius>(),
        product,
    )
}

/// Density observed at `temperature` converted back to the 15 °C reference.
///
/// The VCF depends on the unknown reference density, so this solves
/// ρ15 = ρT / VCF(ρ15, T) by fixed-point iteration starting from ρT.
/// Non-convergence within the cap returns the last estimate silently.
pub fn density_at_reference(
    density_at_t: Density,
    temperature: Temperature,
    product: Product,
) -> Density {
    let temperature_c = temperature.get::<degree_celsius>();
    if (temperature_c - REFERENCE_TEMPERATURE_C).abs() < REFERENCE_BAND_C {
        return density_at_t;
    }

    let rho_t = density_at_t.get::<kilogram_per_cubic_meter>();
    let mut rho15 = rho_t;

    for _ in 0..MAX_ITERATIONS {
        let next = rho_t / vcf(rho15, temperature_c, product);
        let step = next - rho15;
        rho15 = next;
        if step.abs() < CONVERGENCE_TOLERANCE {
            break;
        }
    }

    kgm3(rho15)
}

/// Density at the 15 °C reference converted to the density at `temperature`.
/// Closed form, no iteration.
pub fn density_at_temperature(
    density15: Density,
    temperature: Temperature,
    product: Product,
) -> Density {
    let rho15 = density15.get::<kilogram_per_cubic_meter>();
    kgm3(rho15 * vcf(rho15, temperature.get::<degree_celsius>(), product))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use pf_core::units::{celsius, kgl};
    use proptest::prelude::*;
    use uom::si::mass_density::kilogram_per_cubic_meter;

    proptest! {
        #[test]
        fn round_trip_within_tolerance(
            rho15 in 0.60_f64..1.10_f64,
            temp in -50.0_f64..80.0_f64,
        ) {
            for product in Product::ALL {
                let rho_t = density_at_temperature(kgl(rho15), celsius(temp), product);
                let back = density_at_reference(rho_t, celsius(temp), product);
                let back_kg_l = back.get::<kilogram_per_cubic_meter>() / 1000.0;
                prop_assert!((back_kg_l - rho15).abs() < 1e-4);
            }
        }

        #[test]
        fn vcf_positive_and_bounded(
            rho15 in 0.60_f64..1.10_f64,
            temp in -50.0_f64..80.0_f64,
        ) {
            for product in Product::ALL {
                let v = volume_correction_factor(kgl(rho15), celsius(temp), product);
                prop_assert!(v.is_finite());
                prop_assert!(v > 0.0);
                // Far more slack than the physics needs across the valid range.
                prop_assert!((0.8..1.3).contains(&v));
            }
        }

        #[test]
        fn correction_sign_follows_temperature(
            rho15 in 0.60_f64..1.10_f64,
            temp in -50.0_f64..80.0_f64,
        ) {
            prop_assume!((temp - 15.0).abs() >= 0.001);
            let v = volume_correction_factor(kgl(rho15), celsius(temp), Product::Refined);
            if temp > 15.0 {
                prop_assert!(v < 1.0);
            } else {
                prop_assert!(v > 1.0);
            }
        }
    }
}
