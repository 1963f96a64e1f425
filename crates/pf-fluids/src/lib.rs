//! pf-fluids: petroleum liquid density handling for petroflow.
//!
//! Provides:
//! - Product class definitions (refined products, crude oil)
//! - Temperature density correction per API MPMS Chapter 11.1 (ASTM D1250)
//! - Mass <-> volume conversion with dual results (at 15 °C and at T)
//! - The text input boundary that validates operator-entered numbers
//!
//! # Architecture
//!
//! The correction kernel is a pair of pure conversions between the density at
//! the 15 °C reference temperature and the density at the measured
//! temperature, linked by the Volume Correction Factor. Everything downstream
//! (the conversion calculator here, the trip-loss engine in `pf-trip`) only
//! ever talks to these conversions. Range validation happens once, at the
//! `input` boundary; the kernel itself is total over finite inputs and keeps
//! computing on degenerate values instead of failing.
//!
//! # Example
//!
//! ```
//! use pf_fluids::{DensityBasis, Product, mass_to_volume};
//! use pf_core::units::{celsius, kg, kgl};
//!
//! let result = mass_to_volume(
//!     kg(1000.0),
//!     kgl(0.850),
//!     celsius(25.0),
//!     DensityBasis::AtReference,
//!     Product::Refined,
//! );
//!
//! assert!((result.at_reference - 1176.47).abs() < 0.01);
//! assert!(result.at_temperature > result.at_reference);
//! ```

pub mod calculator;
pub mod correction;
pub mod input;
pub mod product;

// Re-exports for ergonomics
pub use calculator::{
    DensityBasis, Direction, DualResult, convert, mass_to_volume, resolve_densities,
    volume_to_mass,
};
pub use correction::{
    density_at_reference, density_at_temperature, thermal_expansion_coefficient,
    volume_correction_factor,
};
pub use input::{InputError, parse_density, parse_mass, parse_number, parse_temperature,
    parse_volume};
pub use product::{K0_CRUDE, K0_REFINED, Product};
