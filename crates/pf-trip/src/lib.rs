//! pf-trip: multi-point trip loss calculation for petroflow.
//!
//! Provides:
//! - Trip point and resolved point types
//! - Pairwise and end-to-end delta computation
//! - The trip calculation over an ordered sequence of measurement points
//!
//! # Example
//!
//! ```
//! use pf_core::units::{celsius, kg, kgl};
//! use pf_fluids::{DensityBasis, Product};
//! use pf_trip::{TripPoint, calculate_trip};
//!
//! let points = vec![
//!     TripPoint::new("loading", kg(3_200_000.0), kgl(0.846), celsius(23.0), DensityBasis::AtTemperature),
//!     TripPoint::new("discharge", kg(3_192_000.0), kgl(0.845), celsius(19.0), DensityBasis::AtTemperature),
//! ];
//!
//! let trip = calculate_trip(&points, Product::Refined);
//! assert_eq!(trip.segments.len(), 1);
//! assert!(trip.total.mass_kg < 0.0);
//! ```

pub mod engine;
pub mod types;

// Re-exports for ergonomics
pub use engine::calculate_trip;
pub use types::{PointResult, TripDelta, TripPoint, TripResult, TripSegment};
