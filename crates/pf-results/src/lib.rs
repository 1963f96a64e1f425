//! pf-results: presentation-facing result contracts for petroflow.
//!
//! Provides:
//! - Fixed-precision formatting for every quantity the engines report
//! - Plain-number serializable records of conversion and trip results
//!
//! The engines themselves have no opinion on formatting or serialized
//! schema; this crate is where that contract lives.

pub mod format;
pub mod record;

// Re-exports for ergonomics
pub use format::{
    format_density, format_mass, format_percent, format_temperature, format_volume,
};
pub use record::{ConversionRecord, DeltaRecord, PointRecord, SegmentRecord, TripRecord};
