//! pf-core: stable foundation for petroflow.
//!
//! Contains:
//! - units (uom SI types + constructors for the quantities used on shipping documents)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PfError, PfResult};
pub use numeric::*;
pub use units::*;
