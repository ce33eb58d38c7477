//! Two-phase availability probing against the search endpoint.

pub mod clamp;
pub mod error;
pub mod prober;

pub use error::ProbeError;
pub use prober::AvailabilityProber;
