pub mod availability;
pub mod clock;
pub mod dataset;
pub mod query;
