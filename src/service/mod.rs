//! Knowledge about the upstream NCEI Access Data Service: where it lives, how
//! its search responses look and how it reports failures.

pub mod config;
pub mod endpoints;
pub mod failure;
pub mod search;

pub use config::ServiceConfig;
pub use failure::{FailureDetail, FieldError, ServiceFailure};
