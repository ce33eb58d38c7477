pub mod catalog;
mod error;
mod pipeline;
mod probe;
mod retrieval;
mod service;
mod transport;
mod types;

pub use error::NceiError;
pub use pipeline::*;

pub use catalog::error::CatalogError;
pub use catalog::VariableAttributes;

pub use probe::clamp::{clamp, Clamped};
pub use probe::prober::{select_variables, VariableSelection};
pub use probe::{AvailabilityProber, ProbeError};

pub use retrieval::attributes::{annotate_variables, global_attributes, ACCESS_METHOD};
pub use retrieval::frame::parse_observations;
pub use retrieval::netcdf_file::NetcdfWriter;
pub use retrieval::output::output_file_name;
pub use retrieval::{DatasetWriter, RetrievalError, Retriever};

pub use service::endpoints::{request_url, site_url, Endpoint, InvalidEndpoint};
pub use service::{FailureDetail, FieldError, ServiceConfig, ServiceFailure};

pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};

pub use types::availability::{AvailabilityNote, AvailabilityResult, DateSpan};
pub use types::clock::{Clock, FixedClock, SystemClock};
pub use types::dataset::{AttributeValue, Attributes, DataVariable, Dataset, TIME_DIMENSION};
pub use types::query::{StationQuery, VariableMode};
