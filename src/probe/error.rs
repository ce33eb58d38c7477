use crate::service::endpoints::InvalidEndpoint;
use crate::service::ServiceFailure;
use crate::transport::TransportError;
use crate::types::availability::DateSpan;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("No data available for {station}. Check station ID.")]
    StationNotFound { station: String },

    #[error("No data available for {station} over dates {span}. Check date range.")]
    NoDataInRange { station: String, span: DateSpan },

    #[error(
        "The station {station} exists and has data, but no core elements available \
         (core elements include: {core}). You may want to review the station page to \
         find available data: {site_url}"
    )]
    NoCoreVariables {
        station: String,
        core: String,
        site_url: String,
    },

    #[error("Failed to retrieve data from {station}. {failure}")]
    Service {
        station: String,
        failure: ServiceFailure,
    },

    #[error("Malformed search response for {station}: {reason}")]
    MalformedResponse { station: String, reason: String },

    #[error("Failed to parse search response for {station}")]
    Json {
        station: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Endpoint(#[from] InvalidEndpoint),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
