use crate::catalog::error::CatalogError;
use crate::service::endpoints::InvalidEndpoint;
use crate::service::ServiceFailure;
use crate::transport::TransportError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("Failed to retrieve data from {station}. {failure}")]
    Service {
        station: String,
        failure: ServiceFailure,
    },

    // The request succeeded but carried no rows.
    #[error("No data available for {station}. Check station ID and date range.")]
    EmptyPayload { station: String },

    #[error("Parsing error processing CSV data for station '{station}'")]
    CsvParse {
        station: String,
        #[source]
        source: PolarsError,
    },

    #[error("Missing required column '{column}' for station {station}")]
    MissingColumn { station: String, column: String },

    #[error("Invalid date '{value}' in data for station {station}")]
    InvalidDate { station: String, value: String },

    #[error("Output path '{0}' exists but is not a directory")]
    OutputNotADirectory(PathBuf),

    #[error("Failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to write output file '{path}': {reason}")]
    Write { path: PathBuf, reason: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Endpoint(#[from] InvalidEndpoint),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
