use crate::probe::ProbeError;
use crate::retrieval::RetrievalError;
use crate::service::ServiceFailure;
use crate::transport::TransportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NceiError {
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl NceiError {
    /// The classified service response behind this error, if the service
    /// answered with a non-success status.
    pub fn service_failure(&self) -> Option<&ServiceFailure> {
        match self {
            NceiError::Probe(ProbeError::Service { failure, .. })
            | NceiError::Retrieval(RetrievalError::Service { failure, .. }) => Some(failure),
            _ => None,
        }
    }

    /// Whether a well-formed catalog would have avoided this error.
    pub fn is_catalog_miss(&self) -> bool {
        matches!(self, NceiError::Retrieval(RetrievalError::Catalog(_)))
    }
}
