//! The HTTP seam. Everything that talks to the network goes through
//! [`Transport`], so the prober and the pipeline can be driven by a scripted
//! fake in tests.

pub mod error;
pub mod http;

pub use error::TransportError;
pub use http::HttpTransport;

use reqwest::Url;

/// Status and body of a completed request.
///
/// Non-success statuses are returned as-is for the caller to classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs blocking GET requests.
pub trait Transport {
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was received at all
    /// (connection failure, timeout, unreadable body).
    fn get(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        (**self).get(url)
    }
}
