use super::{Transport, TransportError, TransportResponse};
use log::debug;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] backed by a blocking `reqwest` client with a fixed timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuild`] if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(TransportError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(url.to_string(), e)
            } else {
                TransportError::NetworkRequest(url.to_string(), e)
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::BodyRead(url.to_string(), e))?;
        debug!("{} -> {} ({} bytes)", url, status, body.len());
        Ok(TransportResponse { status, body })
    }
}
