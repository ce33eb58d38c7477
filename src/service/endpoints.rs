//! URL construction for the search and data endpoints.

use super::config::ServiceConfig;
use crate::types::availability::DateSpan;
use reqwest::Url;

/// Response format of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Availability metadata as JSON.
    Search,
    /// Observations as CSV.
    Data,
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid service endpoint URL '{url}'")]
pub struct InvalidEndpoint {
    pub url: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

fn date_param(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Builds the request URL for `station` over `span`.
///
/// # Errors
///
/// Returns [`InvalidEndpoint`] if the configured base URL does not parse.
pub fn request_url(
    config: &ServiceConfig,
    endpoint: Endpoint,
    station: &str,
    span: DateSpan,
) -> Result<Url, InvalidEndpoint> {
    let start = date_param(span.start);
    let end = date_param(span.end);
    let (base, params): (&str, Vec<(&str, &str)>) = match endpoint {
        Endpoint::Search => (
            config.search_endpoint.as_str(),
            vec![
                ("dataset", config.dataset.as_str()),
                ("stations", station),
                ("available", "true"),
                ("startDate", start.as_str()),
                ("endDate", end.as_str()),
                ("format", "json"),
            ],
        ),
        Endpoint::Data => (
            config.data_endpoint.as_str(),
            vec![
                ("dataset", config.dataset.as_str()),
                ("stations", station),
                ("startDate", start.as_str()),
                ("endDate", end.as_str()),
                ("format", "csv"),
                ("units", config.units.as_str()),
            ],
        ),
    };
    Url::parse_with_params(base, params).map_err(|e| InvalidEndpoint {
        url: base.to_string(),
        source: Box::new(e),
    })
}

/// Human-facing station page on the Climate Data Online site.
pub fn site_url(station: &str) -> String {
    format!("https://www.ncdc.noaa.gov/cdo-web/datasets/GHCND/stations/GHCND:{station}/detail")
}
