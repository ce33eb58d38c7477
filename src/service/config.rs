use chrono::NaiveDate;
use std::time::Duration;

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.ncei.noaa.gov/access/services/search/v1/data";
pub const DEFAULT_DATA_ENDPOINT: &str = "https://www.ncei.noaa.gov/access/services/data/v1";
pub const DEFAULT_DATASET: &str = "daily-summaries";
pub const DEFAULT_UNITS: &str = "metric";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Earliest date the service could hold observations for; the start of every
/// full-history search.
pub fn epoch_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1750, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Where and how to reach the upstream service.
///
/// Every field has a default, so `ServiceConfig::default()` talks to the
/// production service.
///
/// # Examples
///
/// ```
/// use ncei_daily::ServiceConfig;
/// use std::time::Duration;
///
/// let config = ServiceConfig::builder()
///     .timeout(Duration::from_secs(10))
///     .build();
/// assert_eq!(config.dataset, "daily-summaries");
/// assert_eq!(config.timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ServiceConfig {
    #[builder(into, default = DEFAULT_SEARCH_ENDPOINT.to_string())]
    pub search_endpoint: String,
    #[builder(into, default = DEFAULT_DATA_ENDPOINT.to_string())]
    pub data_endpoint: String,
    #[builder(into, default = DEFAULT_DATASET.to_string())]
    pub dataset: String,
    /// Unit system requested from the data endpoint. The catalog's units
    /// assume `metric`.
    #[builder(into, default = DEFAULT_UNITS.to_string())]
    pub units: String,
    #[builder(default = Duration::from_secs(DEFAULT_TIMEOUT_SECS))]
    pub timeout: Duration,
    #[builder(default = epoch_start())]
    pub epoch_start: NaiveDate,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
