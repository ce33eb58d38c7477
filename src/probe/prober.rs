//! Decides whether a station can be retrieved, and over which dates and
//! variables.
//!
//! Probing issues two searches. The first covers the full plausible history
//! (epoch start through today) and only establishes that the station exists.
//! The second covers the requested range; its first result supplies the
//! available data types, the coordinates, the station name and the station's
//! own coverage, which the requested range is clamped to.

use super::clamp::clamp;
use super::error::ProbeError;
use crate::catalog::core_elements::CORE_CODES;
use crate::service::endpoints::{request_url, site_url, Endpoint};
use crate::service::search::{SearchResponse, SearchResult};
use crate::service::{ServiceConfig, ServiceFailure};
use crate::transport::Transport;
use crate::types::availability::{AvailabilityNote, AvailabilityResult, DateSpan};
use crate::types::clock::Clock;
use crate::types::query::{StationQuery, VariableMode};
use log::{debug, info};

/// Variables chosen for retrieval, plus the core variables that were wanted
/// but not reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSelection {
    pub variables: Vec<String>,
    pub missing: Vec<String>,
}

/// Picks the variables to retrieve from the data types the service reported.
///
/// In core mode the result is the core list, in core order, filtered to what
/// was reported. In all-variables mode every reported type is kept, in
/// service order.
pub fn select_variables(mode: VariableMode, reported: &[String]) -> VariableSelection {
    match mode {
        VariableMode::Core => {
            let (variables, missing): (Vec<&str>, Vec<&str>) = CORE_CODES
                .iter()
                .copied()
                .partition(|code| reported.iter().any(|id| id.as_str() == *code));
            VariableSelection {
                variables: variables.into_iter().map(str::to_string).collect(),
                missing: missing.into_iter().map(str::to_string).collect(),
            }
        }
        VariableMode::All => VariableSelection {
            variables: reported.to_vec(),
            missing: Vec::new(),
        },
    }
}

/// Runs the two-phase availability check for one station at a time.
pub struct AvailabilityProber<'a> {
    transport: &'a dyn Transport,
    clock: &'a dyn Clock,
    config: &'a ServiceConfig,
}

impl<'a> AvailabilityProber<'a> {
    pub fn new(
        transport: &'a dyn Transport,
        clock: &'a dyn Clock,
        config: &'a ServiceConfig,
    ) -> Self {
        Self {
            transport,
            clock,
            config,
        }
    }

    /// Probes the station named by `query`.
    ///
    /// # Errors
    ///
    /// * [`ProbeError::StationNotFound`] if the full-history search is empty;
    ///   no second search is issued.
    /// * [`ProbeError::NoDataInRange`] if the requested range has no data.
    /// * [`ProbeError::NoCoreVariables`] if, in core mode, none of the core
    ///   elements are available.
    /// * [`ProbeError::Service`] for non-success responses, and
    ///   [`ProbeError::Transport`] when no response arrived.
    pub fn probe(&self, query: &StationQuery) -> Result<AvailabilityResult, ProbeError> {
        let station = query.station();
        let today = self.clock.today();

        let history = DateSpan::new(self.config.epoch_start, today);
        if self.search(station, history)?.is_none() {
            return Err(ProbeError::StationNotFound {
                station: station.to_string(),
            });
        }

        let requested = DateSpan::new(query.start(), query.end());
        let no_data = || ProbeError::NoDataInRange {
            station: station.to_string(),
            span: requested,
        };
        let result = self.search(station, requested)?.ok_or_else(no_data)?;

        let mut notes = Vec::new();
        let selection = select_variables(query.mode(), &result.data_type_ids());
        if selection.variables.is_empty() {
            return Err(match query.mode() {
                VariableMode::Core => ProbeError::NoCoreVariables {
                    station: station.to_string(),
                    core: CORE_CODES.join(", "),
                    site_url: site_url(station),
                },
                VariableMode::All => malformed(station, "no data types reported"),
            });
        }
        if !selection.missing.is_empty() {
            notes.push(AvailabilityNote::MissingVariables {
                missing: selection.missing.clone(),
                available: selection.variables.clone(),
            });
        }

        let (longitude, latitude) = result
            .lon_lat()
            .ok_or_else(|| malformed(station, "missing station coordinates"))?;
        let station_name = result
            .station_name()
            .map(str::to_string)
            .unwrap_or_else(|| station.to_string());
        let coverage = station_coverage(station, &result, today)?;

        let clamped = clamp(requested, coverage);
        if clamped.span.start > clamped.span.end {
            return Err(no_data());
        }
        if clamped.start_adjusted {
            notes.push(AvailabilityNote::StartAdjusted(clamped.span.start));
        }
        if clamped.end_adjusted {
            notes.push(AvailabilityNote::EndAdjusted(clamped.span.end));
        }

        for note in &notes {
            info!("{}: {}", station, note);
        }

        Ok(AvailabilityResult {
            variables: selection.variables,
            longitude,
            latitude,
            station_name,
            effective: clamped.span,
            notes,
        })
    }

    /// Runs one search; `Ok(None)` means the service returned no results.
    fn search(&self, station: &str, span: DateSpan) -> Result<Option<SearchResult>, ProbeError> {
        let url = request_url(self.config, Endpoint::Search, station, span)?;
        debug!("Searching {} over {}", station, span);
        let response = self.transport.get(&url)?;
        if !response.is_success() {
            return Err(ProbeError::Service {
                station: station.to_string(),
                failure: ServiceFailure::classify(&response),
            });
        }
        let parsed: SearchResponse =
            serde_json::from_str(&response.body).map_err(|source| ProbeError::Json {
                station: station.to_string(),
                source,
            })?;
        Ok(parsed.results.into_iter().next())
    }
}

/// The station's own coverage, capped at today.
fn station_coverage(
    station: &str,
    result: &SearchResult,
    today: chrono::NaiveDate,
) -> Result<DateSpan, ProbeError> {
    let start = result
        .start()
        .ok_or_else(|| malformed(station, "missing or invalid station start date"))?;
    let end = result
        .end()
        .ok_or_else(|| malformed(station, "missing or invalid station end date"))?;
    Ok(DateSpan::new(start, end.min(today)))
}

fn malformed(station: &str, reason: &str) -> ProbeError {
    ProbeError::MalformedResponse {
        station: station.to_string(),
        reason: reason.to_string(),
    }
}
