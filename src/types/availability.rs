//! The outcome of probing a station: which variables exist and over which dates.

use chrono::NaiveDate;
use std::fmt;

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for DateSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Non-fatal observations made while probing a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityNote {
    /// Some core variables are absent; processing continues with the rest.
    MissingVariables {
        missing: Vec<String>,
        available: Vec<String>,
    },
    /// The requested start preceded the station's first observation.
    StartAdjusted(NaiveDate),
    /// The requested end followed the station's last observation.
    EndAdjusted(NaiveDate),
}

impl fmt::Display for AvailabilityNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityNote::MissingVariables { missing, available } => write!(
                f,
                "Elements {} not available. Available elements: {}",
                missing.join(", "),
                available.join(", ")
            ),
            AvailabilityNote::StartAdjusted(date) => {
                write!(f, "Adjusted start date to {date} based on available data")
            }
            AvailabilityNote::EndAdjusted(date) => {
                write!(f, "Adjusted end date to {date} based on available data")
            }
        }
    }
}

/// Everything the retrieval step needs to know about a station.
///
/// Produced by [`crate::AvailabilityProber::probe`] and consumed right away.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityResult {
    /// Upstream variable codes (upper case) to retrieve, in catalog order for
    /// core mode or in service order for all-variables mode.
    pub variables: Vec<String>,
    pub longitude: f64,
    pub latitude: f64,
    pub station_name: String,
    /// The requested range, narrowed to the station's coverage.
    pub effective: DateSpan,
    pub notes: Vec<AvailabilityNote>,
}
