//! Describes what the user asked for: one station, a date range and a variable mode.

use chrono::NaiveDate;
use std::fmt;

/// Selects which weather elements are requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VariableMode {
    /// Only the five core elements (TMIN, TMAX, PRCP, SNOW, SNWD).
    #[default]
    Core,
    /// Every element the service reports for the station.
    All,
}

impl VariableMode {
    /// Suffix used in output file names.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            VariableMode::Core => "core-vars",
            VariableMode::All => "all-vars",
        }
    }
}

impl fmt::Display for VariableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_suffix())
    }
}

/// A request for a single station, built once from user input.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ncei_daily::{StationQuery, VariableMode};
///
/// let query = StationQuery::builder()
///     .station("USW00094728")
///     .start(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
///     .end(NaiveDate::from_ymd_opt(2020, 1, 5).unwrap())
///     .build();
/// assert_eq!(query.mode(), VariableMode::Core);
/// assert!(!query.info_only());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct StationQuery {
    #[builder(into)]
    station: String,
    start: NaiveDate,
    end: NaiveDate,
    #[builder(default)]
    mode: VariableMode,
    #[builder(default)]
    info_only: bool,
}

impl StationQuery {
    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn mode(&self) -> VariableMode {
        self.mode
    }

    pub fn info_only(&self) -> bool {
        self.info_only
    }
}
