//! The per-station client: probe, then either report or retrieve and save.

use crate::error::NceiError;
use crate::probe::AvailabilityProber;
use crate::retrieval::{DatasetWriter, NetcdfWriter, Retriever};
use crate::service::endpoints::site_url;
use crate::service::ServiceConfig;
use crate::transport::{HttpTransport, Transport};
use crate::types::availability::{AvailabilityResult, DateSpan};
use crate::types::clock::{Clock, SystemClock};
use crate::types::query::StationQuery;
use bon::bon;
use log::{info, warn};
use std::fmt;
use std::path::PathBuf;

/// What info-only mode reports for a station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationInfo {
    pub station: String,
    pub name: String,
    pub variables: Vec<String>,
    pub longitude: f64,
    pub latitude: f64,
    pub effective: DateSpan,
    pub site_url: String,
}

impl StationInfo {
    fn new(station: &str, availability: AvailabilityResult) -> Self {
        Self {
            station: station.to_string(),
            name: availability.station_name,
            variables: availability.variables,
            longitude: availability.longitude,
            latitude: availability.latitude,
            effective: availability.effective,
            site_url: site_url(station),
        }
    }
}

impl fmt::Display for StationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Station: {}", self.station)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Variables: {}", self.variables.join(", "))?;
        writeln!(f, "Longitude: {}", self.longitude)?;
        writeln!(f, "Latitude: {}", self.latitude)?;
        writeln!(f, "Start date: {}", self.effective.start.format("%Y-%m-%d"))?;
        writeln!(f, "End date: {}", self.effective.end.format("%Y-%m-%d"))?;
        write!(f, "Site URL: {}", self.site_url)
    }
}

/// Result of processing one station successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum StationOutcome {
    /// Info-only mode: the probe result, nothing downloaded.
    Info(StationInfo),
    /// The path of the file that was written.
    Saved(PathBuf),
}

/// Everything a run produced, in station order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub saved: Vec<PathBuf>,
    pub reports: Vec<StationInfo>,
    /// Stations that were skipped, with the reason.
    pub skipped: Vec<(String, NceiError)>,
}

impl RunSummary {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Fetches NCEI daily summaries for a list of stations.
///
/// Every collaborator can be swapped through the builder; unset ones default
/// to the network transport, the system clock, the default [`ServiceConfig`]
/// and the netCDF writer, with files going to the current directory.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use ncei_daily::{NceiClient, NceiError, StationQuery};
///
/// # fn main() -> Result<(), NceiError> {
/// let client = NceiClient::builder().output_dir("data").build()?;
/// let query = StationQuery::builder()
///     .station("USW00094728")
///     .start(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
///     .end(NaiveDate::from_ymd_opt(2020, 1, 31).unwrap())
///     .build();
/// let summary = client.run(&[query]);
/// for path in &summary.saved {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub struct NceiClient {
    transport: Box<dyn Transport>,
    clock: Box<dyn Clock>,
    writer: Box<dyn DatasetWriter>,
    config: ServiceConfig,
    output_dir: PathBuf,
}

#[bon]
impl NceiClient {
    /// # Errors
    ///
    /// Returns [`NceiError::Transport`] if no transport was given and the
    /// HTTP client cannot be built.
    #[builder]
    pub fn new(
        transport: Option<Box<dyn Transport>>,
        clock: Option<Box<dyn Clock>>,
        writer: Option<Box<dyn DatasetWriter>>,
        config: Option<ServiceConfig>,
        #[builder(into)] output_dir: Option<PathBuf>,
    ) -> Result<Self, NceiError> {
        let config = config.unwrap_or_default();
        let transport = match transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new(config.timeout)?),
        };
        Ok(Self {
            transport,
            clock: clock.unwrap_or_else(|| Box::new(SystemClock)),
            writer: writer.unwrap_or_else(|| Box::new(NetcdfWriter)),
            config,
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(".")),
        })
    }

    /// Today according to the client's clock.
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Probes a station without downloading its data.
    pub fn probe(&self, query: &StationQuery) -> Result<AvailabilityResult, NceiError> {
        let prober = AvailabilityProber::new(self.transport.as_ref(), self.clock.as_ref(), &self.config);
        Ok(prober.probe(query)?)
    }

    /// Processes one station: probe, then report it (info-only) or retrieve
    /// and save it.
    ///
    /// # Errors
    ///
    /// Any probe, retrieval, catalog or transport failure for this station.
    pub fn process(&self, query: &StationQuery) -> Result<StationOutcome, NceiError> {
        let availability = self.probe(query)?;
        if query.info_only() {
            return Ok(StationOutcome::Info(StationInfo::new(query.station(), availability)));
        }

        info!("Retrieving data from {}...", query.station());
        let retriever = Retriever::new(
            self.transport.as_ref(),
            self.clock.as_ref(),
            &self.config,
            self.writer.as_ref(),
        );
        let path = retriever.retrieve(query, &availability, &self.output_dir)?;
        Ok(StationOutcome::Saved(path))
    }

    /// Processes every query in order. A failing station is logged and
    /// skipped; it never stops the run.
    pub fn run(&self, queries: &[StationQuery]) -> RunSummary {
        let mut summary = RunSummary::default();
        for query in queries {
            match self.process(query) {
                Ok(StationOutcome::Info(report)) => summary.reports.push(report),
                Ok(StationOutcome::Saved(path)) => summary.saved.push(path),
                Err(e) => {
                    report_skip(query.station(), &e);
                    summary.skipped.push((query.station().to_string(), e));
                }
            }
        }
        summary
    }
}

fn report_skip(station: &str, error: &NceiError) {
    match error.service_failure() {
        Some(failure) => {
            warn!("Failed to retrieve data from {}.", station);
            for line in failure.diagnostics() {
                warn!("{}", line);
            }
        }
        None => warn!("Skipping {}: {}", station, error),
    }
    if error.is_catalog_miss() {
        warn!("The variable catalog does not cover every element reported for {}", station);
    }
}
