//! Fetches the data payload for a probed station and turns it into a file.
//!
//! Steps, in order: request the CSV for the effective range, parse it into a
//! [`Dataset`] holding just the selected variables, attach global and
//! per-variable attributes, then write it under the output directory.

pub mod attributes;
pub mod error;
pub mod frame;
pub mod netcdf_file;
pub mod output;
pub mod writer;

pub use error::RetrievalError;
pub use netcdf_file::NetcdfWriter;
pub use writer::DatasetWriter;

use crate::service::endpoints::{request_url, Endpoint};
use crate::service::{ServiceConfig, ServiceFailure};
use crate::transport::Transport;
use crate::types::availability::AvailabilityResult;
use crate::types::clock::Clock;
use crate::types::dataset::Dataset;
use crate::types::query::StationQuery;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Retrieves, assembles and persists one station at a time.
pub struct Retriever<'a> {
    transport: &'a dyn Transport,
    clock: &'a dyn Clock,
    config: &'a ServiceConfig,
    writer: &'a dyn DatasetWriter,
}

impl<'a> Retriever<'a> {
    pub fn new(
        transport: &'a dyn Transport,
        clock: &'a dyn Clock,
        config: &'a ServiceConfig,
        writer: &'a dyn DatasetWriter,
    ) -> Self {
        Self {
            transport,
            clock,
            config,
            writer,
        }
    }

    /// Downloads the effective range and builds the annotated dataset.
    ///
    /// # Errors
    ///
    /// * [`RetrievalError::Service`] for a non-success response.
    /// * [`RetrievalError::EmptyPayload`] when the response has no rows.
    /// * [`RetrievalError::Catalog`] when a variable has no catalog entry.
    /// * Parsing errors from [`frame::parse_observations`].
    pub fn fetch(
        &self,
        query: &StationQuery,
        availability: &AvailabilityResult,
    ) -> Result<Dataset, RetrievalError> {
        let station = query.station();
        let url = request_url(self.config, Endpoint::Data, station, availability.effective)?;
        debug!("Requesting data for {} over {}", station, availability.effective);

        let response = self.transport.get(&url)?;
        if !response.is_success() {
            return Err(RetrievalError::Service {
                station: station.to_string(),
                failure: ServiceFailure::classify(&response),
            });
        }

        let mut dataset =
            frame::parse_observations(station, &response.body, &availability.variables)?;
        attributes::annotate_variables(&mut dataset, query.mode())?;
        dataset.attributes = attributes::global_attributes(
            station,
            availability,
            &self.config.dataset,
            self.clock.now(),
        );
        Ok(dataset)
    }

    /// Writes `dataset` into `output_dir`, creating the directory if needed.
    /// Returns the path of the written file.
    pub fn persist(
        &self,
        dataset: &Dataset,
        query: &StationQuery,
        availability: &AvailabilityResult,
        output_dir: &Path,
    ) -> Result<PathBuf, RetrievalError> {
        let dir = output::ensure_output_dir(output_dir)?;
        let path = dir.join(output::output_file_name(
            query.station(),
            &self.config.dataset,
            availability.effective,
            query.mode(),
            self.writer.extension(),
        ));
        self.writer.write(dataset, &path)?;
        info!("Saved {}", path.display());
        Ok(path)
    }

    /// [`Retriever::fetch`] followed by [`Retriever::persist`].
    pub fn retrieve(
        &self,
        query: &StationQuery,
        availability: &AvailabilityResult,
        output_dir: &Path,
    ) -> Result<PathBuf, RetrievalError> {
        let dataset = self.fetch(query, availability)?;
        self.persist(&dataset, query, availability, output_dir)
    }
}
