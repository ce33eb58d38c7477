//! Descriptive metadata attached to an assembled dataset.

use crate::catalog;
use crate::catalog::error::CatalogError;
use crate::service::endpoints::site_url;
use crate::types::availability::AvailabilityResult;
use crate::types::dataset::{Attributes, Dataset};
use crate::types::query::VariableMode;
use chrono::NaiveDateTime;

pub const ACCESS_METHOD: &str = "NCEI Data Service API (https://www.ncei.noaa.gov/support/access-data-service-api-user-documentation)";

/// File-level provenance: station identity and location, dataset, the
/// effective date range and when the data was accessed.
pub fn global_attributes(
    station: &str,
    availability: &AvailabilityResult,
    dataset_name: &str,
    accessed: NaiveDateTime,
) -> Attributes {
    let mut attrs = Attributes::new();
    attrs.set("station", station);
    attrs.set("station_name", availability.station_name.as_str());
    attrs.set("site_url", site_url(station));
    attrs.set("station_longitude (deg E)", availability.longitude);
    attrs.set("station_latitude (deg N)", availability.latitude);
    attrs.set("dataset", dataset_name);
    attrs.set(
        "start_date (YYYY-MM-DD)",
        availability.effective.start.format("%Y-%m-%d").to_string(),
    );
    attrs.set(
        "end_date (YYYY-MM-DD)",
        availability.effective.end.format("%Y-%m-%d").to_string(),
    );
    attrs.set("accessed (YYYY-MM-DD HH:MM:SS)", accessed.format("%Y-%m-%d %H:%M:%S").to_string());
    attrs.set("access_method", ACCESS_METHOD);
    attrs
}

/// Copies catalog metadata onto every variable of `dataset`.
///
/// # Errors
///
/// Fails on the first variable the catalog does not know in `mode`, leaving
/// earlier variables annotated.
pub fn annotate_variables(dataset: &mut Dataset, mode: VariableMode) -> Result<(), CatalogError> {
    for variable in &mut dataset.variables {
        variable.attributes = catalog::lookup(&variable.name, mode)?.to_attributes();
    }
    Ok(())
}
