//! Static metadata for every weather element the tool can retrieve.
//!
//! The catalog maps a lower-case variable code (`tmin`, `wt03`, `sn0201`, ...)
//! to a [`VariableAttributes`] record carrying CF-style units, standard name,
//! long name and cell method. It has no state and performs no I/O.
//!
//! Which codes resolve depends on the [`VariableMode`]: core mode only knows the
//! five core elements, all-variables mode adds the named secondary elements and
//! the two generated families (weather types and soil temperatures).

pub mod core_elements;
pub mod error;
pub mod extended;
pub mod soil_temperature;
pub mod weather_types;

use crate::types::dataset::Attributes;
use crate::types::query::VariableMode;
use error::CatalogError;

/// CF qualifier attached to absolute temperatures.
pub(crate) const ON_SCALE: (&str, &str) = ("units_metadata", "temperature: on_scale");

/// Descriptive attributes of one weather element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableAttributes {
    pub units: String,
    pub standard_name: String,
    pub long_name: String,
    pub cell_methods: Option<String>,
    /// Extra key/value qualifiers such as `depth`, `ground_cover` or
    /// `measurement_method`.
    pub qualifiers: Vec<(String, String)>,
}

impl VariableAttributes {
    /// Renders the record as per-variable file attributes.
    pub fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.set("units", self.units.as_str());
        attrs.set("standard_name", self.standard_name.as_str());
        attrs.set("long_name", self.long_name.as_str());
        if let Some(cell_methods) = &self.cell_methods {
            attrs.set("cell_methods", cell_methods.as_str());
        }
        for (key, value) in &self.qualifiers {
            attrs.set(key.as_str(), value.as_str());
        }
        attrs
    }
}

/// A row of one of the static tables.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub code: &'static str,
    pub units: &'static str,
    pub standard_name: &'static str,
    pub long_name: &'static str,
    pub cell_methods: Option<&'static str>,
    pub qualifiers: &'static [(&'static str, &'static str)],
}

impl Entry {
    pub(crate) fn attributes(&self) -> VariableAttributes {
        VariableAttributes {
            units: self.units.to_string(),
            standard_name: self.standard_name.to_string(),
            long_name: self.long_name.to_string(),
            cell_methods: self.cell_methods.map(str::to_string),
            qualifiers: self
                .qualifiers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

fn find(table: &'static [Entry], code: &str) -> Option<&'static Entry> {
    table.iter().find(|entry| entry.code == code)
}

/// Looks up the attributes of `code` (case-insensitive) for the given mode.
///
/// # Errors
///
/// Returns [`CatalogError::CatalogMiss`] when the code is unknown for `mode`.
/// In all-variables mode this means the service reported an element the
/// catalog does not know about.
///
/// # Examples
///
/// ```
/// use ncei_daily::{catalog, VariableMode};
///
/// let prcp = catalog::lookup("PRCP", VariableMode::Core).unwrap();
/// assert_eq!(prcp.units, "mm");
/// assert!(catalog::lookup("wt03", VariableMode::Core).is_err());
/// assert!(catalog::lookup("wt03", VariableMode::All).is_ok());
/// ```
pub fn lookup(code: &str, mode: VariableMode) -> Result<VariableAttributes, CatalogError> {
    let code = code.to_ascii_lowercase();

    if let Some(entry) = find(core_elements::CORE_VARIABLES, &code) {
        return Ok(entry.attributes());
    }

    if mode == VariableMode::All {
        if let Some(entry) = find(extended::EXTENDED_VARIABLES, &code) {
            return Ok(entry.attributes());
        }
        if let Some(attrs) = weather_types::lookup(&code) {
            return Ok(attrs);
        }
        if let Some(attrs) = soil_temperature::lookup(&code) {
            return Ok(attrs);
        }
    }

    Err(CatalogError::CatalogMiss { code, mode })
}

/// Every code the catalog resolves in `mode`, lower case.
pub fn all_codes(mode: VariableMode) -> Vec<String> {
    let mut codes: Vec<String> = core_elements::CORE_VARIABLES
        .iter()
        .map(|entry| entry.code.to_string())
        .collect();
    if mode == VariableMode::All {
        codes.extend(
            extended::EXTENDED_VARIABLES
                .iter()
                .map(|entry| entry.code.to_string()),
        );
        codes.extend(weather_types::codes());
        codes.extend(soil_temperature::codes());
    }
    codes
}
