//! Writes datasets as netCDF classic 64-bit-offset files through `netcdf3`.
//!
//! One fixed dimension, `date`, with a coordinate variable of the same name;
//! every weather element is an f64 variable over it.

use super::error::RetrievalError;
use super::writer::DatasetWriter;
use crate::types::dataset::{AttributeValue, Attributes, Dataset, TIME_DIMENSION};
use chrono::NaiveDate;
use netcdf3::{DataSet, FileWriter, InvalidDataSet, Version, WriteError};
use std::path::Path;

pub const TIME_UNITS: &str = "days since 1970-01-01";
pub const CALENDAR: &str = "proleptic_gregorian";
pub const FILL_VALUE: f64 = f64::NAN;

/// Writes `.nc` files in the netCDF classic 64-bit-offset format.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetcdfWriter;

impl DatasetWriter for NetcdfWriter {
    fn write(&self, dataset: &Dataset, path: &Path) -> Result<(), RetrievalError> {
        let write_error = |reason: String| RetrievalError::Write {
            path: path.to_path_buf(),
            reason,
        };
        let definition = define(dataset).map_err(|e| write_error(e.to_string()))?;
        write_values(&definition, dataset, path).map_err(|e| write_error(format!("{e:?}")))
    }
}

/// Days since 1970-01-01 for each date of the time index.
pub fn time_values(time: &[NaiveDate]) -> Vec<f64> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    time.iter()
        .map(|date| date.signed_duration_since(epoch).num_days() as f64)
        .collect()
}

/// Attributes of the `date` coordinate variable.
pub fn time_attributes() -> Attributes {
    let mut attrs = Attributes::new();
    attrs.set("standard_name", "time");
    attrs.set("long_name", "date");
    attrs.set("units", TIME_UNITS);
    attrs.set("calendar", CALENDAR);
    attrs.set("axis", "T");
    attrs
}

fn add_variable_attributes(
    definition: &mut DataSet,
    variable: &str,
    attributes: &Attributes,
) -> Result<(), InvalidDataSet> {
    for (name, value) in attributes.iter() {
        match value {
            AttributeValue::Text(text) => definition.add_var_attr_string(variable, name, text)?,
            AttributeValue::Double(value) => definition.add_var_attr_f64(variable, name, vec![*value])?,
        }
    }
    Ok(())
}

/// Header of the file: the dimension, global attributes and every variable
/// with its attributes.
fn define(dataset: &Dataset) -> Result<DataSet, InvalidDataSet> {
    let mut definition = DataSet::new();
    definition.add_fixed_dim(TIME_DIMENSION, dataset.len())?;

    for (name, value) in dataset.attributes.iter() {
        match value {
            AttributeValue::Text(text) => definition.add_global_attr_string(name, text)?,
            AttributeValue::Double(value) => definition.add_global_attr_f64(name, vec![*value])?,
        }
    }

    definition.add_var_f64(TIME_DIMENSION, &[TIME_DIMENSION])?;
    add_variable_attributes(&mut definition, TIME_DIMENSION, &time_attributes())?;

    for variable in &dataset.variables {
        definition.add_var_f64(&variable.name, &[TIME_DIMENSION])?;
        definition.add_var_attr_f64(&variable.name, "_FillValue", vec![FILL_VALUE])?;
        add_variable_attributes(&mut definition, &variable.name, &variable.attributes)?;
    }
    Ok(definition)
}

fn write_values(definition: &DataSet, dataset: &Dataset, path: &Path) -> Result<(), WriteError> {
    let mut writer = FileWriter::open(path)?;
    writer.set_def(definition, Version::Offset64Bit, 0)?;
    writer.write_var_f64(TIME_DIMENSION, &time_values(&dataset.time))?;
    for variable in &dataset.variables {
        let values: Vec<f64> = variable
            .values
            .iter()
            .map(|v| v.unwrap_or(FILL_VALUE))
            .collect();
        writer.write_var_f64(&variable.name, &values)?;
    }
    writer.close()
}
