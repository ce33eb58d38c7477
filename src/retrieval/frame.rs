//! Turns the CSV payload of the data endpoint into per-variable series.

use super::error::RetrievalError;
use crate::types::dataset::{Attributes, DataVariable, Dataset};
use chrono::NaiveDate;
use polars::prelude::*;
use std::io::Cursor;

/// Name of the date column in the service's CSV output.
pub const DATE_COLUMN: &str = "DATE";

/// Reads every column as text so that sparsely populated elements are not
/// mistyped by schema inference; values are converted afterwards.
fn read_csv(station: &str, body: &str) -> Result<DataFrame, RetrievalError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(body.as_bytes().to_vec()))
        .finish()
        .map_err(|source| RetrievalError::CsvParse {
            station: station.to_string(),
            source,
        })
}

fn parse_value(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
}

/// Parses the payload into a [`Dataset`] holding the date index and exactly
/// the requested `variables` (upper-case service codes), lower-cased.
/// Attributes are left empty. Rows keep the order the service returned them
/// in; nothing is sorted, filled or resampled.
///
/// # Errors
///
/// * [`RetrievalError::EmptyPayload`] if the payload has no rows.
/// * [`RetrievalError::MissingColumn`] if the date column or a requested
///   variable column is absent.
/// * [`RetrievalError::InvalidDate`] if a date does not parse as `YYYY-MM-DD`.
pub fn parse_observations(
    station: &str,
    body: &str,
    variables: &[String],
) -> Result<Dataset, RetrievalError> {
    if body.trim().is_empty() {
        return Err(RetrievalError::EmptyPayload {
            station: station.to_string(),
        });
    }

    let df = read_csv(station, body)?;
    if df.height() == 0 {
        return Err(RetrievalError::EmptyPayload {
            station: station.to_string(),
        });
    }

    let wanted: Vec<&str> = std::iter::once(DATE_COLUMN)
        .chain(variables.iter().map(String::as_str))
        .collect();
    for name in &wanted {
        if df.column(name).is_err() {
            return Err(RetrievalError::MissingColumn {
                station: station.to_string(),
                column: name.to_string(),
            });
        }
    }

    // Drop whatever else the service sent (STATION, attribute columns, ...).
    let selected = df
        .lazy()
        .select(wanted.iter().map(|name| col(*name)).collect::<Vec<_>>())
        .collect()
        .map_err(|source| RetrievalError::CsvParse {
            station: station.to_string(),
            source,
        })?;

    let text_column = |name: &str| -> Result<Vec<Option<String>>, RetrievalError> {
        let column = selected
            .column(name)
            .and_then(|c| c.str())
            .map_err(|source| RetrievalError::CsvParse {
                station: station.to_string(),
                source,
            })?;
        Ok(column
            .into_iter()
            .map(|value| value.map(str::to_string))
            .collect())
    };

    let time = text_column(DATE_COLUMN)?
        .into_iter()
        .map(|raw| {
            raw.as_deref()
                .map(str::trim)
                .and_then(|value| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
                .ok_or_else(|| RetrievalError::InvalidDate {
                    station: station.to_string(),
                    value: raw.unwrap_or_default(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let variables = variables
        .iter()
        .map(|name| {
            let values = text_column(name)?
                .iter()
                .map(|raw| parse_value(raw.as_deref()))
                .collect();
            Ok(DataVariable {
                name: name.to_ascii_lowercase(),
                values,
                attributes: Attributes::new(),
            })
        })
        .collect::<Result<Vec<_>, RetrievalError>>()?;

    Ok(Dataset {
        time,
        variables,
        attributes: Attributes::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = "\"STATION\",\"DATE\",\"PRCP\",\"SNOW\",\"SNWD\",\"TMAX\",\"TMIN\",\"PRCP_ATTRIBUTES\"\n\
\"USW00094728\",\"2020-01-01\",\" 0.0\",\"0\",\"0\",\"   3.9\",\"  -3.3\",\",,W,2400\"\n\
\"USW00094728\",\"2020-01-02\",\"0.0\",\"0\",\"0\",\"8.9\",\"1.7\",\",,W,2400\"\n\
\"USW00094728\",\"2020-01-03\",\"3.8\",\"\",\"0\",\"10.0\",\"5.0\",\",,W,2400\"\n";

    fn vars(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selects_only_requested_columns() {
        let dataset = parse_observations("USW00094728", PAYLOAD, &vars(&["TMIN", "TMAX", "SNOW"])).unwrap();
        assert_eq!(dataset.variable_names(), ["tmin", "tmax", "snow"]);
        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.time,
            [
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2020, 1, 3).unwrap(),
            ]
        );
        let tmin = dataset.variable("tmin").unwrap();
        assert_eq!(tmin.values, [Some(-3.3), Some(1.7), Some(5.0)]);
        let snow = dataset.variable("snow").unwrap();
        assert_eq!(snow.values, [Some(0.0), Some(0.0), None]);
    }

    #[test]
    fn test_header_only_payload_is_empty() {
        let err = parse_observations("X", "\"STATION\",\"DATE\",\"TMIN\"\n", &vars(&["TMIN"])).unwrap_err();
        assert!(matches!(err, RetrievalError::EmptyPayload { .. }));

        let err = parse_observations("X", "  \n", &vars(&["TMIN"])).unwrap_err();
        assert!(matches!(err, RetrievalError::EmptyPayload { .. }));
    }

    #[test]
    fn test_missing_column_is_reported() {
        let err = parse_observations("X", PAYLOAD, &vars(&["TMIN", "AWND"])).unwrap_err();
        assert!(matches!(err, RetrievalError::MissingColumn { ref column, .. } if column == "AWND"));
    }

    #[test]
    fn test_invalid_date() {
        let payload = "\"DATE\",\"TMIN\"\n\"01/02/2020\",\"1.0\"\n";
        let err = parse_observations("X", payload, &vars(&["TMIN"])).unwrap_err();
        assert!(matches!(err, RetrievalError::InvalidDate { ref value, .. } if value == "01/02/2020"));
    }

    #[test]
    fn test_service_order_is_kept() {
        let payload = "\"DATE\",\"TMIN\"\n\"2020-01-03\",\"1.0\"\n\"2020-01-01\",\"2.0\"\n";
        let dataset = parse_observations("X", payload, &vars(&["TMIN"])).unwrap();
        assert_eq!(dataset.time[0], NaiveDate::from_ymd_opt(2020, 1, 3).unwrap());
        assert_eq!(dataset.time[1], NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
