//! Response model of the search endpoint. Only the fields the prober reads are
//! modelled; everything else in the payload is ignored.

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub data_types: Vec<DataTypeRef>,
    pub location: Option<Location>,
    #[serde(default)]
    pub stations: Vec<StationRef>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataTypeRef {
    pub id: String,
}

/// GeoJSON point, `[longitude, latitude]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationRef {
    pub name: Option<String>,
}

impl SearchResult {
    pub fn data_type_ids(&self) -> Vec<String> {
        self.data_types.iter().map(|d| d.id.clone()).collect()
    }

    /// `(longitude, latitude)` if the location is present and well formed.
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        match self.location.as_ref()?.coordinates.as_slice() {
            [lon, lat, ..] => Some((*lon, *lat)),
            _ => None,
        }
    }

    pub fn station_name(&self) -> Option<&str> {
        self.stations.first()?.name.as_deref()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_service_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_service_date)
    }
}

/// Parses the date part of a service timestamp such as `1869-01-01T00:00:00`.
pub fn parse_service_date(value: &str) -> Option<NaiveDate> {
    let date = value.split('T').next()?.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTRAL_PARK: &str = r#"{
        "startDate": "1869-01-01T00:00:00",
        "endDate": "2024-10-14T00:00:00",
        "results": [{
            "startDate": "1869-01-01T00:00:00",
            "endDate": "2024-10-14T00:00:00",
            "location": {"type": "Point", "coordinates": [-73.96925, 40.77898]},
            "stations": [{"name": "NY CITY CENTRAL PARK, NY US", "id": "USW00094728"}],
            "dataTypes": [
                {"id": "PRCP", "name": "Precipitation"},
                {"id": "TMAX"},
                {"id": "AWND"}
            ]
        }],
        "count": 1
    }"#;

    #[test]
    fn test_parse_search_result() {
        let response: SearchResponse = serde_json::from_str(CENTRAL_PARK).unwrap();
        let result = &response.results[0];
        assert_eq!(result.data_type_ids(), ["PRCP", "TMAX", "AWND"]);
        assert_eq!(result.lon_lat(), Some((-73.96925, 40.77898)));
        assert_eq!(result.station_name(), Some("NY CITY CENTRAL PARK, NY US"));
        assert_eq!(result.start(), NaiveDate::from_ymd_opt(1869, 1, 1));
        assert_eq!(result.end(), NaiveDate::from_ymd_opt(2024, 10, 14));
    }

    #[test]
    fn test_empty_results() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"results": [], "count": 0}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_parse_service_date_variants() {
        assert_eq!(parse_service_date("2020-01-05"), NaiveDate::from_ymd_opt(2020, 1, 5));
        assert_eq!(
            parse_service_date("2020-01-05T12:30:00"),
            NaiveDate::from_ymd_opt(2020, 1, 5)
        );
        assert_eq!(parse_service_date("05/01/2020"), None);
    }
}
