//! The five core elements of the daily summaries dataset.

use super::{Entry, ON_SCALE};

/// Core elements in the order they are requested and written.
pub const CORE_CODES: [&str; 5] = ["TMIN", "TMAX", "PRCP", "SNOW", "SNWD"];

pub(crate) static CORE_VARIABLES: &[Entry] = &[
    Entry {
        code: "tmin",
        units: "degrees Celsius",
        standard_name: "air_temperature",
        long_name: "daily minimum air temperature",
        cell_methods: Some("time: minimum (interval: 1 day)"),
        qualifiers: &[ON_SCALE],
    },
    Entry {
        code: "tmax",
        units: "degrees Celsius",
        standard_name: "air_temperature",
        long_name: "daily maximum air temperature",
        cell_methods: Some("time: maximum (interval: 1 day)"),
        qualifiers: &[ON_SCALE],
    },
    Entry {
        code: "prcp",
        units: "mm",
        standard_name: "lwe_thickness_of_precipitation_amount",
        long_name: "daily total precipitation",
        cell_methods: Some("time: sum (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "snow",
        units: "mm",
        standard_name: "thickness_of_snowfall_amount",
        long_name: "daily total snowfall",
        cell_methods: Some("time: sum (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "snwd",
        units: "mm",
        standard_name: "surface_snow_thickness",
        long_name: "daily snow depth",
        cell_methods: Some("time: point"),
        qualifiers: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_codes_match_table_order() {
        let table: Vec<String> = CORE_VARIABLES
            .iter()
            .map(|e| e.code.to_ascii_uppercase())
            .collect();
        assert_eq!(table, CORE_CODES);
    }
}
