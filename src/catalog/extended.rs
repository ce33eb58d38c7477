//! Named secondary elements, only resolved in all-variables mode.
//!
//! Units assume the service is asked for metric values.

use super::{Entry, ON_SCALE};

pub(crate) static EXTENDED_VARIABLES: &[Entry] = &[
    Entry {
        code: "acmc",
        units: "percent",
        standard_name: "cloud_area_fraction",
        long_name: "average cloudiness midnight to midnight",
        cell_methods: Some("time: mean (interval: 1 day)"),
        qualifiers: &[("measurement_method", "30-second ceilometer data")],
    },
    Entry {
        code: "acmh",
        units: "percent",
        standard_name: "cloud_area_fraction",
        long_name: "average cloudiness midnight to midnight",
        cell_methods: Some("time: mean (interval: 1 day)"),
        qualifiers: &[("measurement_method", "manual observations")],
    },
    Entry {
        code: "acsc",
        units: "percent",
        standard_name: "cloud_area_fraction",
        long_name: "average cloudiness sunrise to sunset",
        cell_methods: Some("time: mean within daylight (interval: 1 day)"),
        qualifiers: &[("measurement_method", "30-second ceilometer data")],
    },
    Entry {
        code: "acsh",
        units: "percent",
        standard_name: "cloud_area_fraction",
        long_name: "average cloudiness sunrise to sunset",
        cell_methods: Some("time: mean within daylight (interval: 1 day)"),
        qualifiers: &[("measurement_method", "manual observations")],
    },
    Entry {
        code: "adpt",
        units: "degrees Celsius",
        standard_name: "dew_point_temperature",
        long_name: "daily average dew point temperature",
        cell_methods: Some("time: mean (interval: 1 day)"),
        qualifiers: &[ON_SCALE],
    },
    Entry {
        code: "aslp",
        units: "hPa",
        standard_name: "air_pressure_at_mean_sea_level",
        long_name: "daily average sea level pressure",
        cell_methods: Some("time: mean (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "astp",
        units: "hPa",
        standard_name: "surface_air_pressure",
        long_name: "daily average station level pressure",
        cell_methods: Some("time: mean (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "awbt",
        units: "degrees Celsius",
        standard_name: "wet_bulb_temperature",
        long_name: "daily average wet bulb temperature",
        cell_methods: Some("time: mean (interval: 1 day)"),
        qualifiers: &[ON_SCALE],
    },
    Entry {
        code: "awdr",
        units: "degree",
        standard_name: "wind_from_direction",
        long_name: "daily average wind direction",
        cell_methods: Some("time: mean (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "awnd",
        units: "m s-1",
        standard_name: "wind_speed",
        long_name: "daily average wind speed",
        cell_methods: Some("time: mean (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "daev",
        units: "1",
        standard_name: "number_of_days",
        long_name: "number of days included in the multiday evaporation total",
        cell_methods: Some("time: sum"),
        qualifiers: &[("counted_variable", "mdev")],
    },
    Entry {
        code: "dapr",
        units: "1",
        standard_name: "number_of_days",
        long_name: "number of days included in the multiday precipitation total",
        cell_methods: Some("time: sum"),
        qualifiers: &[("counted_variable", "mdpr")],
    },
    Entry {
        code: "dasf",
        units: "1",
        standard_name: "number_of_days",
        long_name: "number of days included in the multiday snowfall total",
        cell_methods: Some("time: sum"),
        qualifiers: &[("counted_variable", "mdsf")],
    },
    Entry {
        code: "datn",
        units: "1",
        standard_name: "number_of_days",
        long_name: "number of days included in the multiday minimum temperature",
        cell_methods: Some("time: sum"),
        qualifiers: &[("counted_variable", "mdtn")],
    },
    Entry {
        code: "datx",
        units: "1",
        standard_name: "number_of_days",
        long_name: "number of days included in the multiday maximum temperature",
        cell_methods: Some("time: sum"),
        qualifiers: &[("counted_variable", "mdtx")],
    },
    Entry {
        code: "dawm",
        units: "1",
        standard_name: "number_of_days",
        long_name: "number of days included in the multiday wind movement",
        cell_methods: Some("time: sum"),
        qualifiers: &[("counted_variable", "mdwm")],
    },
    Entry {
        code: "dwpr",
        units: "1",
        standard_name: "number_of_days_with_precipitation",
        long_name: "number of days with non-zero precipitation included in the multiday precipitation total",
        cell_methods: Some("time: sum"),
        qualifiers: &[("counted_variable", "mdpr")],
    },
    Entry {
        code: "evap",
        units: "mm",
        standard_name: "water_evaporation_amount",
        long_name: "daily evaporation of water from evaporation pan",
        cell_methods: Some("time: sum (interval: 1 day)"),
        qualifiers: &[("measurement_method", "evaporation pan")],
    },
    Entry {
        code: "fmtm",
        units: "HHMM",
        standard_name: "time_of_fastest_wind",
        long_name: "time of fastest mile or fastest 1-minute wind",
        cell_methods: None,
        qualifiers: &[],
    },
    Entry {
        code: "frgb",
        units: "cm",
        standard_name: "depth_of_frozen_ground_base",
        long_name: "base of frozen ground layer",
        cell_methods: Some("time: point"),
        qualifiers: &[],
    },
    Entry {
        code: "frgt",
        units: "cm",
        standard_name: "depth_of_frozen_ground_top",
        long_name: "top of frozen ground layer",
        cell_methods: Some("time: point"),
        qualifiers: &[],
    },
    Entry {
        code: "frth",
        units: "cm",
        standard_name: "frozen_ground_thickness",
        long_name: "thickness of frozen ground layer",
        cell_methods: Some("time: point"),
        qualifiers: &[],
    },
    Entry {
        code: "gaht",
        units: "cm",
        standard_name: "river_gauge_height_difference",
        long_name: "difference between river and gauge height",
        cell_methods: Some("time: point"),
        qualifiers: &[],
    },
    Entry {
        code: "mdev",
        units: "mm",
        standard_name: "water_evaporation_amount",
        long_name: "multiday evaporation total",
        cell_methods: Some("time: sum"),
        qualifiers: &[("day_count_variable", "daev")],
    },
    Entry {
        code: "mdpr",
        units: "mm",
        standard_name: "lwe_thickness_of_precipitation_amount",
        long_name: "multiday precipitation total",
        cell_methods: Some("time: sum"),
        qualifiers: &[("day_count_variable", "dapr")],
    },
    Entry {
        code: "mdsf",
        units: "mm",
        standard_name: "thickness_of_snowfall_amount",
        long_name: "multiday snowfall total",
        cell_methods: Some("time: sum"),
        qualifiers: &[("day_count_variable", "dasf")],
    },
    Entry {
        code: "mdtn",
        units: "degrees Celsius",
        standard_name: "air_temperature",
        long_name: "multiday minimum air temperature",
        cell_methods: Some("time: minimum"),
        qualifiers: &[ON_SCALE, ("day_count_variable", "datn")],
    },
    Entry {
        code: "mdtx",
        units: "degrees Celsius",
        standard_name: "air_temperature",
        long_name: "multiday maximum air temperature",
        cell_methods: Some("time: maximum"),
        qualifiers: &[ON_SCALE, ("day_count_variable", "datx")],
    },
    Entry {
        code: "mdwm",
        units: "km",
        standard_name: "wind_movement",
        long_name: "multiday wind movement",
        cell_methods: Some("time: sum"),
        qualifiers: &[("day_count_variable", "dawm")],
    },
    Entry {
        code: "mnpn",
        units: "degrees Celsius",
        standard_name: "evaporation_pan_water_temperature",
        long_name: "daily minimum temperature of water in an evaporation pan",
        cell_methods: Some("time: minimum (interval: 1 day)"),
        qualifiers: &[ON_SCALE],
    },
    Entry {
        code: "mxpn",
        units: "degrees Celsius",
        standard_name: "evaporation_pan_water_temperature",
        long_name: "daily maximum temperature of water in an evaporation pan",
        cell_methods: Some("time: maximum (interval: 1 day)"),
        qualifiers: &[ON_SCALE],
    },
    Entry {
        code: "pgtm",
        units: "HHMM",
        standard_name: "time_of_peak_gust",
        long_name: "peak gust time",
        cell_methods: None,
        qualifiers: &[],
    },
    Entry {
        code: "psun",
        units: "percent",
        standard_name: "percentage_of_possible_sunshine",
        long_name: "daily percent of possible sunshine",
        cell_methods: Some("time: sum (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "rhav",
        units: "percent",
        standard_name: "relative_humidity",
        long_name: "daily average relative humidity",
        cell_methods: Some("time: mean (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "rhmn",
        units: "percent",
        standard_name: "relative_humidity",
        long_name: "daily minimum relative humidity",
        cell_methods: Some("time: minimum (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "rhmx",
        units: "percent",
        standard_name: "relative_humidity",
        long_name: "daily maximum relative humidity",
        cell_methods: Some("time: maximum (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "tavg",
        units: "degrees Celsius",
        standard_name: "air_temperature",
        long_name: "daily average air temperature",
        cell_methods: Some("time: mean (interval: 1 day)"),
        qualifiers: &[ON_SCALE],
    },
    Entry {
        code: "thic",
        units: "mm",
        standard_name: "floating_ice_thickness",
        long_name: "thickness of ice on water",
        cell_methods: Some("time: point"),
        qualifiers: &[],
    },
    Entry {
        code: "tobs",
        units: "degrees Celsius",
        standard_name: "air_temperature",
        long_name: "air temperature at the time of observation",
        cell_methods: Some("time: point"),
        qualifiers: &[ON_SCALE],
    },
    Entry {
        code: "tsun",
        units: "min",
        standard_name: "duration_of_sunshine",
        long_name: "daily total sunshine",
        cell_methods: Some("time: sum (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "wdf1",
        units: "degree",
        standard_name: "wind_from_direction",
        long_name: "direction of fastest 1-minute wind",
        cell_methods: Some("time: point"),
        qualifiers: &[("wind_averaging_period", "1 minute")],
    },
    Entry {
        code: "wdf2",
        units: "degree",
        standard_name: "wind_from_direction",
        long_name: "direction of fastest 2-minute wind",
        cell_methods: Some("time: point"),
        qualifiers: &[("wind_averaging_period", "2 minutes")],
    },
    Entry {
        code: "wdf5",
        units: "degree",
        standard_name: "wind_from_direction",
        long_name: "direction of fastest 5-second wind",
        cell_methods: Some("time: point"),
        qualifiers: &[("wind_averaging_period", "5 seconds")],
    },
    Entry {
        code: "wdfg",
        units: "degree",
        standard_name: "wind_gust_from_direction",
        long_name: "direction of peak wind gust",
        cell_methods: Some("time: point"),
        qualifiers: &[],
    },
    Entry {
        code: "wdfi",
        units: "degree",
        standard_name: "wind_from_direction",
        long_name: "direction of highest instantaneous wind",
        cell_methods: Some("time: point"),
        qualifiers: &[("wind_averaging_period", "instantaneous")],
    },
    Entry {
        code: "wdfm",
        units: "degree",
        standard_name: "wind_from_direction",
        long_name: "fastest mile wind direction",
        cell_methods: Some("time: point"),
        qualifiers: &[("wind_averaging_period", "fastest mile")],
    },
    Entry {
        code: "wdmv",
        units: "km",
        standard_name: "wind_movement",
        long_name: "24-hour wind movement",
        cell_methods: Some("time: sum (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "wesd",
        units: "mm",
        standard_name: "lwe_thickness_of_surface_snow_amount",
        long_name: "water equivalent of snow on the ground",
        cell_methods: Some("time: point"),
        qualifiers: &[],
    },
    Entry {
        code: "wesf",
        units: "mm",
        standard_name: "lwe_thickness_of_snowfall_amount",
        long_name: "water equivalent of snowfall",
        cell_methods: Some("time: sum (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "wsf1",
        units: "m s-1",
        standard_name: "wind_speed",
        long_name: "fastest 1-minute wind speed",
        cell_methods: Some("time: maximum (interval: 1 day)"),
        qualifiers: &[("wind_averaging_period", "1 minute")],
    },
    Entry {
        code: "wsf2",
        units: "m s-1",
        standard_name: "wind_speed",
        long_name: "fastest 2-minute wind speed",
        cell_methods: Some("time: maximum (interval: 1 day)"),
        qualifiers: &[("wind_averaging_period", "2 minutes")],
    },
    Entry {
        code: "wsf5",
        units: "m s-1",
        standard_name: "wind_speed",
        long_name: "fastest 5-second wind speed",
        cell_methods: Some("time: maximum (interval: 1 day)"),
        qualifiers: &[("wind_averaging_period", "5 seconds")],
    },
    Entry {
        code: "wsfg",
        units: "m s-1",
        standard_name: "wind_speed_of_gust",
        long_name: "peak gust wind speed",
        cell_methods: Some("time: maximum (interval: 1 day)"),
        qualifiers: &[],
    },
    Entry {
        code: "wsfi",
        units: "m s-1",
        standard_name: "wind_speed",
        long_name: "highest instantaneous wind speed",
        cell_methods: Some("time: maximum (interval: 1 day)"),
        qualifiers: &[("wind_averaging_period", "instantaneous")],
    },
    Entry {
        code: "wsfm",
        units: "m s-1",
        standard_name: "wind_speed",
        long_name: "fastest mile wind speed",
        cell_methods: Some("time: maximum (interval: 1 day)"),
        qualifiers: &[("wind_averaging_period", "fastest mile")],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiday_totals_point_at_day_counts() {
        for entry in EXTENDED_VARIABLES.iter().filter(|e| e.code.starts_with("md")) {
            let (_, counter) = entry
                .qualifiers
                .iter()
                .find(|(key, _)| *key == "day_count_variable")
                .unwrap_or_else(|| panic!("{} has no day count", entry.code));
            assert!(
                EXTENDED_VARIABLES.iter().any(|e| e.code == *counter),
                "{} points at unknown {}",
                entry.code,
                counter
            );
        }
    }

    #[test]
    fn test_cloud_cover_carries_measurement_method() {
        for code in ["acmc", "acmh", "acsc", "acsh"] {
            let entry = EXTENDED_VARIABLES.iter().find(|e| e.code == code).unwrap();
            assert!(entry
                .qualifiers
                .iter()
                .any(|(key, _)| *key == "measurement_method"));
        }
    }
}
