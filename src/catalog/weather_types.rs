//! Weather-type occurrence flags: `wt01`..`wt22` observed at the station and
//! the `wv` subset observed in its vicinity.

use super::VariableAttributes;

/// Phenomena behind `wt01`..`wt22`, indexed by code number minus one.
pub const PHENOMENA: [&str; 22] = [
    "fog, ice fog, or freezing fog (may include heavy fog)",
    "heavy fog or heavy freezing fog (not always distinguished from fog)",
    "thunder",
    "ice pellets, sleet, snow pellets, or small hail",
    "hail (may include small hail)",
    "glaze or rime",
    "dust, volcanic ash, blowing dust, blowing sand, or blowing obstruction",
    "smoke or haze",
    "blowing or drifting snow",
    "tornado, waterspout, or funnel cloud",
    "high or damaging winds",
    "blowing spray",
    "mist",
    "drizzle",
    "freezing drizzle",
    "rain (may include freezing rain, drizzle, and freezing drizzle)",
    "freezing rain",
    "snow, snow pellets, snow grains, or ice crystals",
    "unknown source of precipitation",
    "not used",
    "ground fog",
    "ice fog or freezing fog",
];

/// Code numbers that also exist as in-vicinity (`wv`) flags.
pub const VICINITY_NUMBERS: [usize; 5] = [1, 3, 7, 18, 20];

/// Where the phenomenon was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Proximity {
    AtStation,
    InVicinity,
}

impl Proximity {
    fn prefix(&self) -> &'static str {
        match self {
            Proximity::AtStation => "wt",
            Proximity::InVicinity => "wv",
        }
    }
}

/// A parsed weather-type code such as `wt03` or `wv18`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeatherTypeCode {
    pub proximity: Proximity,
    /// 1-based code number.
    pub number: usize,
}

impl WeatherTypeCode {
    /// Parses a lower-case code, returning `None` for anything outside the family.
    pub fn parse(code: &str) -> Option<Self> {
        let proximity = match code.get(..2)? {
            "wt" => Proximity::AtStation,
            "wv" => Proximity::InVicinity,
            _ => return None,
        };
        let digits = code.get(2..)?;
        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: usize = digits.parse().ok()?;
        let valid = match proximity {
            Proximity::AtStation => (1..=PHENOMENA.len()).contains(&number),
            Proximity::InVicinity => VICINITY_NUMBERS.contains(&number),
        };
        valid.then_some(Self { proximity, number })
    }

    pub fn code(&self) -> String {
        format!("{}{:02}", self.proximity.prefix(), self.number)
    }

    pub fn phenomenon(&self) -> &'static str {
        PHENOMENA[self.number - 1]
    }

    pub fn attributes(&self) -> VariableAttributes {
        let long_name = match self.proximity {
            Proximity::AtStation => format!("occurrence of {}", self.phenomenon()),
            Proximity::InVicinity => {
                format!("occurrence of {} in the vicinity", self.phenomenon())
            }
        };
        VariableAttributes {
            units: "1".to_string(),
            standard_name: "status_flag".to_string(),
            long_name,
            cell_methods: None,
            qualifiers: vec![("flag_meanings".to_string(), "occurred".to_string())],
        }
    }
}

/// All weather-type codes: the 22 `wt` flags followed by the 5 `wv` flags.
pub fn family() -> impl Iterator<Item = WeatherTypeCode> {
    let at_station = (1..=PHENOMENA.len()).map(|number| WeatherTypeCode {
        proximity: Proximity::AtStation,
        number,
    });
    let in_vicinity = VICINITY_NUMBERS.into_iter().map(|number| WeatherTypeCode {
        proximity: Proximity::InVicinity,
        number,
    });
    at_station.chain(in_vicinity)
}

pub fn codes() -> impl Iterator<Item = String> {
    family().map(|code| code.code())
}

pub(crate) fn lookup(code: &str) -> Option<VariableAttributes> {
    WeatherTypeCode::parse(code).map(|parsed| parsed.attributes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_sizes() {
        let all: Vec<String> = codes().collect();
        let wt = all.iter().filter(|c| c.starts_with("wt")).count();
        let wv: Vec<&String> = all.iter().filter(|c| c.starts_with("wv")).collect();
        assert_eq!(wt, 22);
        assert_eq!(wv, ["wv01", "wv03", "wv07", "wv18", "wv20"]);
    }

    #[test]
    fn test_vicinity_reuses_station_phenomena() {
        for number in VICINITY_NUMBERS {
            let wt = WeatherTypeCode::parse(&format!("wt{number:02}")).unwrap();
            let wv = WeatherTypeCode::parse(&format!("wv{number:02}")).unwrap();
            assert_eq!(wt.phenomenon(), wv.phenomenon());
            assert!(wv.attributes().long_name.ends_with("in the vicinity"));
        }
    }

    #[test]
    fn test_placeholder_at_twenty() {
        assert_eq!(PHENOMENA[19], "not used");
        assert_eq!(WeatherTypeCode::parse("wt20").unwrap().phenomenon(), "not used");
    }

    #[test]
    fn test_parse_rejects_out_of_family_codes() {
        assert!(WeatherTypeCode::parse("wt00").is_none());
        assert!(WeatherTypeCode::parse("wt23").is_none());
        assert!(WeatherTypeCode::parse("wv02").is_none());
        assert!(WeatherTypeCode::parse("wt1").is_none());
        assert!(WeatherTypeCode::parse("wt+1").is_none());
        assert!(WeatherTypeCode::parse("wx01").is_none());
    }

    #[test]
    fn test_thunder() {
        let attrs = lookup("wt03").unwrap();
        assert_eq!(attrs.long_name, "occurrence of thunder");
        assert_eq!(attrs.units, "1");
    }
}
