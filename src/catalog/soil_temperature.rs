//! Soil temperature family: daily minimum (`sn`) and maximum (`sx`) soil
//! temperature for every combination of ground cover and depth.
//!
//! Codes are written as prefix + 2-digit ground-cover index + 2-digit depth
//! index, both 1-based: `sn0101` is the minimum under unknown cover at 5 cm,
//! `sx0907` the maximum under bare muck at 180 cm. The service's compact form
//! (`sn32`, ground-cover digit 0-8 and depth digit 1-7) resolves to the same
//! record.

use super::{VariableAttributes, ON_SCALE};

pub const GROUND_COVERS: [&str; 9] = [
    "unknown",
    "grass",
    "fallow",
    "bare ground",
    "brome grass",
    "sod",
    "straw mulch",
    "grass muck",
    "bare muck",
];

pub const DEPTHS_CM: [u32; 7] = [5, 10, 20, 50, 100, 150, 180];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extremum {
    Minimum,
    Maximum,
}

impl Extremum {
    fn prefix(&self) -> &'static str {
        match self {
            Extremum::Minimum => "sn",
            Extremum::Maximum => "sx",
        }
    }

    fn word(&self) -> &'static str {
        match self {
            Extremum::Minimum => "minimum",
            Extremum::Maximum => "maximum",
        }
    }
}

/// A parsed soil temperature code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoilTemperatureCode {
    pub extremum: Extremum,
    /// 1-based index into [`GROUND_COVERS`].
    pub ground_cover: usize,
    /// 1-based index into [`DEPTHS_CM`].
    pub depth: usize,
}

impl SoilTemperatureCode {
    /// Parses either the 6-character form (`sn0203`) or the service's compact
    /// 4-character form (`sn13`). Input must be lower case.
    pub fn parse(code: &str) -> Option<Self> {
        let extremum = match code.get(..2)? {
            "sn" => Extremum::Minimum,
            "sx" => Extremum::Maximum,
            _ => return None,
        };
        let digits = code.get(2..)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let (ground_cover, depth) = match digits.len() {
            4 => (digits[..2].parse().ok()?, digits[2..].parse().ok()?),
            2 => {
                let cover: usize = digits[..1].parse().ok()?;
                (cover + 1, digits[1..].parse().ok()?)
            }
            _ => return None,
        };
        let in_range = (1..=GROUND_COVERS.len()).contains(&ground_cover)
            && (1..=DEPTHS_CM.len()).contains(&depth);
        in_range.then_some(Self {
            extremum,
            ground_cover,
            depth,
        })
    }

    pub fn code(&self) -> String {
        format!(
            "{}{:02}{:02}",
            self.extremum.prefix(),
            self.ground_cover,
            self.depth
        )
    }

    pub fn ground_cover_name(&self) -> &'static str {
        GROUND_COVERS[self.ground_cover - 1]
    }

    pub fn depth_cm(&self) -> u32 {
        DEPTHS_CM[self.depth - 1]
    }

    pub fn attributes(&self) -> VariableAttributes {
        let depth = format!("{} cm", self.depth_cm());
        let cover = self.ground_cover_name();
        VariableAttributes {
            units: "degrees Celsius".to_string(),
            standard_name: "soil_temperature".to_string(),
            long_name: format!(
                "daily {} soil temperature at {} depth under {} ground cover",
                self.extremum.word(),
                depth,
                cover
            ),
            cell_methods: Some(format!("time: {} (interval: 1 day)", self.extremum.word())),
            qualifiers: vec![
                ("depth".to_string(), depth),
                ("ground_cover".to_string(), cover.to_string()),
                (ON_SCALE.0.to_string(), ON_SCALE.1.to_string()),
            ],
        }
    }
}

/// All 126 codes, minima first, then by ground cover, then by depth.
pub fn family() -> impl Iterator<Item = SoilTemperatureCode> {
    [Extremum::Minimum, Extremum::Maximum]
        .into_iter()
        .flat_map(|extremum| {
            (1..=GROUND_COVERS.len()).flat_map(move |ground_cover| {
                (1..=DEPTHS_CM.len()).map(move |depth| SoilTemperatureCode {
                    extremum,
                    ground_cover,
                    depth,
                })
            })
        })
}

pub fn codes() -> impl Iterator<Item = String> {
    family().map(|code| code.code())
}

pub(crate) fn lookup(code: &str) -> Option<VariableAttributes> {
    SoilTemperatureCode::parse(code).map(|parsed| parsed.attributes())
}
