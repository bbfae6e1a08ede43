// src/lib.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod config;
pub mod error;
pub mod i18n;
pub mod logger;
pub mod projection;
pub mod rendering;

pub use config::FalimConfig;
pub use error::{FalimError, Result};
pub use i18n::{Language, TranslationTable, Translator};
pub use projection::{project, ChartLayout, ChartView, CirclePoint};
pub use rendering::{render_svg, Legend};

// ---------------------------
// ## Enumerations
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries = 0,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// Wheel order. Index 0 is drawn at the top of the chart.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<ZodiacSign> {
        ZodiacSign::ALL.get(index).copied()
    }

    /// Lowercase identifier used by the backend and as translation key.
    pub fn key(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈",
            ZodiacSign::Taurus => "♉",
            ZodiacSign::Gemini => "♊",
            ZodiacSign::Cancer => "♋",
            ZodiacSign::Leo => "♌",
            ZodiacSign::Virgo => "♍",
            ZodiacSign::Libra => "♎",
            ZodiacSign::Scorpio => "♏",
            ZodiacSign::Sagittarius => "♐",
            ZodiacSign::Capricorn => "♑",
            ZodiacSign::Aquarius => "♒",
            ZodiacSign::Pisces => "♓",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
}

impl Planet {
    pub fn iter() -> impl Iterator<Item = Planet> {
        [
            Planet::Sun,
            Planet::Moon,
            Planet::Mercury,
            Planet::Venus,
            Planet::Mars,
            Planet::Jupiter,
        ]
        .iter()
        .copied()
    }

    pub fn key(self) -> &'static str {
        match self {
            Planet::Sun => "sun",
            Planet::Moon => "moon",
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Planet::Sun => "☉",
            Planet::Moon => "☽",
            Planet::Mercury => "☿",
            Planet::Venus => "♀",
            Planet::Mars => "♂",
            Planet::Jupiter => "♃",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum House {
    First = 1,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl House {
    pub fn from_index(index: usize) -> Option<House> {
        match index {
            1 => Some(House::First),
            2 => Some(House::Second),
            3 => Some(House::Third),
            4 => Some(House::Fourth),
            5 => Some(House::Fifth),
            6 => Some(House::Sixth),
            7 => Some(House::Seventh),
            8 => Some(House::Eighth),
            9 => Some(House::Ninth),
            10 => Some(House::Tenth),
            11 => Some(House::Eleventh),
            12 => Some(House::Twelfth),
            _ => None,
        }
    }

    pub fn all() -> impl Iterator<Item = House> {
        (1..=12).filter_map(House::from_index)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Parses the `house_N` keys of the backend's houses mapping.
    pub fn from_key(key: &str) -> Result<House> {
        key.strip_prefix("house_")
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(House::from_index)
            .ok_or_else(|| FalimError::InvalidHouse {
                value: key.to_string(),
            })
    }

    pub fn key(self) -> String {
        format!("house_{}", self.number())
    }
}

impl TryFrom<u8> for House {
    type Error = FalimError;

    fn try_from(value: u8) -> Result<Self> {
        House::from_index(value as usize).ok_or_else(|| FalimError::InvalidHouse {
            value: value.to_string(),
        })
    }
}

impl From<House> for u8 {
    fn from(house: House) -> u8 {
        house.number()
    }
}

// ---------------------------
// ## Structures
// ---------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HouseInfo {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPlacement {
    pub sign: ZodiacSign,
    pub house: House,
    #[serde(default, deserialize_with = "degree_or_zero")]
    pub degree: f64,
}

impl PlanetPlacement {
    /// Degree used for plotting; non-finite values collapse to 0.
    pub fn plot_degree(&self) -> f64 {
        if self.degree.is_finite() {
            self.degree
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AscendantPoint {
    pub sign: ZodiacSign,
    pub degree: f64,
}

impl AscendantPoint {
    /// Degree used for plotting and the legend; non-finite values collapse to 0.
    pub fn plot_degree(&self) -> f64 {
        if self.degree.is_finite() {
            self.degree
        } else {
            0.0
        }
    }
}

/// Natal chart as returned by the reading backend.
///
/// Missing or `null` `houses` and `planets` deserialize to empty maps; such a
/// chart is not renderable and callers show a placeholder instead. Entries
/// with an unknown planet, sign or house are skipped with a warning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BirthChart {
    #[serde(default, with = "house_map")]
    pub houses: BTreeMap<House, HouseInfo>,
    #[serde(default, deserialize_with = "lenient_planets")]
    pub planets: BTreeMap<Planet, PlanetPlacement>,
    #[serde(
        default,
        deserialize_with = "lenient_ascendant",
        skip_serializing_if = "Option::is_none"
    )]
    pub ascendant: Option<AscendantPoint>,
}

impl BirthChart {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn is_renderable(&self) -> bool {
        !self.houses.is_empty() && !self.planets.is_empty()
    }
}

fn degree_or_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

fn lenient_planets<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<Planet, PlanetPlacement>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    let planets = raw
        .into_iter()
        .filter_map(|(key, value)| {
            let planet = serde_json::from_value::<Planet>(serde_json::Value::String(key.clone()));
            let placement = serde_json::from_value::<PlanetPlacement>(value);
            match (planet, placement) {
                (Ok(planet), Ok(placement)) => Some((planet, placement)),
                (Err(err), _) | (_, Err(err)) => {
                    tracing::warn!(planet = %key, error = %err, "skipping planet placement");
                    None
                }
            }
        })
        .collect();
    Ok(planets)
}

fn lenient_ascendant<'de, D>(deserializer: D) -> std::result::Result<Option<AscendantPoint>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(value) => value,
    };
    match serde_json::from_value::<AscendantPoint>(raw) {
        Ok(point) => Ok(Some(point)),
        Err(err) => {
            tracing::warn!(error = %err, "skipping ascendant");
            Ok(None)
        }
    }
}

mod house_map {
    use super::{House, HouseInfo};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(map: &BTreeMap<House, HouseInfo>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(map.iter().map(|(house, info)| (house.key(), info)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<House, HouseInfo>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<BTreeMap<String, serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
        let houses = raw
            .into_iter()
            .filter_map(|(key, value)| {
                let house = House::from_key(&key);
                let info = serde_json::from_value::<HouseInfo>(value);
                match (house, info) {
                    (Ok(house), Ok(info)) => Some((house, info)),
                    (Err(err), _) => {
                        tracing::warn!(house = %key, error = %err, "skipping house");
                        None
                    }
                    (_, Err(err)) => {
                        tracing::warn!(house = %key, error = %err, "skipping house");
                        None
                    }
                }
            })
            .collect();
        Ok(houses)
    }
}
