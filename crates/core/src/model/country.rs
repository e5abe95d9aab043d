use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::CountryCode;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContinentParseError {
    #[error("unknown continent: {0}")]
    Unknown(String),
}

//
// ─── CONTINENT ─────────────────────────────────────────────────────────────────
//

/// Fixed set of continents used to group the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    Oceania,
    #[serde(rename = "South America")]
    SouthAmerica,
}

impl Continent {
    pub const ALL: [Continent; 6] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::Oceania,
        Continent::SouthAmerica,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Continent {
    type Err = ContinentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Continent::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ContinentParseError::Unknown(wanted.to_string()))
    }
}

/// Continent filter applied to the question pool.
///
/// `All` is the sentinel listed first by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContinentFilter {
    #[default]
    All,
    Only(Continent),
}

impl ContinentFilter {
    #[must_use]
    pub fn matches(self, continent: Continent) -> bool {
        match self {
            ContinentFilter::All => true,
            ContinentFilter::Only(wanted) => wanted == continent,
        }
    }
}

impl fmt::Display for ContinentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContinentFilter::All => f.write_str("All"),
            ContinentFilter::Only(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for ContinentFilter {
    type Err = ContinentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ContinentFilter::All);
        }
        s.parse().map(ContinentFilter::Only)
    }
}

impl From<Continent> for ContinentFilter {
    fn from(continent: Continent) -> Self {
        ContinentFilter::Only(continent)
    }
}

//
// ─── COUNTRY ───────────────────────────────────────────────────────────────────
//

/// An entry of the immutable country dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    code: CountryCode,
    name: String,
    continent: Continent,
}

impl Country {
    #[must_use]
    pub fn new(code: CountryCode, name: impl Into<String>, continent: Continent) -> Self {
        Self {
            code,
            name: name.into(),
            continent,
        }
    }

    #[must_use]
    pub fn code(&self) -> &CountryCode {
        &self.code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn continent(&self) -> Continent {
        self.continent
    }
}
