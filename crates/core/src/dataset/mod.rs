//! Immutable country dataset and flag image URLs.

mod countries;

use std::collections::HashSet;

use url::Url;

use crate::model::{Continent, ContinentFilter, Country, CountryCode};

//
// ─── DATASET ───────────────────────────────────────────────────────────────────
//

/// The list of countries the quiz draws from. Codes are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    countries: Vec<Country>,
}

impl Dataset {
    /// Build a dataset, dropping later entries whose code repeats an earlier one.
    #[must_use]
    pub fn new(countries: impl IntoIterator<Item = Country>) -> Self {
        let mut seen = HashSet::new();
        let countries = countries
            .into_iter()
            .filter(|c| seen.insert(c.code().clone()))
            .collect();
        Self { countries }
    }

    /// The bundled list of sovereign states.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(countries::COUNTRIES.iter().filter_map(|(code, name, continent)| {
            CountryCode::new(code)
                .ok()
                .map(|code| Country::new(code, *name, *continent))
        }))
    }

    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    #[must_use]
    pub fn get(&self, code: &CountryCode) -> Option<&Country> {
        self.countries.iter().find(|c| c.code() == code)
    }

    /// Case-insensitive exact name lookup.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        let wanted = name.trim().to_lowercase();
        self.countries
            .iter()
            .find(|c| c.name().to_lowercase() == wanted)
    }

    /// `All` followed by every continent that has at least one country.
    #[must_use]
    pub fn continents(&self) -> Vec<ContinentFilter> {
        std::iter::once(ContinentFilter::All)
            .chain(
                Continent::ALL
                    .into_iter()
                    .filter(|cont| self.countries.iter().any(|c| c.continent() == *cont))
                    .map(ContinentFilter::Only),
            )
            .collect()
    }

    #[must_use]
    pub fn countries_by_continent(&self, filter: ContinentFilter) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|c| filter.matches(c.continent()))
            .collect()
    }
}

//
// ─── FLAG URLS ─────────────────────────────────────────────────────────────────
//

const DEFAULT_FLAG_BASE: &str = "https://flagcdn.com";
const DEFAULT_FLAG_WIDTH: u32 = 320;

/// Widths the flag CDN serves.
pub const SUPPORTED_FLAG_WIDTHS: [u32; 8] = [20, 40, 80, 160, 320, 640, 1280, 2560];

/// Resolves a country code to a flag image URL of the form `{base}/w{width}/{code}.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagUrlResolver {
    base: String,
}

impl FlagUrlResolver {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Build the image URL, snapping the width up to the nearest served size.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the configured base is not a valid URL.
    pub fn flag_url(&self, code: &CountryCode, width: Option<u32>) -> Result<Url, url::ParseError> {
        let width = snap_width(width.unwrap_or(DEFAULT_FLAG_WIDTH));
        Url::parse(&format!("{}/w{width}/{}.png", self.base, code.as_str()))
    }
}

impl Default for FlagUrlResolver {
    fn default() -> Self {
        Self::new(DEFAULT_FLAG_BASE)
    }
}

fn snap_width(requested: u32) -> u32 {
    SUPPORTED_FLAG_WIDTHS
        .into_iter()
        .find(|w| *w >= requested)
        .unwrap_or(SUPPORTED_FLAG_WIDTHS[SUPPORTED_FLAG_WIDTHS.len() - 1])
}
