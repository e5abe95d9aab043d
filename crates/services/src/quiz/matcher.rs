use std::ops::Range;

use flags_core::model::Country;

/// Autocomplete cap for free-text answers.
pub const MAX_MATCHES: usize = 8;

/// A ranked autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch<'a> {
    pub country: &'a Country,
    /// Byte range of the query inside `country.name()`, when it can be mapped back.
    pub highlight: Option<Range<usize>>,
}

/// Rank countries for free-text entry: names starting with the query first,
/// then names containing it, each group in dataset order, at most `limit` results.
///
/// Matching is case-insensitive; a blank query matches nothing.
#[must_use]
pub fn rank_by_name<'a>(
    countries: &'a [Country],
    query: &str,
    limit: usize,
) -> Vec<NameMatch<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let lowered: Vec<(&Country, String)> = countries
        .iter()
        .map(|c| (c, c.name().to_lowercase()))
        .collect();

    let starts_with = lowered.iter().filter(|(_, name)| name.starts_with(&query));
    let contains = lowered
        .iter()
        .filter(|(_, name)| !name.starts_with(&query) && name.contains(&query));

    starts_with
        .chain(contains)
        .take(limit)
        .map(|(country, lower)| NameMatch {
            country: *country,
            highlight: highlight_range(country.name(), lower, &query),
        })
        .collect()
}

/// Study-view search: countries whose name contains `query`, ignoring case.
///
/// A blank query returns every country unchanged.
pub fn search_by_name<'a>(
    countries: impl IntoIterator<Item = &'a Country>,
    query: &str,
) -> Vec<&'a Country> {
    let query = query.trim().to_lowercase();
    countries
        .into_iter()
        .filter(|c| query.is_empty() || c.name().to_lowercase().contains(&query))
        .collect()
}

fn highlight_range(name: &str, lower: &str, query: &str) -> Option<Range<usize>> {
    // Lower-casing can change byte lengths outside ASCII.
    if lower.len() != name.len() {
        return None;
    }
    let start = lower.find(query)?;
    let end = start + query.len();
    (name.is_char_boundary(start) && name.is_char_boundary(end)).then_some(start..end)
}
