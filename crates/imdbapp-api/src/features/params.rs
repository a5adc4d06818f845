//! Feature request argument validation.

use std::sync::LazyLock;

use regex::Regex;

use super::error::FeatureError;

/// Location pattern: two uppercase letters, a comma, five digits.
#[allow(clippy::expect_used)]
static LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2},[0-9]{5}$").expect("failed to compile location regex"));

/// SQL date pattern: year 1000-3999, month 1-12, day 1-31, leading
/// zeros optional on month and day. Loose on purpose; the API rejects
/// impossible calendar dates itself.
#[allow(clippy::expect_used)]
static SQL_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-3][0-9]{3}-(0?[1-9]|1[0-2])-(0?[1-9]|[12][0-9]|3[01])$")
        .expect("failed to compile date regex")
});

/// Box office region pattern: exactly two uppercase letters.
#[allow(clippy::expect_used)]
static REGION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("failed to compile region regex"));

/// Outcome of validating one request argument.
///
/// A malformed non-empty value is an error at the check level; the call
/// site decides whether it aborts the request or falls back to the
/// documented default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgCheck {
    /// No value was supplied; the caller applies its default.
    NotProvided,
    /// The value matched the expected format and is used as-is.
    Valid(String),
}

/// Checks a cinema location argument (`US,33333`).
///
/// An absent or empty location is not an error here; `showtimes`
/// translates it into a missing-location error at the call site.
///
/// # Errors
///
/// Returns [`FeatureError::LocationFormat`] for a non-empty value that
/// does not match the location pattern.
pub fn check_location(location: Option<&str>) -> Result<ArgCheck, FeatureError> {
    match location {
        None | Some("") => Ok(ArgCheck::NotProvided),
        Some(value) if LOCATION_RE.is_match(value) => Ok(ArgCheck::Valid(String::from(value))),
        Some(value) => Err(FeatureError::LocationFormat(String::from(value))),
    }
}

/// Checks a SQL-formatted date argument (`2009-12-24`).
///
/// # Errors
///
/// Returns [`FeatureError::DateFormat`] for a non-empty value that does
/// not match the date pattern.
pub fn check_date(date: Option<&str>) -> Result<ArgCheck, FeatureError> {
    match date {
        None | Some("") => Ok(ArgCheck::NotProvided),
        Some(value) if SQL_DATE_RE.is_match(value) => Ok(ArgCheck::Valid(String::from(value))),
        Some(value) => Err(FeatureError::DateFormat(String::from(value))),
    }
}

/// Checks a box office region argument (`US`).
///
/// # Errors
///
/// Returns [`FeatureError::RegionFormat`] for a non-empty value that is
/// not a two-letter uppercase code.
pub fn check_region(region: Option<&str>) -> Result<ArgCheck, FeatureError> {
    match region {
        None | Some("") => Ok(ArgCheck::NotProvided),
        Some(value) if REGION_RE.is_match(value) => Ok(ArgCheck::Valid(String::from(value))),
        Some(value) => Err(FeatureError::RegionFormat(String::from(value))),
    }
}
