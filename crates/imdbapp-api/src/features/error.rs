//! Feature request validation error types.

/// Validation failure detected before a feature request is dispatched.
///
/// Location failures abort the call; date and region failures are
/// logged by the client and replaced with the documented default, so
/// callers only see them when invoking the check helpers directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// `showtimes` was called without a usable location.
    MissingLocation,
    /// A non-empty location did not match the expected format.
    LocationFormat(String),
    /// A non-empty date did not match the SQL date format.
    DateFormat(String),
    /// A non-empty box office region did not match the expected format.
    RegionFormat(String),
}

impl std::fmt::Display for FeatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLocation => write!(f, "a location is required"),
            Self::LocationFormat(value) => {
                write!(
                    f,
                    "invalid location {value:?}: expected a location formatted like US,33333"
                )
            }
            Self::DateFormat(value) => {
                write!(f, "invalid date {value:?}: expected a SQL formatted date like 2009-12-24")
            }
            Self::RegionFormat(value) => {
                write!(f, "invalid region {value:?}: expected a two character country code like US")
            }
        }
    }
}

impl std::error::Error for FeatureError {}

#[cfg(test)]
mod tests {
    use super::FeatureError;

    #[test]
    fn test_feature_error_display() {
        assert_eq!(
            FeatureError::MissingLocation.to_string(),
            "a location is required"
        );
        assert_eq!(
            FeatureError::LocationFormat(String::from("90210")).to_string(),
            "invalid location \"90210\": expected a location formatted like US,33333"
        );
        assert_eq!(
            FeatureError::DateFormat(String::from("24.12.2009")).to_string(),
            "invalid date \"24.12.2009\": expected a SQL formatted date like 2009-12-24"
        );
        assert_eq!(
            FeatureError::RegionFormat(String::from("usa")).to_string(),
            "invalid region \"usa\": expected a two character country code like US"
        );
    }
}
