//! Error types for date attribute mapping.
//!
//! Conversion outcomes are values, not faults: every variant of
//! [`ConversionFailure`] is an expected result that the sync policy turns into
//! a defined mutation decision. [`MapperError`] covers loading mapper models
//! from outside the host (files, JSON), which only the operator tooling does.

/// Reasons a source value could not be turned into a formatted date.
///
/// None of these block a login flow. The sync policy logs each one with the
/// mapper name and then decides between leaving the attribute alone and
/// removing it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionFailure {
    /// An essential option (pattern or attribute name) was not configured
    #[error("{option} is not configured")]
    MissingConfig { option: &'static str },

    /// No value was found in the federated profile
    #[error("No value available in the federated profile")]
    MissingValue,

    /// The profile value is a list, which cannot be converted to one date
    #[error("Multi-valued input cannot be converted to a date")]
    UnsupportedMultiValue,

    /// The value does not match the input pattern
    #[error("Value '{input}' does not match pattern '{pattern}': {reason}")]
    ParseFailure {
        input: String,
        pattern: String,
        reason: String,
    },

    /// A configured pattern cannot be compiled or rendered
    #[error("Invalid date pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl ConversionFailure {
    /// Create a missing configuration error
    pub fn missing_config(option: &'static str) -> Self {
        Self::MissingConfig { option }
    }

    /// Create a parse failure error
    pub fn parse_failure(
        input: impl Into<String>,
        pattern: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::ParseFailure {
            input: input.into(),
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Whether the failure comes from the mapper configuration rather than the
    /// profile data.
    pub fn is_config_fault(&self) -> bool {
        matches!(
            self,
            Self::MissingConfig { .. } | Self::InvalidPattern { .. }
        )
    }
}

/// Errors raised while loading or describing mapper models.
#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a model file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Result type aliases for convenience
pub type ConversionResult<T = String> = Result<T, ConversionFailure>;
pub type MapperResult<T> = Result<T, MapperError>;
