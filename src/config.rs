//! Mapper configuration.
//!
//! The host stores a mapper's settings as a flat string map. [`MapperConfig`]
//! is the typed, immutable view of that map and owns the rule for what counts
//! as configured: an option is present only if it is non-empty after trimming.

use crate::error::{ConversionFailure, ConversionResult, MapperResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Option holding the profile field path.
pub const CONF_JSON_FIELD_PATH: &str = "jsonFieldPath";
/// Option holding the template raw values are parsed with.
pub const CONF_DATE_INPUT_PATTERN: &str = "dateInputPattern";
/// Option holding the template converted values are rendered with.
pub const CONF_DATE_OUTPUT_PATTERN: &str = "dateOutputPattern";
/// Option holding the user attribute that receives the result.
pub const CONF_TARGET_ATTRIBUTE: &str = "targetAttribute";

const LEGACY_JSON_FIELD: &str = "jsonField";
const LEGACY_USER_ATTRIBUTE: &str = "userAttribute";

/// Typed view of a mapper's configuration map.
///
/// ```rust
/// use date_attribute_mapper::MapperConfig;
///
/// let config = MapperConfig::builder()
///     .json_field_path("birthdate")
///     .input_pattern("yyyy-MM-dd")
///     .output_pattern("dd/MM/yyyy")
///     .target_attribute("  birthdate ")
///     .build();
///
/// assert_eq!(config.target_attribute(), Some("birthdate"));
/// assert!(config.missing_options().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapperConfig {
    #[serde(default, alias = "jsonField", skip_serializing_if = "Option::is_none")]
    json_field_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_input_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_output_pattern: Option<String>,
    #[serde(default, alias = "userAttribute", skip_serializing_if = "Option::is_none")]
    target_attribute: Option<String>,
}

impl MapperConfig {
    pub fn builder() -> MapperConfigBuilder {
        MapperConfigBuilder::default()
    }

    /// Build from the host's configuration map.
    ///
    /// Unknown keys are ignored. The legacy keys `jsonField` and
    /// `userAttribute` are honoured when the current names are absent.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let lookup = |key: &str, legacy: Option<&str>| {
            map.get(key)
                .or_else(|| legacy.and_then(|legacy| map.get(legacy)))
                .cloned()
        };

        Self {
            json_field_path: lookup(CONF_JSON_FIELD_PATH, Some(LEGACY_JSON_FIELD)),
            date_input_pattern: lookup(CONF_DATE_INPUT_PATTERN, None),
            date_output_pattern: lookup(CONF_DATE_OUTPUT_PATTERN, None),
            target_attribute: lookup(CONF_TARGET_ATTRIBUTE, Some(LEGACY_USER_ATTRIBUTE)),
        }
    }

    /// Parse from a JSON object of option names to strings.
    pub fn from_json(json: &str) -> MapperResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn json_field_path(&self) -> Option<&str> {
        configured(&self.json_field_path)
    }

    /// Trimmed name of the attribute to write.
    pub fn target_attribute(&self) -> Option<&str> {
        configured(&self.target_attribute)
    }

    /// The input template, or `MissingConfig` if it is blank.
    pub fn input_pattern(&self) -> ConversionResult<&str> {
        require(&self.date_input_pattern, CONF_DATE_INPUT_PATTERN)
    }

    /// The output template, or `MissingConfig` if it is blank.
    pub fn output_pattern(&self) -> ConversionResult<&str> {
        require(&self.date_output_pattern, CONF_DATE_OUTPUT_PATTERN)
    }

    /// Names of every option that is not configured, in schema order.
    pub fn missing_options(&self) -> Vec<&'static str> {
        [
            (CONF_JSON_FIELD_PATH, &self.json_field_path),
            (CONF_DATE_INPUT_PATTERN, &self.date_input_pattern),
            (CONF_DATE_OUTPUT_PATTERN, &self.date_output_pattern),
            (CONF_TARGET_ATTRIBUTE, &self.target_attribute),
        ]
        .into_iter()
        .filter(|(_, value)| configured(value).is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Returns the option value only if it has content after trimming.
fn configured(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Patterns keep their surrounding whitespace; only blankness is checked.
fn require<'a>(value: &'a Option<String>, option: &'static str) -> ConversionResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConversionFailure::missing_config(option)),
    }
}

/// Builder for [`MapperConfig`], mostly for hosts embedding the mapper and tests.
#[derive(Debug, Default)]
pub struct MapperConfigBuilder {
    config: MapperConfig,
}

impl MapperConfigBuilder {
    pub fn json_field_path(mut self, path: impl Into<String>) -> Self {
        self.config.json_field_path = Some(path.into());
        self
    }

    pub fn input_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.date_input_pattern = Some(pattern.into());
        self
    }

    pub fn output_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.date_output_pattern = Some(pattern.into());
        self
    }

    pub fn target_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.config.target_attribute = Some(attribute.into());
        self
    }

    pub fn build(self) -> MapperConfig {
        self.config
    }
}

/// A configured mapper instance as the host stores it.
///
/// `name` is the operator-facing label of this instance and is included in
/// every diagnostic the mapper logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperModel {
    pub name: String,
    #[serde(default)]
    pub config: MapperConfig,
}

impl MapperModel {
    pub fn new(name: impl Into<String>, config: MapperConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    /// Parse a `{"name": ..., "config": {...}}` document.
    pub fn from_json(json: &str) -> MapperResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
