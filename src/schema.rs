//! Configuration schema exposed to the host's admin UI.
//!
//! The schema is a process-wide constant: it is built at compile time and only
//! ever read, so hosts can hand out references to it from any thread.

use crate::config::{
    CONF_DATE_INPUT_PATTERN, CONF_DATE_OUTPUT_PATTERN, CONF_JSON_FIELD_PATH,
    CONF_TARGET_ATTRIBUTE,
};
use serde::Serialize;

/// Kind of input control the host renders for a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    /// Free text
    String,
}

/// One configurable option of the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigProperty {
    pub name: &'static str,
    pub label: &'static str,
    pub help_text: &'static str,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
}

/// Every option the mapper reads, in display order. None has a default.
pub static CONFIG_PROPERTIES: [ConfigProperty; 4] = [
    ConfigProperty {
        name: CONF_JSON_FIELD_PATH,
        label: "Social Profile JSON Field Path",
        help_text: "Path of field in Social provider User Profile JSON data to get value from. \
                    You can use dot notation for nesting and square brackets for array index.",
        property_type: PropertyType::String,
    },
    ConfigProperty {
        name: CONF_DATE_INPUT_PATTERN,
        label: "Input date pattern",
        help_text: "Input date pattern (eg. yyyy-MM-dd for date 2021-01-10). \
                    Letters y, M, d, D, E, u, a, H, h, m, s and S are supported; quote literal text with '.",
        property_type: PropertyType::String,
    },
    ConfigProperty {
        name: CONF_DATE_OUTPUT_PATTERN,
        label: "Output date pattern",
        help_text: "Output date pattern (eg. dd/MM/yyyy for date 10/01/2021). \
                    Uses the same letters as the input date pattern.",
        property_type: PropertyType::String,
    },
    ConfigProperty {
        name: CONF_TARGET_ATTRIBUTE,
        label: "User Attribute Name",
        help_text: "User attribute name to store information into.",
        property_type: PropertyType::String,
    },
];

/// Look up a property by option name.
pub fn config_property(name: &str) -> Option<&'static ConfigProperty> {
    CONFIG_PROPERTIES.iter().find(|property| property.name == name)
}
