//! Values read from a federated identity's profile.
//!
//! Locating a field inside the upstream profile is the host's job. This module
//! only defines the shape the host hands back ([`SourceValue`]) and the seam it
//! plugs into ([`ProfileSource`]).

use serde_json::Value;
use std::fmt;

/// A raw value extracted from the federated profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceValue {
    /// The field does not exist or is null
    #[default]
    Absent,
    /// A single value in string form
    Scalar(String),
    /// A multi-valued field
    Sequence(Vec<String>),
}

impl SourceValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Stringify one JSON value the way a profile scalar is rendered: strings
/// verbatim, everything else as compact JSON text.
fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<Value> for SourceValue {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<&Value> for SourceValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Array(items) => Self::Sequence(items.iter().map(json_text).collect()),
            other => Self::Scalar(json_text(other)),
        }
    }
}

impl From<Option<&Value>> for SourceValue {
    fn from(value: Option<&Value>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

impl From<Option<String>> for SourceValue {
    fn from(value: Option<String>) -> Self {
        value.map(Self::Scalar).unwrap_or_default()
    }
}

impl fmt::Display for SourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "<absent>"),
            Self::Scalar(value) => write!(f, "{}", value),
            Self::Sequence(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

/// Host primitive that reads a field of the federated profile.
///
/// `path` is the mapper's configured `jsonFieldPath`; its syntax is defined by
/// the host.
pub trait ProfileSource {
    fn extract_field(&self, path: &str) -> SourceValue;
}

impl<F> ProfileSource for F
where
    F: Fn(&str) -> SourceValue,
{
    fn extract_field(&self, path: &str) -> SourceValue {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_value() {
        assert_eq!(SourceValue::from(json!(null)), SourceValue::Absent);
        assert_eq!(
            SourceValue::from(json!("1990-07-15")),
            SourceValue::scalar("1990-07-15")
        );
        assert_eq!(SourceValue::from(json!(19900715)), SourceValue::scalar("19900715"));
        assert_eq!(SourceValue::from(json!(true)), SourceValue::scalar("true"));
        assert_eq!(
            SourceValue::from(json!({"y": 1990})),
            SourceValue::scalar(r#"{"y":1990}"#)
        );
    }

    #[test]
    fn test_from_json_array_is_sequence() {
        assert_eq!(
            SourceValue::from(json!(["1990-07-15", 2])),
            SourceValue::Sequence(vec!["1990-07-15".to_string(), "2".to_string()])
        );
        assert_eq!(SourceValue::from(json!([])), SourceValue::Sequence(vec![]));
    }

    #[test]
    fn test_from_missing_field() {
        let profile = json!({"birthday": "1990-07-15"});
        assert!(SourceValue::from(profile.get("missing")).is_absent());
        assert_eq!(
            SourceValue::from(profile.get("birthday")),
            SourceValue::scalar("1990-07-15")
        );
    }

    #[test]
    fn test_closure_profile_source() {
        let profile = |path: &str| {
            if path == "birthday" {
                SourceValue::scalar("1990-07-15")
            } else {
                SourceValue::Absent
            }
        };
        assert_eq!(profile.extract_field("birthday"), SourceValue::scalar("1990-07-15"));
        assert!(profile.extract_field("other").is_absent());
    }

    #[test]
    fn test_display() {
        assert_eq!(SourceValue::Absent.to_string(), "<absent>");
        assert_eq!(
            SourceValue::Sequence(vec!["a".into(), "b".into()]).to_string(),
            "[a, b]"
        );
    }
}
