use super::mutation::{AttributeMutation, SyncContext};
use crate::config::MapperModel;
use crate::date_format::DateAttributeConverter;
use crate::error::{ConversionFailure, ConversionResult};
use crate::source::SourceValue;
use log::{debug, warn};

/// Decides what a mapper invocation does to the target attribute.
///
/// The policy borrows the mapper model and holds nothing else, so one value
/// can serve any number of invocations. Every path ends in exactly one
/// [`AttributeMutation`]; failures are logged with the mapper name and never
/// propagate to the login flow.
///
/// ```rust
/// use date_attribute_mapper::{AttributeMutation, AttributeSyncPolicy, MapperConfig, MapperModel, SourceValue};
///
/// let model = MapperModel::new(
///     "birthdate",
///     MapperConfig::builder()
///         .json_field_path("birthday")
///         .input_pattern("yyyy-MM-dd")
///         .output_pattern("dd/MM/yyyy")
///         .target_attribute("birthdate")
///         .build(),
/// );
/// let policy = AttributeSyncPolicy::new(&model);
///
/// assert_eq!(policy.on_first_login(&SourceValue::Absent), AttributeMutation::NoOp);
/// assert_eq!(
///     policy.on_update(&SourceValue::Absent),
///     AttributeMutation::Remove { name: "birthdate".to_string() }
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AttributeSyncPolicy<'a> {
    model: &'a MapperModel,
}

impl<'a> AttributeSyncPolicy<'a> {
    pub fn new(model: &'a MapperModel) -> Self {
        Self { model }
    }

    /// Mutation for the pending identity of a first login. Never removes.
    pub fn on_first_login(&self, source: &SourceValue) -> AttributeMutation {
        self.decide(SyncContext::FirstLogin, source)
    }

    /// Mutation for an existing user record.
    pub fn on_update(&self, source: &SourceValue) -> AttributeMutation {
        self.decide(SyncContext::Update, source)
    }

    pub fn decide(&self, context: SyncContext, source: &SourceValue) -> AttributeMutation {
        let Some(attribute) = self.model.config.target_attribute() else {
            warn!("Attribute is not configured for mapper {}", self.model.name);
            return AttributeMutation::NoOp;
        };

        let mutation = AttributeMutation::decide(context, attribute, self.evaluate(source));
        debug!("Mapper {} on {}: {}", self.model.name, context, mutation);
        mutation
    }

    /// Convert `source` with the configured patterns, logging any failure.
    pub fn evaluate(&self, source: &SourceValue) -> ConversionResult {
        let name = &self.model.name;
        let raw = match source {
            SourceValue::Absent => {
                warn!("No value found in the federated profile for mapper {}", name);
                return Err(ConversionFailure::MissingValue);
            }
            SourceValue::Sequence(_) => {
                warn!(
                    "Value from user profile is a list for mapper {}; a list cannot be converted to a date",
                    name
                );
                return Err(ConversionFailure::UnsupportedMultiValue);
            }
            SourceValue::Scalar(raw) => raw,
        };

        self.convert(raw).inspect_err(|failure| match failure {
            ConversionFailure::MissingConfig { option } => {
                warn!("{} is not configured for mapper {}", option, name)
            }
            ConversionFailure::InvalidPattern { pattern, reason } => {
                warn!("Invalid date pattern '{}' for mapper {}: {}", pattern, name, reason)
            }
            ConversionFailure::ParseFailure { reason, pattern, .. } => warn!(
                "Cannot convert date '{}' with pattern '{}' for mapper {}: {}",
                raw, pattern, name, reason
            ),
            ConversionFailure::MissingValue | ConversionFailure::UnsupportedMultiValue => {}
        })
    }

    fn convert(&self, raw: &str) -> ConversionResult {
        let config = &self.model.config;
        let input_pattern = config.input_pattern()?;
        let output_pattern = config.output_pattern()?;
        DateAttributeConverter::new(input_pattern, output_pattern)?.convert(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapperConfig;

    fn birthdate_model() -> MapperModel {
        MapperModel::new(
            "birthdate mapper",
            MapperConfig::builder()
                .json_field_path("birthday")
                .input_pattern("yyyy-MM-dd")
                .output_pattern("dd/MM/yyyy")
                .target_attribute("birthdate")
                .build(),
        )
    }

    fn set(value: &str) -> AttributeMutation {
        AttributeMutation::Set {
            name: "birthdate".to_string(),
            value: value.to_string(),
        }
    }

    fn remove() -> AttributeMutation {
        AttributeMutation::Remove {
            name: "birthdate".to_string(),
        }
    }

    #[test]
    fn test_scalar_converts_in_both_contexts() {
        let model = birthdate_model();
        let policy = AttributeSyncPolicy::new(&model);
        let source = SourceValue::scalar("1990-07-15");

        assert_eq!(policy.on_first_login(&source), set("15/07/1990"));
        assert_eq!(policy.on_update(&source), set("15/07/1990"));
    }

    #[test]
    fn test_absent_value() {
        let model = birthdate_model();
        let policy = AttributeSyncPolicy::new(&model);

        assert_eq!(
            policy.evaluate(&SourceValue::Absent),
            Err(ConversionFailure::MissingValue)
        );
        assert_eq!(policy.on_first_login(&SourceValue::Absent), AttributeMutation::NoOp);
        assert_eq!(policy.on_update(&SourceValue::Absent), remove());
    }

    #[test]
    fn test_pattern_mismatch() {
        let model = birthdate_model();
        let policy = AttributeSyncPolicy::new(&model);
        let source = SourceValue::scalar("15-07-1990");

        assert!(matches!(
            policy.evaluate(&source),
            Err(ConversionFailure::ParseFailure { .. })
        ));
        assert_eq!(policy.on_first_login(&source), AttributeMutation::NoOp);
        assert_eq!(policy.on_update(&source), remove());
    }

    #[test]
    fn test_signed_year_is_not_written() {
        let model = birthdate_model();
        let policy = AttributeSyncPolicy::new(&model);
        let source = SourceValue::scalar("-1990-07-15");

        assert_eq!(policy.on_first_login(&source), AttributeMutation::NoOp);
        assert_eq!(policy.on_update(&source), remove());
    }

    #[test]
    fn test_sequence_never_mutates() {
        let model = birthdate_model();
        let policy = AttributeSyncPolicy::new(&model);
        let source = SourceValue::Sequence(vec!["1990-07-15".to_string()]);

        assert_eq!(
            policy.evaluate(&source),
            Err(ConversionFailure::UnsupportedMultiValue)
        );
        assert_eq!(policy.on_first_login(&source), AttributeMutation::NoOp);
        assert_eq!(policy.on_update(&source), AttributeMutation::NoOp);
    }

    #[test]
    fn test_missing_target_attribute_is_noop() {
        let mut model = birthdate_model();
        model.config = MapperConfig::builder()
            .input_pattern("yyyy-MM-dd")
            .output_pattern("dd/MM/yyyy")
            .target_attribute("   ")
            .build();
        let policy = AttributeSyncPolicy::new(&model);

        let source = SourceValue::scalar("1990-07-15");
        assert_eq!(policy.on_first_login(&source), AttributeMutation::NoOp);
        assert_eq!(policy.on_update(&source), AttributeMutation::NoOp);
        assert_eq!(policy.on_update(&SourceValue::Absent), AttributeMutation::NoOp);
    }

    #[test]
    fn test_missing_pattern() {
        let mut model = birthdate_model();
        model.config = MapperConfig::builder()
            .input_pattern("yyyy-MM-dd")
            .target_attribute("birthdate")
            .build();
        let policy = AttributeSyncPolicy::new(&model);
        let source = SourceValue::scalar("1990-07-15");

        assert_eq!(
            policy.evaluate(&source),
            Err(ConversionFailure::missing_config("dateOutputPattern"))
        );
        assert_eq!(policy.on_first_login(&source), AttributeMutation::NoOp);
        assert_eq!(policy.on_update(&source), remove());
    }

    #[test]
    fn test_input_pattern_checked_first() {
        let model = MapperModel::new(
            "empty",
            MapperConfig::builder().target_attribute("birthdate").build(),
        );
        let policy = AttributeSyncPolicy::new(&model);

        assert_eq!(
            policy.evaluate(&SourceValue::scalar("1990-07-15")),
            Err(ConversionFailure::missing_config("dateInputPattern"))
        );
    }

    #[test]
    fn test_invalid_pattern_treated_as_config_fault() {
        let mut model = birthdate_model();
        model.config = MapperConfig::builder()
            .input_pattern("yyyy-MM-dd")
            .output_pattern("dd/MM/yyyy zzz")
            .target_attribute("birthdate")
            .build();
        let policy = AttributeSyncPolicy::new(&model);
        let source = SourceValue::scalar("1990-07-15");

        assert_eq!(policy.on_first_login(&source), AttributeMutation::NoOp);
        assert_eq!(policy.on_update(&source), remove());
    }

    #[test]
    fn test_target_attribute_trimmed_in_mutation() {
        let mut model = birthdate_model();
        model.config = MapperConfig::builder()
            .input_pattern("yyyy-MM-dd")
            .output_pattern("dd/MM/yyyy")
            .target_attribute(" birthdate ")
            .build();
        let policy = AttributeSyncPolicy::new(&model);

        assert_eq!(
            policy.on_update(&SourceValue::scalar("1990-07-15")),
            set("15/07/1990")
        );
    }
}
