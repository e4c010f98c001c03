use super::pattern::DatePattern;
use crate::error::ConversionResult;

/// Reformats date strings from one template to another.
///
/// Both templates are compiled when the converter is built, so a converter can
/// be reused for any number of values. Conversion itself has no side effects.
///
/// ```rust
/// use date_attribute_mapper::date_format::DateAttributeConverter;
///
/// let converter = DateAttributeConverter::new("yyyy-MM-dd", "dd/MM/yyyy").unwrap();
/// assert_eq!(converter.convert("1990-07-15").unwrap(), "15/07/1990");
/// assert!(converter.convert("15-07-1990").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAttributeConverter {
    input: DatePattern,
    output: DatePattern,
}

impl DateAttributeConverter {
    /// Compile an input/output template pair.
    ///
    /// Callers are expected to have checked that neither template is blank;
    /// see [`MapperConfig::input_pattern`](crate::MapperConfig::input_pattern).
    pub fn new(input_pattern: &str, output_pattern: &str) -> ConversionResult<Self> {
        Ok(Self {
            input: DatePattern::compile(input_pattern)?,
            output: DatePattern::compile(output_pattern)?,
        })
    }

    pub fn input_pattern(&self) -> &DatePattern {
        &self.input
    }

    pub fn output_pattern(&self) -> &DatePattern {
        &self.output
    }

    /// Parse `raw` with the input template and render it with the output one.
    pub fn convert(&self, raw: &str) -> ConversionResult {
        let value = self.input.parse(raw)?;
        self.output.format(&value)
    }
}

/// One-shot conversion of `raw` from `input_pattern` to `output_pattern`.
pub fn convert(raw: &str, input_pattern: &str, output_pattern: &str) -> ConversionResult {
    DateAttributeConverter::new(input_pattern, output_pattern)?.convert(raw)
}
