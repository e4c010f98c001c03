//! Date pattern compilation.
//!
//! Mapper configuration uses the conventional letter-based template syntax
//! (`yyyy-MM-dd`, `dd/MM/yyyy`, `MMM d, yyyy`, `HH:mm:ss.SSS`). A
//! [`DatePattern`] compiles such a template once into chrono's strftime
//! vocabulary and remembers which calendar fields the template supplies, so
//! that fields it leaves out can be filled with their conventional defaults
//! when parsing.
//!
//! ## Syntax
//!
//! - Runs of the same ASCII letter form one field (`yyyy`, `MM`, `d`)
//! - Text inside single quotes is literal (`'T'`); `''` is a literal quote
//! - Every other character is literal
//!
//! Numeric fields take digits only. Whitespace in the input is accepted only
//! where the template itself has whitespace, and a `+` or `-` sign is accepted
//! only where the template spells it out.
//!
//! Letters without a supported meaning (eras, week-years, time zones, ...)
//! are rejected at compile time rather than silently treated as text.

use crate::error::{ConversionFailure, ConversionResult};
use chrono::NaiveDateTime;
use chrono::format::{self, ParseError, ParseResult, Parsed, StrftimeItems};
use std::fmt::{self, Write};

/// A compiled date template.
///
/// # Examples
///
/// ```rust
/// use date_attribute_mapper::date_format::DatePattern;
///
/// let pattern = DatePattern::compile("yyyy-MM-dd").unwrap();
/// let date = pattern.parse("1990-07-15").unwrap();
/// assert_eq!(pattern.format(&date).unwrap(), "1990-07-15");
///
/// assert!(DatePattern::compile("yyyy-MM-dd zzz").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    strftime: String,
    segments: Vec<Segment>,
    fields: FieldSet,
}

/// One position of a compiled template, as seen by the input walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Literal(char),
    Space,
    /// A numeric field reading at most this many digits
    Digits(usize),
    /// Month names, day names and the AM/PM marker
    Word,
}

/// Calendar fields a template supplies when parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FieldSet {
    year: bool,
    month: bool,
    day: bool,
    ordinal: bool,
    hour24: bool,
    hour12: bool,
    am_pm: bool,
    minute: bool,
    second: bool,
}

impl DatePattern {
    /// Compile a template.
    ///
    /// Returns [`ConversionFailure::InvalidPattern`] for unsupported letters
    /// and unterminated quoted text.
    pub fn compile(pattern: &str) -> ConversionResult<Self> {
        let mut strftime = String::with_capacity(pattern.len() * 2);
        let mut segments = Vec::new();
        let mut fields = FieldSet::default();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    push_literal(&mut strftime, &mut segments, '\'');
                    continue;
                }

                let mut closed = false;
                while let Some(quoted) = chars.next() {
                    if quoted == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            push_literal(&mut strftime, &mut segments, '\'');
                            continue;
                        }
                        closed = true;
                        break;
                    }
                    push_literal(&mut strftime, &mut segments, quoted);
                }

                if !closed {
                    return Err(ConversionFailure::invalid_pattern(
                        pattern,
                        "unterminated quoted text",
                    ));
                }
                continue;
            }

            if c.is_ascii_alphabetic() {
                let mut width = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    width += 1;
                }

                let (spec, segment) = field_spec(c, width, &mut fields).ok_or_else(|| {
                    ConversionFailure::invalid_pattern(
                        pattern,
                        format!("unsupported pattern letter '{}'", c),
                    )
                })?;
                strftime.push_str(spec);
                segments.push(segment);
                continue;
            }

            push_literal(&mut strftime, &mut segments, c);
        }

        Ok(Self {
            source: pattern.to_string(),
            strftime,
            segments,
            fields,
        })
    }

    /// The template as configured.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parse `input` strictly against this template.
    ///
    /// The whole input must be consumed and every field must be in range.
    /// Numeric fields must start with a digit: no leading whitespace and no
    /// sign the template does not spell out. Fields the template does not
    /// supply default to 1970-01-01 00:00:00, and a 12-hour clock without a
    /// marker reads as AM.
    pub fn parse(&self, input: &str) -> ConversionResult<NaiveDateTime> {
        let failure =
            |reason: ParseError| ConversionFailure::parse_failure(input, self.source.as_str(), reason);

        self.check_numeric_fields(input)
            .map_err(|reason| ConversionFailure::parse_failure(input, self.source.as_str(), reason))?;

        let mut parsed = Parsed::new();
        format::parse(&mut parsed, input, StrftimeItems::new(&self.strftime)).map_err(failure)?;
        self.fields.apply_defaults(&mut parsed).map_err(failure)?;
        parsed.to_naive_datetime_with_offset(0).map_err(failure)
    }

    /// Walk `input` along the template and reject whitespace or a sign where a
    /// numeric field begins. chrono skips the former and takes the latter as a
    /// signed year. Any other mismatch stops the walk and is left to chrono.
    fn check_numeric_fields(&self, input: &str) -> Result<(), &'static str> {
        let mut rest = input;
        for segment in &self.segments {
            match *segment {
                Segment::Literal(expected) => match rest.strip_prefix(expected) {
                    Some(tail) => rest = tail,
                    None => return Ok(()),
                },
                Segment::Space => rest = rest.trim_start(),
                Segment::Word => rest = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
                Segment::Digits(width) => {
                    match rest.chars().next() {
                        Some(c) if c.is_whitespace() => {
                            return Err("unexpected whitespace before a numeric field");
                        }
                        Some('+' | '-') => return Err("unexpected sign before a numeric field"),
                        _ => {}
                    }

                    let digits = rest.bytes().take(width).take_while(u8::is_ascii_digit).count();
                    if digits == 0 {
                        return Ok(());
                    }
                    rest = &rest[digits..];
                }
            }
        }
        Ok(())
    }

    /// Render `value` with this template.
    pub fn format(&self, value: &NaiveDateTime) -> ConversionResult<String> {
        let mut rendered = String::new();
        write!(rendered, "{}", value.format(&self.strftime)).map_err(|_| {
            ConversionFailure::invalid_pattern(self.source.as_str(), "pattern cannot be rendered")
        })?;
        Ok(rendered)
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl FieldSet {
    fn apply_defaults(&self, parsed: &mut Parsed) -> ParseResult<()> {
        if !self.year {
            parsed.set_year(1970)?;
        }
        if !self.ordinal {
            if !self.month {
                parsed.set_month(1)?;
            }
            if !self.day {
                parsed.set_day(1)?;
            }
        }

        match (self.hour24, self.hour12, self.am_pm) {
            (false, false, false) => parsed.set_hour(0)?,
            // A lone marker: "PM" means noon
            (false, false, true) => parsed.set_hour12(12)?,
            (false, true, false) => parsed.set_ampm(false)?,
            _ => {}
        }

        if !self.minute {
            parsed.set_minute(0)?;
        }
        if !self.second {
            parsed.set_second(0)?;
        }
        Ok(())
    }
}

/// Map one letter run to its strftime specifier and input segment, recording
/// the field. Digit widths are the most chrono reads for each specifier.
fn field_spec(
    letter: char,
    width: usize,
    fields: &mut FieldSet,
) -> Option<(&'static str, Segment)> {
    let spec = match letter {
        'y' => {
            fields.year = true;
            if width == 2 {
                ("%y", Segment::Digits(2))
            } else {
                ("%Y", Segment::Digits(4))
            }
        }
        'M' | 'L' => {
            fields.month = true;
            match width {
                1 => ("%-m", Segment::Digits(2)),
                2 => ("%m", Segment::Digits(2)),
                3 => ("%b", Segment::Word),
                _ => ("%B", Segment::Word),
            }
        }
        'd' => {
            fields.day = true;
            (if width == 1 { "%-d" } else { "%d" }, Segment::Digits(2))
        }
        'D' => {
            fields.ordinal = true;
            (if width == 1 { "%-j" } else { "%j" }, Segment::Digits(3))
        }
        'E' => (if width <= 3 { "%a" } else { "%A" }, Segment::Word),
        'u' => ("%u", Segment::Digits(1)),
        'a' => {
            fields.am_pm = true;
            ("%p", Segment::Word)
        }
        'H' => {
            fields.hour24 = true;
            (if width == 1 { "%-H" } else { "%H" }, Segment::Digits(2))
        }
        'h' => {
            fields.hour12 = true;
            (if width == 1 { "%-I" } else { "%I" }, Segment::Digits(2))
        }
        'm' => {
            fields.minute = true;
            (if width == 1 { "%-M" } else { "%M" }, Segment::Digits(2))
        }
        's' => {
            fields.second = true;
            (if width == 1 { "%-S" } else { "%S" }, Segment::Digits(2))
        }
        'S' => ("%3f", Segment::Digits(3)),
        _ => return None,
    };
    Some(spec)
}

fn push_literal(strftime: &mut String, segments: &mut Vec<Segment>, c: char) {
    if c == '%' {
        strftime.push_str("%%");
    } else {
        strftime.push(c);
    }

    if !c.is_whitespace() {
        segments.push(Segment::Literal(c));
    } else if segments.last() != Some(&Segment::Space) {
        segments.push(Segment::Space);
    }
}
