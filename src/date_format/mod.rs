//! Date conversion between configured templates.
//!
//! [`DatePattern`] compiles a template; [`DateAttributeConverter`] pairs an
//! input template with an output template and reformats raw profile values.
//! Conversion is locale- and timezone-naive: values are parsed and rendered as
//! wall-clock fields with no offset applied.

mod converter;
mod pattern;

pub use converter::{DateAttributeConverter, convert};
pub use pattern::DatePattern;
