use super::target::AttributeTarget;
use crate::error::{ConversionFailure, ConversionResult};
use std::fmt;

/// Which flow a mapper invocation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncContext {
    /// First login: the user does not exist yet and the pending identity is
    /// written.
    FirstLogin,
    /// Any later login: the persisted user record is written.
    Update,
}

impl fmt::Display for SyncContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstLogin => write!(f, "first login"),
            Self::Update => write!(f, "update"),
        }
    }
}

/// The single change a mapper invocation makes to its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeMutation {
    Set { name: String, value: String },
    Remove { name: String },
    NoOp,
}

impl AttributeMutation {
    /// Turn a conversion outcome into a mutation of `attribute`.
    ///
    /// A converted value is always written. Otherwise a first login leaves
    /// the pending identity untouched, while an update clears the attribute so
    /// a stale value does not outlive its source. Multi-valued input never
    /// changes anything.
    pub fn decide(context: SyncContext, attribute: &str, outcome: ConversionResult) -> Self {
        match (outcome, context) {
            (Ok(value), _) => Self::Set {
                name: attribute.to_string(),
                value,
            },
            (Err(ConversionFailure::UnsupportedMultiValue), _) => Self::NoOp,
            (Err(_), SyncContext::FirstLogin) => Self::NoOp,
            (Err(_), SyncContext::Update) => Self::Remove {
                name: attribute.to_string(),
            },
        }
    }

    /// Apply the mutation to `target`.
    pub fn apply(&self, target: &mut dyn AttributeTarget) {
        match self {
            Self::Set { name, value } => target.set_single_attribute(name, value.clone()),
            Self::Remove { name } => target.remove_attribute(name),
            Self::NoOp => {}
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}

impl fmt::Display for AttributeMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set { name, value } => write!(f, "set {} = {}", name, value),
            Self::Remove { name } => write!(f, "remove {}", name),
            Self::NoOp => write!(f, "no change"),
        }
    }
}
