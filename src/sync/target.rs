//! Attribute targets a mutation is applied to.
//!
//! The host owns both the pending identity of a first login and the persisted
//! user record; each is reached through [`AttributeTarget`].
//! [`InMemoryAttributes`] is a plain map-backed target for tooling and tests.

use std::collections::HashMap;

/// Host primitive for writing a named attribute.
pub trait AttributeTarget {
    /// Replace every value of `name` with `value`.
    fn set_single_attribute(&mut self, name: &str, value: String);

    /// Remove `name` entirely. Removing an unset attribute is not an error.
    fn remove_attribute(&mut self, name: &str);
}

/// Map-backed attribute store.
///
/// Attributes are multi-valued, matching how identity stores keep them; the
/// mapper only ever writes single values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryAttributes {
    attributes: HashMap<String, Vec<String>>,
}

impl InMemoryAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// First value of `name`, if set.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn values(&self, name: &str) -> &[String] {
        self.attributes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl AttributeTarget for InMemoryAttributes {
    fn set_single_attribute(&mut self, name: &str, value: String) {
        self.attributes.insert(name.to_string(), vec![value]);
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}

impl<const N: usize> From<[(&str, &str); N]> for InMemoryAttributes {
    fn from(entries: [(&str, &str); N]) -> Self {
        let attributes = entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), vec![value.to_string()]))
            .collect();
        Self { attributes }
    }
}
