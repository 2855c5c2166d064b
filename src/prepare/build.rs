//! # Build metadata handed to the setup action.
//!
//! [`BuildContext`] is an attribute bag describing the artifacts a setup
//! pass should work with (download locations, package names, flavor tags).
//! The supervisor never reads it; it only passes a shared handle to each
//! attempt.

use std::collections::HashMap;

/// Key/value build attributes for one setup invocation.
#[derive(Clone, Debug, Default)]
pub struct BuildContext {
    attributes: HashMap<String, String>,
}

impl BuildContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the attribute for `key`, if set.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }
}
