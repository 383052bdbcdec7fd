use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{RemoteError, RemoteResult};

/// A single option value: a string, a boolean, or a nested mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    String(String),
    Map(BTreeMap<String, OptionValue>),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, OptionValue>> {
        match self {
            OptionValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Human-readable type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "boolean",
            OptionValue::String(_) => "string",
            OptionValue::Map(_) => "mapping",
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::String(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<BTreeMap<String, OptionValue>> for OptionValue {
    fn from(m: BTreeMap<String, OptionValue>) -> Self {
        OptionValue::Map(m)
    }
}

/// The key/value configuration threaded through the decorator pipeline.
///
/// Control options are removed with [`OptionsBag::take_control_option`] so they
/// never reach the renderer; every other key passes through untouched. The bag
/// remembers which control options it has handed out, and taking the same one
/// twice is reported as [`RemoteError::ControlOptionConsumed`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionsBag {
    #[serde(flatten)]
    entries: BTreeMap<String, OptionValue>,
    #[serde(skip)]
    consumed: BTreeSet<String>,
}

impl PartialEq for OptionsBag {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl OptionsBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<OptionValue>) -> Option<OptionValue> {
        self.entries.insert(key.to_string(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    /// Read a string option, rejecting any other value type
    pub fn get_str(&self, key: &str) -> RemoteResult<Option<&str>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(OptionValue::String(s)) => Ok(Some(s)),
            Some(_) => Err(RemoteError::InvalidOptionType {
                key: key.to_string(),
                expected: "string".to_string(),
            }),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.entries.iter()
    }

    /// Set `key` only when it is absent. Returns true if the default was applied.
    pub fn merge_default(&mut self, key: &str, value: impl Into<OptionValue>) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.entries.insert(key.to_string(), value.into());
        true
    }

    /// Remove and return a control option. `Ok(None)` means the caller never set it.
    pub fn take_control_option(&mut self, key: &str) -> RemoteResult<Option<OptionValue>> {
        if !self.consumed.insert(key.to_string()) {
            return Err(RemoteError::ControlOptionConsumed {
                key: key.to_string(),
            });
        }
        Ok(self.entries.remove(key))
    }

    /// Take a boolean control option, falling back to `default` when absent
    pub fn take_bool(&mut self, key: &str, default: bool) -> RemoteResult<bool> {
        match self.take_control_option(key)? {
            None => Ok(default),
            Some(OptionValue::Bool(b)) => Ok(b),
            Some(other) => Err(RemoteError::InvalidOptionType {
                key: key.to_string(),
                expected: format!("boolean, got {}", other.type_name()),
            }),
        }
    }

    /// True once `key` has been taken as a control option from this bag
    pub fn is_consumed(&self, key: &str) -> bool {
        self.consumed.contains(key)
    }
}

impl FromIterator<(String, OptionValue)> for OptionsBag {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
        OptionsBag {
            entries: iter.into_iter().collect(),
            consumed: BTreeSet::new(),
        }
    }
}
