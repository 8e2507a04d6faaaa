use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single configuration value contributed by a variant option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConfigValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Inclusive (min, max) pair, e.g. an ideal character range.
    Range(i64, i64),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<(i64, i64)> {
        match self {
            Self::Range(lo, hi) => Some((*lo, *hi)),
            _ => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<(i64, i64)> for ConfigValue {
    fn from((lo, hi): (i64, i64)) -> Self {
        Self::Range(lo, hi)
    }
}

impl From<(i32, i32)> for ConfigValue {
    fn from((lo, hi): (i32, i32)) -> Self {
        Self::Range(i64::from(lo), i64::from(hi))
    }
}

/// An ordered set of properties contributed by one layer of a variant schema.
pub type PartialConfig = IndexMap<String, ConfigValue>;

/// Caller-chosen variant options, keyed by group name. Iteration order is
/// the order the caller inserted groups; later groups win property collisions.
pub type Selection = IndexMap<String, String>;

/// Build a `PartialConfig` from `(key, value)` pairs.
pub fn partial<V: Into<ConfigValue> + Clone>(pairs: &[(&str, V)]) -> PartialConfig {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone().into()))
        .collect()
}

/// Build a `Selection` from `(group, option)` pairs, preserving their order.
pub fn selection(pairs: &[(&str, &str)]) -> Selection {
    pairs
        .iter()
        .map(|(g, o)| (g.to_string(), o.to_string()))
        .collect()
}

/// The flattened result of variant resolution.
///
/// Owned by whoever builds the post; components only read from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    values: IndexMap<String, ConfigValue>,
}

impl ResolvedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ConfigValue::as_bool)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ConfigValue::as_int)
    }

    /// Parse a string-valued property into one of the closed vocabularies.
    /// Missing keys, non-string values and unknown spellings all yield `None`.
    pub fn parse<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get_str(key).and_then(|s| s.parse().ok())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.values.iter()
    }

    pub(crate) fn insert(&mut self, key: String, value: ConfigValue) {
        self.values.insert(key, value);
    }

    pub fn into_inner(self) -> IndexMap<String, ConfigValue> {
        self.values
    }
}

impl From<PartialConfig> for ResolvedConfig {
    fn from(values: PartialConfig) -> Self {
        Self { values }
    }
}
