//! Ordered enum key to integer code mapping

use crate::error::{EnumExtError, Result};
use crate::enums::host::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from enum key to its integer code.
///
/// Keys and codes are both unique. Iteration follows declaration order,
/// which is also the order every option list is produced in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumDefinition {
    values: IndexMap<String, i64>,
}

impl EnumDefinition {
    /// Build a definition from explicit key/code pairs
    pub fn from_pairs<K: Into<String>>(pairs: impl IntoIterator<Item = (K, i64)>) -> Result<Self> {
        let mut values: IndexMap<String, i64> = IndexMap::new();

        for (key, code) in pairs {
            let key = key.into();
            if values.contains_key(&key) {
                return Err(EnumExtError::DuplicateKey(key));
            }
            if let Some((first, _)) = values.iter().find(|(_, c)| **c == code) {
                return Err(EnumExtError::DuplicateCode {
                    code,
                    first: first.clone(),
                    second: key,
                });
            }
            values.insert(key, code);
        }

        Ok(Self { values })
    }

    /// Build a definition with codes 0..N-1 in the given key order
    pub fn sequential<K: Into<String>>(keys: impl IntoIterator<Item = K>) -> Result<Self> {
        Self::from_pairs(keys.into_iter().zip(0..))
    }

    /// Build from pairs already known to be unique (used by the derive macro)
    pub fn from_static(pairs: &[(&str, i64)]) -> Self {
        let values: IndexMap<String, i64> = pairs.iter().map(|(k, c)| (k.to_string(), *c)).collect();
        debug_assert_eq!(values.len(), pairs.len(), "duplicate keys in static enum definition");
        Self { values }
    }

    pub fn code(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    pub fn key_for(&self, code: i64) -> Option<&str> {
        self.values
            .iter()
            .find(|(_, c)| **c == code)
            .map(|(k, _)| k.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// Map resolved keys to their codes, skipping anything not in the definition
    pub fn codes_for<S: AsRef<str>>(&self, keys: &[S]) -> Vec<i64> {
        keys.iter().filter_map(|k| self.code(k.as_ref())).collect()
    }

    /// Key of the record's current value for `enum_name`.
    ///
    /// Records that store the raw integer code instead of the key are
    /// resolved through [`key_for`](Self::key_for).
    pub fn key_of<'a>(&'a self, record: &'a dyn Record, enum_name: &str) -> Option<&'a str> {
        if let Some(key) = record.enum_key(enum_name) {
            return Some(key);
        }
        record
            .attribute(enum_name)
            .and_then(|value| value.as_i64())
            .and_then(|code| self.key_for(code))
    }

    /// Code of the record's current value for `enum_name`, if it has one
    pub fn code_of(&self, record: &dyn Record, enum_name: &str) -> Option<i64> {
        self.key_of(record, enum_name).and_then(|key| self.code(key))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
