//! Human-readable display values registered per enum key

use crate::enums::definition::EnumDefinition;
use crate::enums::host::{Prototype, Record};
use crate::i18n::Translator;
use indexmap::IndexMap;
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Computation evaluated without any record
pub type DeferredFn = Arc<dyn Fn() -> anyhow::Result<String> + Send + Sync>;

/// Computation evaluated against one record
pub type RecordFn = Arc<dyn Fn(&dyn Record) -> anyhow::Result<String> + Send + Sync>;

/// Raw, unresolved value producing the text for one enum key
#[derive(Clone)]
pub enum DisplayValue {
    /// Fixed text
    Literal(String),
    /// Zero-argument computation, evaluated with no record bound
    Deferred(DeferredFn),
    /// Computation that needs the record being displayed
    PerRecord(RecordFn),
}

impl DisplayValue {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn() -> anyhow::Result<String> + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(f))
    }

    pub fn per_record<F>(f: F) -> Self
    where
        F: Fn(&dyn Record) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        Self::PerRecord(Arc::new(f))
    }
}

impl fmt::Debug for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            DisplayValue::Deferred(_) => f.write_str("Deferred(..)"),
            DisplayValue::PerRecord(_) => f.write_str("PerRecord(..)"),
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(text: &str) -> Self {
        DisplayValue::Literal(text.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(text: String) -> Self {
        DisplayValue::Literal(text)
    }
}

/// Key to display value for one enum, merged across registrations
#[derive(Clone, Default)]
pub struct LocalizationRegistry {
    entries: IndexMap<String, DisplayValue>,
    block: Option<RecordFn>,
}

impl LocalizationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge entries in; keys registered earlier and not named here are kept.
    /// Any block set by [`humanize_with`](Self::humanize_with) is dropped.
    pub fn merge<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<DisplayValue>,
    {
        for (key, value) in entries {
            let key = key.into();
            debug!("Registered display value for {}", key);
            self.entries.insert(key, value.into());
        }
        self.block = None;
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DisplayValue>) {
        self.entries.insert(key.into(), value.into());
        self.block = None;
    }

    /// Humanize every key through one record-level block.
    ///
    /// Each key also gets a deferred entry that runs the block against a
    /// [`Prototype`] record, so option lists work without a live record.
    pub fn humanize_with(&mut self, enum_name: &str, definition: &EnumDefinition, block: RecordFn) {
        for key in definition.keys() {
            let block = Arc::clone(&block);
            let prototype = Prototype::new(enum_name, key);
            self.entries.insert(
                key.to_string(),
                DisplayValue::Deferred(Arc::new(move || block(&prototype as &dyn Record))),
            );
        }
        self.block = Some(block);
    }

    /// Translate every key through `translator` under `scope.<key>`.
    ///
    /// The lookup happens at evaluation time, so locale switches made after
    /// registration are honoured.
    pub fn translate(&mut self, definition: &EnumDefinition, translator: Arc<dyn Translator>, scope: &str) {
        for key in definition.keys() {
            let translator = Arc::clone(&translator);
            let path = format!("{}.{}", scope, key);
            self.entries.insert(
                key.to_string(),
                DisplayValue::Deferred(Arc::new(move || -> anyhow::Result<String> {
                    Ok(translator.translate(&path)?)
                })),
            );
        }
        self.block = None;
    }

    pub fn get(&self, key: &str) -> Option<&DisplayValue> {
        self.entries.get(key)
    }

    /// Record-level block registered through [`humanize_with`](Self::humanize_with)
    pub fn block(&self) -> Option<&RecordFn> {
        self.block.as_ref()
    }

    /// Entries restricted to `keys`, in the order of `keys`
    pub fn slice<S: AsRef<str>>(&self, keys: &[S]) -> LocalizationRegistry {
        let entries = keys
            .iter()
            .filter_map(|k| {
                let k = k.as_ref();
                self.entries.get(k).map(|v| (k.to_string(), v.clone()))
            })
            .collect();
        LocalizationRegistry {
            entries,
            block: self.block.clone(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DisplayValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for LocalizationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizationRegistry")
            .field("entries", &self.entries)
            .field("block", &self.block.is_some())
            .finish()
    }
}
