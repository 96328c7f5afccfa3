//! In-memory translation catalog with runtime locale switching

use super::Translator;
use crate::error::{EnumExtError, Result};
use anyhow::Context;
use arc_swap::ArcSwap;
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Translations per locale, flattened to dotted keys
#[derive(Debug)]
pub struct Catalog {
    translations: HashMap<String, HashMap<String, String>>,
    current: ArcSwap<String>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            translations: HashMap::new(),
            current: ArcSwap::from_pointee(locale.into()),
        }
    }

    /// Add translations for a locale, merging with what is already there
    pub fn with_locale<K, V>(mut self, locale: &str, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let table = self.translations.entry(locale.to_string()).or_default();
        for (key, value) in entries {
            table.insert(key.into(), value.into());
        }
        self
    }

    /// Add every locale found in a TOML table (`[en.activerecord...]`)
    pub fn with_toml(mut self, locales: &toml::Table) -> Self {
        for (locale, tree) in locales {
            let mut flat = Vec::new();
            flatten(String::new(), tree, &mut flat);
            debug!("Loaded {} translations for locale {}", flat.len(), locale);
            self = self.with_locale(locale, flat);
        }
        self
    }

    /// Load a catalog from a TOML file whose top-level tables are locales
    pub fn load(path: &Path, locale: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale file: {:?}", path))?;
        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse locale file: {:?}", path))?;

        info!("Loaded locale file {:?}", path);
        Ok(Self::new(locale).with_toml(&table))
    }

    /// Switch the locale used by subsequent lookups
    pub fn set_locale(&self, locale: impl Into<String>) {
        let locale = locale.into();
        debug!("Switching locale to {}", locale);
        self.current.store(Arc::new(locale));
    }

    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.translations.keys().map(String::as_str).collect();
        locales.sort();
        locales
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> Result<String> {
        let locale = self.current.load();
        self.translations
            .get(locale.as_str())
            .and_then(|table| table.get(key))
            .cloned()
            .ok_or_else(|| EnumExtError::MissingTranslation {
                locale: locale.to_string(),
                key: key.to_string(),
            })
    }

    fn locale(&self) -> String {
        self.current.load().to_string()
    }
}

/// Flatten nested TOML tables into dotted keys
fn flatten(prefix: String, value: &toml::Value, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(path, child, out);
            }
        }
        toml::Value::String(text) => out.push((prefix, text.clone())),
        other => out.push((prefix, other.to_string())),
    }
}
