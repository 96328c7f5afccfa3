//! Select options and display text derived from registered display values
//!
//! Two paths read the same [`LocalizationRegistry`]:
//!
//! - the bulk path ([`OptionDeriver::options`]) builds `(text, value)` pairs
//!   for a form select with no record at hand. It never fails: an entry that
//!   cannot be evaluated degrades to an explanatory text.
//! - the single-record path ([`OptionDeriver::display_text`]) renders one
//!   record and propagates evaluation failures.

use crate::enums::definition::EnumDefinition;
use crate::enums::host::Record;
use crate::enums::localization::{DisplayValue, LocalizationRegistry, RecordFn};
use crate::error::{EnumExtError, Result};
use log::warn;
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};

/// Value half of an option pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Key(String),
    Code(i64),
}

/// `(text, value)` pair for populating a select input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionPair {
    pub text: String,
    pub value: OptionValue,
}

impl OptionPair {
    pub fn key(text: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: OptionValue::Key(key.into()),
        }
    }

    pub fn code(text: impl Into<String>, code: i64) -> Self {
        Self {
            text: text.into(),
            value: OptionValue::Code(code),
        }
    }
}

/// Why an entry could not be turned into option text
#[derive(Debug)]
enum Unavailable {
    Failed(anyhow::Error),
    NeedsRecord,
}

/// Pairs returned when set options are requested before any localization
/// was registered for the enum
pub fn missing_translations(enum_name: &str) -> Vec<OptionPair> {
    let text = format!("Enum translations call missed. Did you forget to call translate {}", enum_name);
    vec![OptionPair::key(text.clone(), text)]
}

/// Derives option lists and display text for one enum
#[derive(Debug, Clone, Copy)]
pub struct OptionDeriver<'a> {
    enum_name: &'a str,
    definition: &'a EnumDefinition,
    localizations: &'a LocalizationRegistry,
}

impl<'a> OptionDeriver<'a> {
    pub fn new(enum_name: &'a str, definition: &'a EnumDefinition, localizations: &'a LocalizationRegistry) -> Self {
        Self {
            enum_name,
            definition,
            localizations,
        }
    }

    /// Options for every key, in enum declaration order
    pub fn options(&self) -> Vec<OptionPair> {
        let keys: Vec<&str> = self.definition.keys().collect();
        self.options_for(&keys)
    }

    /// Same as [`options`](Self::options) with integer codes as values
    pub fn options_i(&self) -> Vec<OptionPair> {
        self.with_codes(self.options())
    }

    /// Options for a subset of keys, still in enum declaration order.
    ///
    /// Keys without a registered display value are left out.
    pub fn options_for<S: AsRef<str>>(&self, keys: &[S]) -> Vec<OptionPair> {
        self.definition
            .keys()
            .filter(|key| keys.iter().any(|k| k.as_ref() == *key))
            .filter_map(|key| {
                let value = self.localizations.get(key)?;
                Some(OptionPair::key(self.option_text(key, value), key))
            })
            .collect()
    }

    pub fn options_for_i<S: AsRef<str>>(&self, keys: &[S]) -> Vec<OptionPair> {
        self.with_codes(self.options_for(keys))
    }

    /// Replace each pair's key with its integer code
    pub fn with_codes(&self, pairs: Vec<OptionPair>) -> Vec<OptionPair> {
        pairs
            .into_iter()
            .map(|pair| {
                let code = match &pair.value {
                    OptionValue::Key(key) => self.definition.code(key),
                    OptionValue::Code(_) => None,
                };
                match code {
                    Some(code) => OptionPair::code(pair.text, code),
                    None => pair,
                }
            })
            .collect()
    }

    /// Text for one entry, degrading instead of failing
    fn option_text(&self, key: &str, value: &DisplayValue) -> String {
        match evaluate_detached(value) {
            Ok(text) => text,
            Err(Unavailable::Failed(err)) => {
                warn!("Option for {}.{} failed to evaluate: {}", self.enum_name, key, err);
                format!("Cannot create option for {} ( proc fails to evaluate )", key)
            }
            Err(Unavailable::NeedsRecord) => format!("Cannot create option for {} because of a lambda", key),
        }
    }

    /// Display text for one record.
    ///
    /// `override_block` wins over anything registered; then the registered
    /// humanize block; then the entry for the record's current key. A record
    /// with no value, or a key with no entry, renders as an empty string.
    pub fn display_text(&self, record: &dyn Record, override_block: Option<&RecordFn>) -> Result<String> {
        let key = self.definition.key_of(record, self.enum_name).unwrap_or_default();
        let failure = |err: anyhow::Error| EnumExtError::EvaluationFailure {
            key: key.to_string(),
            message: err.to_string(),
        };

        if let Some(block) = override_block.or(self.localizations.block()) {
            return block(record).map_err(failure);
        }

        match self.localizations.get(key) {
            Some(DisplayValue::Literal(text)) => Ok(text.clone()),
            Some(DisplayValue::Deferred(f)) => f().map_err(failure),
            Some(DisplayValue::PerRecord(f)) => f(record).map_err(failure),
            None => Ok(String::new()),
        }
    }
}

fn evaluate_detached(value: &DisplayValue) -> std::result::Result<String, Unavailable> {
    match value {
        DisplayValue::Literal(text) => Ok(text.clone()),
        DisplayValue::Deferred(f) => match panic::catch_unwind(AssertUnwindSafe(|| f())) {
            Ok(result) => result.map_err(Unavailable::Failed),
            Err(_) => Err(Unavailable::Failed(anyhow::anyhow!("computation panicked"))),
        },
        DisplayValue::PerRecord(_) => Err(Unavailable::NeedsRecord),
    }
}
