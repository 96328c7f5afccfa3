//! Read-only view of one enum on one host type
//!
//! For an enum named `status` on `Request`, this is where the helpers live
//! that a dynamic ORM would generate as methods:
//!
//! | generated helper                   | here                              |
//! |------------------------------------|-----------------------------------|
//! | `with_statuses(*tokens)`           | [`EnumExt::with_filter`]          |
//! | `without_statuses(*tokens)`        | [`EnumExt::without_filter`]       |
//! | `delivery_set` scope               | [`EnumExt::set_filter`]           |
//! | `delivery_set_statuses(_i)`        | [`EnumExt::set_keys`] / `set_codes` |
//! | `request.delivery_set?`            | [`EnumExt::in_set`]               |
//! | `request.status_i`                 | [`EnumExt::code_of`]              |
//! | `Request.payed!` (mass assign)     | [`EnumExt::mass_assign`]          |
//! | `t_statuses_options(_i)`           | [`EnumExt::options`] / `options_i` |
//! | `t_delivery_set_statuses_options`  | [`EnumExt::set_options`]          |
//! | `request.t_status`                 | [`EnumExt::display_text`]         |
//! | `request.t_status = key`           | [`EnumExt::assign_key`]           |
//! | `all_statuses`                     | [`EnumExt::summary`]              |

use crate::enums::definition::EnumDefinition;
use crate::enums::host::{HostType, Record};
use crate::enums::localization::{DisplayValue, LocalizationRegistry, RecordFn};
use crate::enums::options::{missing_translations, OptionDeriver, OptionPair};
use crate::enums::sets::{Expansion, Resolution, SetRegistry, SetResolver};
use crate::error::{EnumExtError, Result};
use crate::naming::{human_attribute_name, pluralize};
use crate::query::bulk::{BulkUpdate, UPDATED_AT};
use crate::query::filters::Filter;
use chrono::Utc;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

/// Values and sets of one enum, as a serializable summary
#[derive(Debug, Clone, Serialize)]
pub struct EnumSummary {
    pub host: String,
    pub enum_name: String,
    pub values: EnumDefinition,
    /// Sets as registered
    pub sets: SetRegistry,
    /// Sets expanded to literal keys
    pub expanded: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct EnumExt {
    host: HostType,
    enum_name: String,
    plural: String,
    definition: EnumDefinition,
    sets: SetRegistry,
    localizations: Option<LocalizationRegistry>,
    mode: Resolution,
    touch_updated_at: bool,
}

impl EnumExt {
    pub(crate) fn new(
        host: HostType,
        enum_name: String,
        definition: EnumDefinition,
        sets: SetRegistry,
        localizations: Option<LocalizationRegistry>,
        mode: Resolution,
        touch_updated_at: bool,
    ) -> Self {
        Self {
            plural: pluralize(&enum_name),
            host,
            enum_name,
            definition,
            sets,
            localizations,
            mode,
            touch_updated_at,
        }
    }

    pub fn host(&self) -> &HostType {
        &self.host
    }

    pub fn name(&self) -> &str {
        &self.enum_name
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    pub fn definition(&self) -> &EnumDefinition {
        &self.definition
    }

    pub fn sets(&self) -> &SetRegistry {
        &self.sets
    }

    pub fn mode(&self) -> Resolution {
        self.mode
    }

    pub fn resolver(&self) -> SetResolver<'_> {
        SetResolver::new(&self.enum_name, &self.definition, &self.sets).mode(self.mode)
    }

    // Sets

    pub fn expand<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Expansion> {
        self.resolver().expand(tokens)
    }

    pub fn expand_codes<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<i64>> {
        self.resolver().expand_codes(tokens)
    }

    /// Literal keys of a registered set
    pub fn set_keys(&self, set_name: &str) -> Result<Vec<String>> {
        self.require_set(set_name)?;
        Ok(self.expand(&[set_name])?.keys)
    }

    /// Integer codes of a registered set
    pub fn set_codes(&self, set_name: &str) -> Result<Vec<i64>> {
        let keys = self.set_keys(set_name)?;
        Ok(self.definition.codes_for(&keys))
    }

    /// Whether a raw enum value belongs to a set
    pub fn is_member(&self, value: Option<&str>, set_name: &str) -> Result<bool> {
        self.require_set(set_name)?;
        self.resolver().is_member(value, set_name)
    }

    /// Whether the record's current value belongs to a set
    pub fn in_set(&self, record: &dyn Record, set_name: &str) -> Result<bool> {
        self.is_member(self.definition.key_of(record, &self.enum_name), set_name)
    }

    /// Integer code of the record's current value
    pub fn code_of(&self, record: &dyn Record) -> Option<i64> {
        self.definition.code_of(record, &self.enum_name)
    }

    // Query filters

    /// `column IN (...)` over the expanded tokens; `None` when no tokens are given
    pub fn with_filter<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Option<Filter>> {
        if tokens.is_empty() {
            return Ok(None);
        }
        let codes = self.expand_codes(tokens)?;
        Ok(Some(Filter::is_in(self.enum_name.as_str(), codes)))
    }

    /// `column NOT IN (...)` over the expanded tokens; `None` when no tokens are given
    pub fn without_filter<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Option<Filter>> {
        if tokens.is_empty() {
            return Ok(None);
        }
        let codes = self.expand_codes(tokens)?;
        Ok(Some(Filter::not_in(self.enum_name.as_str(), codes)))
    }

    /// Named scope for a registered set
    pub fn set_filter(&self, set_name: &str) -> Result<Filter> {
        let codes = self.set_codes(set_name)?;
        Ok(Filter::is_in(self.enum_name.as_str(), codes))
    }

    // Bulk assignment

    /// Plan assigning `key` to every row of the host table.
    ///
    /// Narrow it with [`BulkUpdate::scoped`]. `updated_at` is stamped when
    /// the host has that column.
    pub fn mass_assign(&self, key: &str) -> Result<BulkUpdate> {
        let code = self.require_key(key)?;
        let update = BulkUpdate::assign(self.host.table.as_str(), self.enum_name.as_str(), code);

        debug!("Mass assign {}.{} = {} ({})", self.host.name, self.enum_name, key, code);
        if self.touch_updated_at && self.host.has_column(UPDATED_AT) {
            Ok(update.touch(Utc::now()))
        } else {
            Ok(update)
        }
    }

    // Localization

    /// Registered display values, if any were registered
    pub fn localizations(&self) -> Option<&LocalizationRegistry> {
        self.localizations.as_ref()
    }

    /// Options for every key; the missing-translation sentinel when nothing
    /// was registered
    pub fn options(&self) -> Vec<OptionPair> {
        match self.deriver() {
            Some(deriver) => deriver.options(),
            None => missing_translations(&self.enum_name),
        }
    }

    pub fn options_i(&self) -> Vec<OptionPair> {
        match self.deriver() {
            Some(deriver) => deriver.options_i(),
            None => missing_translations(&self.enum_name),
        }
    }

    /// Display values restricted to a set's members
    pub fn set_localizations(&self, set_name: &str) -> Result<LocalizationRegistry> {
        let keys = self.set_keys(set_name)?;
        Ok(match &self.localizations {
            Some(localizations) => localizations.slice(&keys),
            None => {
                let text = missing_translations(&self.enum_name).remove(0).text;
                let mut sentinel = LocalizationRegistry::new();
                sentinel.insert(text.clone(), DisplayValue::Literal(text));
                sentinel
            }
        })
    }

    /// Options for a set's members
    pub fn set_options(&self, set_name: &str) -> Result<Vec<OptionPair>> {
        let keys = self.set_keys(set_name)?;
        Ok(match self.deriver() {
            Some(deriver) => deriver.options_for(&keys),
            None => missing_translations(&self.enum_name),
        })
    }

    pub fn set_options_i(&self, set_name: &str) -> Result<Vec<OptionPair>> {
        let keys = self.set_keys(set_name)?;
        Ok(match self.deriver() {
            Some(deriver) => deriver.options_for_i(&keys),
            None => missing_translations(&self.enum_name),
        })
    }

    /// Display text for one record; evaluation failures propagate
    pub fn display_text(&self, record: &dyn Record, override_block: Option<&RecordFn>) -> Result<String> {
        let empty = LocalizationRegistry::new();
        let localizations = self.localizations.as_ref().unwrap_or(&empty);
        OptionDeriver::new(&self.enum_name, &self.definition, localizations).display_text(record, override_block)
    }

    /// Write `key` into a JSON record after checking it is a value of this enum
    pub fn assign_key(&self, record: &mut Map<String, Value>, key: &str) -> Result<()> {
        self.require_key(key)?;
        record.insert(self.enum_name.clone(), Value::String(key.to_string()));
        Ok(())
    }

    /// Attribute label with `t_<enum>` routed to the enum column
    pub fn human_attribute_name(&self, name: &str, fallback: impl Fn(&str) -> String) -> String {
        human_attribute_name(&self.host, name, fallback)
    }

    pub fn summary(&self) -> Result<EnumSummary> {
        let mut expanded = IndexMap::new();
        for name in self.sets.names() {
            expanded.insert(name.to_string(), self.expand(&[name])?.keys);
        }

        Ok(EnumSummary {
            host: self.host.name.clone(),
            enum_name: self.enum_name.clone(),
            values: self.definition.clone(),
            sets: self.sets.clone(),
            expanded,
        })
    }

    fn deriver(&self) -> Option<OptionDeriver<'_>> {
        self.localizations
            .as_ref()
            .map(|localizations| OptionDeriver::new(&self.enum_name, &self.definition, localizations))
    }

    fn require_set(&self, set_name: &str) -> Result<()> {
        if self.sets.contains(set_name) {
            Ok(())
        } else {
            Err(EnumExtError::UnknownSetOrKey {
                enum_name: self.enum_name.clone(),
                tokens: vec![set_name.to_string()],
            })
        }
    }

    fn require_key(&self, key: &str) -> Result<i64> {
        self.definition.code(key).ok_or_else(|| EnumExtError::UnknownEnumKey {
            enum_name: self.enum_name.clone(),
            key: key.to_string(),
        })
    }
}
