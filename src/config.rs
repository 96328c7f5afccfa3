//! TOML configuration describing models, their enums and locale catalogs
//!
//! ```toml
//! [settings]
//! default_locale = "en"
//!
//! [models.Request]
//! columns = ["id", "status", "updated_at"]
//!
//! [models.Request.enums.status]
//! values = ["in_cart", "waiting_for_payment", "payed", "delivered"]
//! translate = true
//!
//! [models.Request.enums.status.sets]
//! in_basket = ["in_cart", "waiting_for_payment"]
//!
//! [locales.en.activerecord.attributes.request.statuses]
//! in_cart = "In cart"
//! ```

use crate::enums::definition::EnumDefinition;
use crate::enums::host::HostType;
use crate::i18n::{Catalog, Translator};
use crate::registry::{EnumRegistry, RegistryBuilder};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnumExtConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub models: IndexMap<String, ModelConfig>,
    /// Locale name to nested translation tables
    #[serde(default)]
    pub locales: toml::Table,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Reject unknown set members and tokens instead of dropping them
    #[serde(default)]
    pub strict_sets: bool,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default = "default_touch_updated_at")]
    pub touch_updated_at: bool,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_touch_updated_at() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict_sets: false,
            default_locale: default_locale(),
            touch_updated_at: default_touch_updated_at(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Table name; derived from the model name when omitted
    pub table: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub enums: IndexMap<String, EnumConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumConfig {
    pub values: EnumValues,
    #[serde(default)]
    pub sets: IndexMap<String, Vec<String>>,
    /// Literal display texts per key
    #[serde(default)]
    pub humanize: IndexMap<String, String>,
    /// Look display texts up in the locale catalogs
    #[serde(default)]
    pub translate: bool,
    /// Translation scope overriding `activerecord.attributes.<model>.<enum plural>`
    pub scope: Option<String>,
}

/// Enum values as a list (codes by position) or an explicit key to code table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValues {
    List(Vec<String>),
    Codes(IndexMap<String, i64>),
}

impl EnumValues {
    pub fn to_definition(&self) -> crate::error::Result<EnumDefinition> {
        match self {
            EnumValues::List(keys) => EnumDefinition::sequential(keys.iter().cloned()),
            EnumValues::Codes(codes) => EnumDefinition::from_pairs(codes.iter().map(|(k, v)| (k.clone(), *v))),
        }
    }
}

impl EnumExtConfig {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("enum-ext")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".enum-ext")
        };

        Ok(config_dir.join("enum-ext.toml"))
    }

    /// Load from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            anyhow::bail!("Config file not found: {:?}", config_path);
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config = Self::parse(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config with {} models", config.models.len());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Locale catalog built from `[locales]`, starting at the default locale
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.settings.default_locale.as_str()).with_toml(&self.locales)
    }

    /// Register every model and enum and finalize the registry.
    ///
    /// The returned catalog backs every translated enum; switching its
    /// locale changes their texts.
    pub fn build_registry(&self) -> Result<(EnumRegistry, Arc<Catalog>)> {
        let catalog = Arc::new(self.catalog());
        let mut builder = RegistryBuilder::new()
            .strict(self.settings.strict_sets)
            .touch_updated_at(self.settings.touch_updated_at);

        for (model_name, model) in &self.models {
            let mut host = HostType::new(model_name.as_str()).columns(model.columns.iter().cloned());
            if let Some(table) = &model.table {
                host = host.table(table.as_str());
            }
            builder.host(host);

            for (enum_name, enum_config) in &model.enums {
                let definition = enum_config
                    .values
                    .to_definition()
                    .with_context(|| format!("Invalid values for {}.{}", model_name, enum_name))?;
                builder.define_enum(model_name, enum_name, definition)?;
                builder.register_sets(model_name, enum_name, enum_config.sets.clone())?;

                if !enum_config.humanize.is_empty() {
                    builder.humanize(model_name, enum_name, enum_config.humanize.clone())?;
                }
                if enum_config.translate {
                    let translator: Arc<dyn Translator> = catalog.clone();
                    builder.translate(model_name, enum_name, translator, enum_config.scope.as_deref())?;
                }
            }
        }

        let registry = builder.finalize().context("Invalid enum configuration")?;
        info!("Built registry from config with {} models", self.models.len());
        Ok((registry, catalog))
    }
}
