pub mod assign;
pub mod check;
pub mod expand;
pub mod filter;
pub mod options;
pub mod show;

use anyhow::Result;
use clap::Args;
use enum_ext::config::EnumExtConfig;
use enum_ext::{Catalog, EnumExt, EnumRegistry};
use std::sync::Arc;

/// Model and enum a command operates on
#[derive(Args, Debug, Clone)]
pub struct EnumTarget {
    /// Model name (e.g., "Request")
    pub model: String,
    /// Enum attribute name (e.g., "status")
    pub enum_name: String,
}

/// Registry built from the loaded config, plus its locale catalog
pub struct Session {
    pub registry: EnumRegistry,
    pub catalog: Arc<Catalog>,
}

impl Session {
    pub fn build(config: &EnumExtConfig) -> Result<Self> {
        let (registry, catalog) = config.build_registry()?;
        Ok(Self { registry, catalog })
    }

    pub fn enum_ext(&self, target: &EnumTarget) -> Result<&EnumExt> {
        Ok(self.registry.get(&target.model, &target.enum_name)?)
    }
}
