//! Registry of host types and their extended enums
//!
//! Registration happens on a [`RegistryBuilder`] during setup. After
//! [`RegistryBuilder::finalize`] the resulting [`EnumRegistry`] is read-only
//! and can be shared freely, or installed once as the process-wide registry.

pub mod builder;
pub mod ext;

pub use builder::{default_scope, RegistryBuilder};
pub use ext::{EnumExt, EnumSummary};

use crate::enums::host::HostType;
use crate::error::{EnumExtError, Result};
use indexmap::IndexMap;
use log::info;
use once_cell::sync::OnceCell;
use std::sync::Arc;

static REGISTRY: OnceCell<Arc<EnumRegistry>> = OnceCell::new();

/// Finalized, read-only registry
#[derive(Debug, Clone)]
pub struct EnumRegistry {
    hosts: IndexMap<String, HostType>,
    enums: IndexMap<String, IndexMap<String, EnumExt>>,
}

impl EnumRegistry {
    pub(crate) fn new(hosts: IndexMap<String, HostType>, enums: IndexMap<String, IndexMap<String, EnumExt>>) -> Self {
        Self { hosts, enums }
    }

    /// Extended enum `enum_name` of host `host`
    pub fn get(&self, host: &str, enum_name: &str) -> Result<&EnumExt> {
        self.enums
            .get(host)
            .ok_or_else(|| EnumExtError::UnknownHost(host.to_string()))?
            .get(enum_name)
            .ok_or_else(|| EnumExtError::UnknownEnum {
                host: host.to_string(),
                enum_name: enum_name.to_string(),
            })
    }

    pub fn host(&self, name: &str) -> Option<&HostType> {
        self.hosts.get(name)
    }

    pub fn hosts(&self) -> impl Iterator<Item = &HostType> {
        self.hosts.values()
    }

    /// Extended enums of one host, in registration order
    pub fn enums(&self, host: &str) -> impl Iterator<Item = &EnumExt> {
        self.enums.get(host).into_iter().flat_map(|enums| enums.values())
    }

    pub fn is_empty(&self) -> bool {
        self.enums.values().all(IndexMap::is_empty)
    }
}

/// Install the process-wide registry. Only the first call succeeds.
pub fn install(registry: EnumRegistry) -> Result<Arc<EnumRegistry>> {
    let registry = Arc::new(registry);
    REGISTRY
        .set(Arc::clone(&registry))
        .map_err(|_| EnumExtError::AlreadyInstalled)?;
    info!("Installed global enum registry");
    Ok(registry)
}

/// The process-wide registry, if one was installed
pub fn registry() -> Option<Arc<EnumRegistry>> {
    REGISTRY.get().cloned()
}
