//! Setup-phase registration of enums, sets and display values

use super::ext::EnumExt;
use super::EnumRegistry;
use crate::enums::definition::EnumDefinition;
use crate::enums::host::{HasEnumDefinition, HostType};
use crate::enums::localization::{DisplayValue, LocalizationRegistry, RecordFn};
use crate::enums::sets::{Resolution, SetRegistry, SetResolver};
use crate::error::{EnumExtError, Result};
use crate::i18n::Translator;
use crate::naming::{pluralize, snake_case};
use indexmap::IndexMap;
use log::{debug, info, warn};
use std::sync::Arc;

/// Everything registered for one enum before finalize
#[derive(Debug, Clone)]
struct EnumSetup {
    definition: EnumDefinition,
    sets: SetRegistry,
    localizations: Option<LocalizationRegistry>,
}

/// Mutable registry used while host types are being defined.
///
/// Registration merges: sets replace only a set of the same name and
/// display values replace only the keys they name. [`finalize`](Self::finalize)
/// validates everything and hands out the read-only [`EnumRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    hosts: IndexMap<String, HostType>,
    enums: IndexMap<String, IndexMap<String, EnumSetup>>,
    mode: Resolution,
    touch_updated_at: bool,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            touch_updated_at: true,
            ..Self::default()
        }
    }

    /// Fail on tokens that are neither keys nor sets instead of dropping them
    pub fn strict(mut self, strict: bool) -> Self {
        self.mode = if strict { Resolution::Strict } else { Resolution::Permissive };
        self
    }

    /// Whether bulk assignment stamps `updated_at` on tables that have it
    pub fn touch_updated_at(mut self, touch: bool) -> Self {
        self.touch_updated_at = touch;
        self
    }

    /// Register a host type; registering it again updates its descriptor
    pub fn host(&mut self, host: HostType) {
        debug!("Registered host {} (table {})", host.name, host.table);
        self.enums.entry(host.name.clone()).or_default();
        self.hosts.insert(host.name.clone(), host);
    }

    /// Attach an enum to a host; sets and display values already registered are kept
    pub fn define_enum(&mut self, host: &str, enum_name: &str, definition: EnumDefinition) -> Result<()> {
        let enums = self
            .enums
            .get_mut(host)
            .ok_or_else(|| EnumExtError::UnknownHost(host.to_string()))?;

        debug!("Defined enum {}.{} with {} values", host, enum_name, definition.len());
        match enums.get_mut(enum_name) {
            Some(setup) => setup.definition = definition,
            None => {
                enums.insert(
                    enum_name.to_string(),
                    EnumSetup {
                        definition,
                        sets: SetRegistry::new(),
                        localizations: None,
                    },
                );
            }
        }
        Ok(())
    }

    /// Attach an enum described by a Rust type
    pub fn define_enum_from<T: HasEnumDefinition>(&mut self, host: &str, enum_name: &str) -> Result<()> {
        self.define_enum(host, enum_name, T::enum_definition())
    }

    /// Register named sets for an enum
    pub fn register_sets<N, M, S>(&mut self, host: &str, enum_name: &str, sets: impl IntoIterator<Item = (N, M)>) -> Result<()>
    where
        N: Into<String>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let setup = self.setup_mut(host, enum_name)?;
        for (name, members) in sets {
            setup.sets.register(name, members);
        }
        Ok(())
    }

    /// Register display values (literals or computations) for some keys
    pub fn humanize<K, V>(&mut self, host: &str, enum_name: &str, entries: impl IntoIterator<Item = (K, V)>) -> Result<()>
    where
        K: Into<String>,
        V: Into<DisplayValue>,
    {
        let setup = self.setup_mut(host, enum_name)?;
        setup
            .localizations
            .get_or_insert_with(LocalizationRegistry::new)
            .merge(entries);
        Ok(())
    }

    /// Humanize every key through one record-level block
    pub fn humanize_with(&mut self, host: &str, enum_name: &str, block: RecordFn) -> Result<()> {
        let setup = self.setup_mut(host, enum_name)?;
        let definition = setup.definition.clone();
        setup
            .localizations
            .get_or_insert_with(LocalizationRegistry::new)
            .humanize_with(enum_name, &definition, block);
        Ok(())
    }

    /// Translate every key through `translator`.
    ///
    /// Without an explicit scope keys are looked up under
    /// `activerecord.attributes.<model>.<enum plural>.<key>`.
    pub fn translate(
        &mut self,
        host: &str,
        enum_name: &str,
        translator: Arc<dyn Translator>,
        scope: Option<&str>,
    ) -> Result<()> {
        let scope = match scope {
            Some(scope) => scope.to_string(),
            None => default_scope(host, enum_name),
        };
        let setup = self.setup_mut(host, enum_name)?;
        let definition = setup.definition.clone();

        debug!("Translating {}.{} under {}", host, enum_name, scope);
        setup
            .localizations
            .get_or_insert_with(LocalizationRegistry::new)
            .translate(&definition, translator, &scope);
        Ok(())
    }

    /// Validate every enum and freeze the registry
    pub fn finalize(self) -> Result<EnumRegistry> {
        let mut enums: IndexMap<String, IndexMap<String, EnumExt>> = IndexMap::new();
        let mut total = 0;

        for (host_name, setups) in self.enums {
            let host = self
                .hosts
                .get(&host_name)
                .cloned()
                .ok_or_else(|| EnumExtError::UnknownHost(host_name.clone()))?;

            let mut host_enums = IndexMap::new();
            for (enum_name, setup) in setups {
                let unresolved = SetResolver::new(&enum_name, &setup.definition, &setup.sets)
                    .mode(self.mode)
                    .validate()?;
                if !unresolved.is_empty() {
                    warn!("{}.{} sets reference unknown values: {:?}", host_name, enum_name, unresolved);
                }

                host_enums.insert(
                    enum_name.clone(),
                    EnumExt::new(
                        host.clone(),
                        enum_name,
                        setup.definition,
                        setup.sets,
                        setup.localizations,
                        self.mode,
                        self.touch_updated_at,
                    ),
                );
                total += 1;
            }
            enums.insert(host_name, host_enums);
        }

        info!("Finalized enum registry: {} hosts, {} enums", self.hosts.len(), total);
        Ok(EnumRegistry::new(self.hosts, enums))
    }

    fn setup_mut(&mut self, host: &str, enum_name: &str) -> Result<&mut EnumSetup> {
        self.enums
            .get_mut(host)
            .ok_or_else(|| EnumExtError::UnknownHost(host.to_string()))?
            .get_mut(enum_name)
            .ok_or_else(|| EnumExtError::UnknownEnum {
                host: host.to_string(),
                enum_name: enum_name.to_string(),
            })
    }
}

/// `activerecord.attributes.<model>.<enum plural>` for a host
pub fn default_scope(host: &str, enum_name: &str) -> String {
    format!("activerecord.attributes.{}.{}", snake_case(host), pluralize(enum_name))
}
