//! Named sets of enum values and their recursive expansion
//!
//! A set maps a name to member tokens. A member is either a literal enum key
//! or the name of another set, so sets compose into supersets:
//!
//! ```text
//! raw_level  = [unit_test, spec]
//! high_level = [view, controller, integration]
//! minitest   = [raw_level, high_level]
//! ```
//!
//! References are resolved lazily, at expansion time, which lets a set point
//! at a set registered after it. Cycles are reported as configuration errors.

use crate::enums::definition::EnumDefinition;
use crate::error::{EnumExtError, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How expansion treats tokens that are neither enum keys nor set names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Drop unknown tokens and report them in [`Expansion::unknown`]
    #[default]
    Permissive,
    /// Fail with [`EnumExtError::UnknownSetOrKey`]
    Strict,
}

/// Set name to member tokens, for one enum of one host type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetRegistry {
    sets: IndexMap<String, Vec<String>>,
}

impl SetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a set, replacing only a previous set of the same name
    pub fn register<S: Into<String>>(&mut self, name: impl Into<String>, members: impl IntoIterator<Item = S>) {
        let name = name.into();
        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        debug!("Registered set {} = {:?}", name, members);
        self.sets.insert(name, members);
    }

    /// Merge every set from `other` into this registry
    pub fn merge(&mut self, other: SetRegistry) {
        for (name, members) in other.sets {
            self.register(name, members);
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.sets.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// Set names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Result of expanding a token list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Literal enum keys, deduplicated, in enum declaration order
    pub keys: Vec<String>,
    /// Tokens that matched neither a key nor a set (permissive mode only)
    pub unknown: Vec<String>,
}

impl Expansion {
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Walk state shared across one expansion
#[derive(Default)]
struct Walk {
    found: HashSet<String>,
    unknown: Vec<String>,
    expanded: HashSet<String>,
    stack: Vec<String>,
}

/// Resolves set names and literal keys into literal keys
#[derive(Debug, Clone, Copy)]
pub struct SetResolver<'a> {
    enum_name: &'a str,
    definition: &'a EnumDefinition,
    sets: &'a SetRegistry,
    mode: Resolution,
}

impl<'a> SetResolver<'a> {
    pub fn new(enum_name: &'a str, definition: &'a EnumDefinition, sets: &'a SetRegistry) -> Self {
        Self {
            enum_name,
            definition,
            sets,
            mode: Resolution::default(),
        }
    }

    pub fn mode(mut self, mode: Resolution) -> Self {
        self.mode = mode;
        self
    }

    /// Expand tokens into the flat set of literal keys they denote.
    ///
    /// An empty token list expands to nothing without touching the registry.
    pub fn expand<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Expansion> {
        if tokens.is_empty() {
            return Ok(Expansion::default());
        }

        let mut walk = Walk::default();
        self.walk(tokens, &mut walk)?;

        if !walk.unknown.is_empty() {
            match self.mode {
                Resolution::Strict => {
                    return Err(EnumExtError::UnknownSetOrKey {
                        enum_name: self.enum_name.to_string(),
                        tokens: walk.unknown,
                    });
                }
                Resolution::Permissive => {
                    warn!("Ignoring unknown {} tokens: {:?}", self.enum_name, walk.unknown);
                }
            }
        }

        let keys = self
            .definition
            .keys()
            .filter(|key| walk.found.contains(*key))
            .map(str::to_string)
            .collect();

        Ok(Expansion {
            keys,
            unknown: walk.unknown,
        })
    }

    /// Expand tokens and map the keys to their integer codes
    pub fn expand_codes<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<i64>> {
        let expansion = self.expand(tokens)?;
        Ok(self.definition.codes_for(&expansion.keys))
    }

    /// Whether `value` is a member of `set_name`; a missing value never is
    pub fn is_member(&self, value: Option<&str>, set_name: &str) -> Result<bool> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return Ok(false);
        };
        Ok(self.expand(&[set_name])?.contains(value))
    }

    /// Check every registered set: no set shadows a key, no cycles, and
    /// (in strict mode) no unresolvable members.
    ///
    /// Returns the unresolvable members found in permissive mode.
    pub fn validate(&self) -> Result<Vec<String>> {
        let mut unresolved = Vec::new();

        for name in self.sets.names() {
            if self.definition.contains(name) {
                return Err(EnumExtError::SetShadowsKey {
                    enum_name: self.enum_name.to_string(),
                    set_name: name.to_string(),
                });
            }

            let mut walk = Walk::default();
            self.walk(&[name], &mut walk)?;
            for token in walk.unknown {
                if !unresolved.contains(&token) {
                    unresolved.push(token);
                }
            }
        }

        if !unresolved.is_empty() && self.mode == Resolution::Strict {
            return Err(EnumExtError::UnknownSetOrKey {
                enum_name: self.enum_name.to_string(),
                tokens: unresolved,
            });
        }

        Ok(unresolved)
    }

    fn walk<S: AsRef<str>>(&self, tokens: &[S], walk: &mut Walk) -> Result<()> {
        for token in tokens {
            let token = token.as_ref();

            if self.definition.contains(token) {
                walk.found.insert(token.to_string());
                continue;
            }

            let Some(members) = self.sets.get(token) else {
                if !walk.unknown.iter().any(|t| t == token) {
                    walk.unknown.push(token.to_string());
                }
                continue;
            };

            if let Some(start) = walk.stack.iter().position(|s| s == token) {
                let mut path = walk.stack[start..].to_vec();
                path.push(token.to_string());
                return Err(EnumExtError::CyclicSetReference {
                    enum_name: self.enum_name.to_string(),
                    path,
                });
            }

            if walk.expanded.contains(token) {
                continue;
            }

            walk.stack.push(token.to_string());
            self.walk(members, walk)?;
            walk.stack.pop();
            walk.expanded.insert(token.to_string());
        }

        Ok(())
    }
}
