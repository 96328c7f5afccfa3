//! Host types and the record capability the extensions read through

use crate::enums::definition::EnumDefinition;
use crate::naming::{pluralize, snake_case};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Persisted record type an enum is attached to (e.g. `Request`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostType {
    /// Model name as written in code (e.g. "Request", "Admin::Order")
    pub name: String,
    /// Backing table name
    pub table: String,
    /// Column names, used for bulk-update timestamps and attribute naming
    #[serde(default)]
    pub columns: Vec<String>,
}

impl HostType {
    /// Create a host whose table is the pluralized, snake-cased model name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let base = snake_case(&name).replace('/', "_");
        Self {
            table: pluralize(&base),
            name,
            columns: Vec::new(),
        }
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

/// Read access to one record instance
pub trait Record {
    /// Current key of the named enum attribute
    fn enum_key(&self, enum_name: &str) -> Option<&str>;

    /// Any other attribute, for display computations
    fn attribute(&self, name: &str) -> Option<Value>;
}

impl Record for Map<String, Value> {
    fn enum_key(&self, enum_name: &str) -> Option<&str> {
        self.get(enum_name).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Stand-in record holding nothing but one enum value.
///
/// Used to evaluate block humanizations when no live record exists.
#[derive(Debug, Clone)]
pub struct Prototype {
    enum_name: String,
    key: String,
}

impl Prototype {
    pub fn new(enum_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            enum_name: enum_name.into(),
            key: key.into(),
        }
    }
}

impl Record for Prototype {
    fn enum_key(&self, enum_name: &str) -> Option<&str> {
        (enum_name == self.enum_name).then_some(self.key.as_str())
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        (name == self.enum_name).then(|| Value::String(self.key.clone()))
    }
}

/// Rust enums that can describe themselves as an [`EnumDefinition`]
pub trait HasEnumDefinition: Sized {
    fn enum_definition() -> EnumDefinition;

    fn as_key(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self>;

    fn code(&self) -> Option<i64> {
        Self::enum_definition().code(self.as_key())
    }
}
