//! Named sets, query filters, bulk assignment and localized select options
//! for integer-coded enums attached to persisted record types.
//!
//! ```
//! use enum_ext::{EnumDefinition, HostType, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! builder.host(HostType::new("Request"));
//! builder
//!     .define_enum("Request", "status", EnumDefinition::sequential(["in_cart", "payed", "delivered"])?)?;
//! builder.register_sets("Request", "status", [("done", vec!["payed", "delivered"])])?;
//!
//! let registry = builder.finalize()?;
//! let status = registry.get("Request", "status")?;
//! assert_eq!(status.set_codes("done")?, vec![1, 2]);
//! # Ok::<(), enum_ext::EnumExtError>(())
//! ```

extern crate self as enum_ext;

pub mod config;
pub mod enums;
pub mod error;
pub mod i18n;
pub mod naming;
pub mod query;
pub mod registry;

pub use enum_ext_macros::EnumDefinition;
pub use enums::{
    DisplayValue, EnumDefinition, Expansion, HasEnumDefinition, HostType, LocalizationRegistry, OptionPair,
    OptionValue, Prototype, Record, RecordFn, Resolution, SetRegistry,
};
pub use error::{EnumExtError, Result};
pub use i18n::{Catalog, Translator};
pub use query::{BulkUpdate, Filter, FilterValue};
pub use registry::{install, registry, EnumExt, EnumRegistry, EnumSummary, RegistryBuilder};
