//! Enum definitions, named sets and display values

pub mod definition;
pub mod host;
pub mod localization;
pub mod options;
pub mod sets;

pub use definition::EnumDefinition;
pub use host::{HasEnumDefinition, HostType, Prototype, Record};
pub use localization::{DeferredFn, DisplayValue, LocalizationRegistry, RecordFn};
pub use options::{missing_translations, OptionDeriver, OptionPair, OptionValue};
pub use sets::{Expansion, Resolution, SetRegistry, SetResolver};
