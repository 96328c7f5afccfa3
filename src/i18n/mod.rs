//! Localization backend used by translated enums
//!
//! The enum layer only needs key lookup under the current locale; the
//! [`Translator`] trait is that seam and [`Catalog`] the in-memory backend.

pub mod catalog;

pub use catalog::Catalog;

use crate::error::Result;

/// String lookup by dotted key under the current locale
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> Result<String>;

    fn locale(&self) -> String;
}
