/// Option derivation and display text tests
///
/// The bulk option path must never fail; the single-record path must
/// surface evaluation failures. Translated enums follow the current locale.
mod humanize;
