/// Test modules for enum-ext
///
/// Tests are organized into logical groupings:
/// - fixtures: registries shared by the other groups
/// - sets: set expansion, membership predicates and cycle handling
/// - localization: humanized and translated options, display text
/// - queries: WHERE filters and bulk assignment plans
/// - config: TOML configuration loading
/// - derive: `#[derive(EnumDefinition)]`
mod config;
mod fixtures;
mod localization;
