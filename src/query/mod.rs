//! Query and bulk-update plans built from resolved enum values
//!
//! Nothing here talks to a database. Filters render to SQL fragments and
//! bulk updates to `UPDATE` statements for the persistence layer to run.

pub mod bulk;
pub mod filters;

pub use bulk::BulkUpdate;
pub use filters::{Filter, FilterValue};
