//! Bulk enum assignment plans (update without per-record callbacks)

use super::filters::{Filter, FilterValue};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Column touched alongside the enum column when the table has it
pub const UPDATED_AT: &str = "updated_at";

/// One `UPDATE ... SET` over a filtered collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkUpdate {
    /// Table name (e.g., "requests")
    pub table: String,
    /// Column/value pairs in SET order
    pub assignments: Vec<(String, FilterValue)>,
    /// Collection restriction; `None` updates every row
    pub filter: Option<Filter>,
}

impl BulkUpdate {
    /// Assign `code` to `column` on every row of `table`
    pub fn assign(table: impl Into<String>, column: impl Into<String>, code: i64) -> Self {
        Self {
            table: table.into(),
            assignments: vec![(column.into(), FilterValue::Integer(code))],
            filter: None,
        }
    }

    /// Also stamp `updated_at` with `now`
    pub fn touch(mut self, now: DateTime<Utc>) -> Self {
        self.assignments.push((UPDATED_AT.to_string(), FilterValue::Timestamp(now)));
        self
    }

    /// Restrict to rows matching `filter`, AND-ed with any existing filter
    pub fn scoped(mut self, filter: Filter) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Filter::and(vec![existing, filter]),
            None => filter,
        });
        self
    }

    /// Restrict only when a filter applies
    pub fn scoped_opt(self, filter: Option<Filter>) -> Self {
        match filter {
            Some(filter) => self.scoped(filter),
            None => self,
        }
    }

    /// Render as a SQL statement
    pub fn to_sql(&self) -> String {
        let sets: Vec<String> = self
            .assignments
            .iter()
            .map(|(column, value)| format!("{} = {}", column, value.to_sql()))
            .collect();

        let mut sql = format!("UPDATE {} SET {}", self.table, sets.join(", "));
        if let Some(filter) = &self.filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter.to_sql());
        }
        sql
    }
}
