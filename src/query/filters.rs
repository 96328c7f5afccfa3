//! SQL filter building
//!
//! Provides type-safe WHERE clause construction for enum columns

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Filter {
    Eq(String, FilterValue),

    // Membership
    In(String, Vec<FilterValue>),
    NotIn(String, Vec<FilterValue>),

    And(Vec<Filter>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FilterValue {
    String(String),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Eq(field.into(), value.into())
    }

    pub fn is_in<V: Into<FilterValue>>(field: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self::In(field.into(), values.into_iter().map(Into::into).collect())
    }

    pub fn not_in<V: Into<FilterValue>>(field: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self::NotIn(field.into(), values.into_iter().map(Into::into).collect())
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Self::And(filters)
    }

    /// Convert filter to a SQL WHERE fragment
    pub fn to_sql(&self) -> String {
        match self {
            Filter::Eq(field, value) => format!("{} = {}", field, value.to_sql()),

            // An empty list matches nothing (IN) or everything (NOT IN)
            Filter::In(_, values) if values.is_empty() => "1 = 0".to_string(),
            Filter::NotIn(_, values) if values.is_empty() => "1 = 1".to_string(),
            Filter::In(field, values) => format!("{} IN ({})", field, join_values(values)),
            Filter::NotIn(field, values) => format!("{} NOT IN ({})", field, join_values(values)),

            Filter::And(filters) => {
                let filter_strings: Vec<String> = filters.iter().map(|f| f.to_sql()).collect();
                format!("({})", filter_strings.join(" AND "))
            }
        }
    }
}

fn join_values(values: &[FilterValue]) -> String {
    values.iter().map(FilterValue::to_sql).collect::<Vec<_>>().join(", ")
}

impl FilterValue {
    pub fn to_sql(&self) -> String {
        match self {
            FilterValue::String(s) => format!("'{}'", s.replace('\'', "''")),
            FilterValue::Integer(i) => i.to_string(),
            FilterValue::Timestamp(t) => format!("'{}'", t.format("%Y-%m-%d %H:%M:%S%.6f")),
        }
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Integer(value as i64)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        FilterValue::Timestamp(value)
    }
}
