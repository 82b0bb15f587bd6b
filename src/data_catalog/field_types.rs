//! Closed type system for data-model fields
//!
//! This module provides the minimal set of column types the rules engine
//! understands. Ingested payloads are already normalized to these types by the
//! ingestion layer, so the catalog never sees database-specific type names.
//!
//! # Supported types
//!
//! - `String` - Text values (the only pivot-eligible type)
//! - `Int` - Whole numbers
//! - `Float` - Decimal numbers
//! - `Bool` - True/False
//! - `Timestamp` - Points in time
//!
//! Each scalar also has an array form (`String[]`, `Int[]`, ...). Array
//! fields can be filtered on but never pivoted on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data type of a single field in a table model
///
/// The serialized names match the ingestion API (`"String"`, `"Int[]"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Text (pivot-eligible)
    String,

    /// Whole numbers
    Int,

    /// Decimal numbers
    Float,

    /// True/False
    Bool,

    /// Points in time
    Timestamp,

    /// Text arrays
    #[serde(rename = "String[]")]
    StringArray,

    /// Whole-number arrays
    #[serde(rename = "Int[]")]
    IntArray,

    /// Decimal arrays
    #[serde(rename = "Float[]")]
    FloatArray,

    /// True/False arrays
    #[serde(rename = "Bool[]")]
    BoolArray,

    /// Timestamp arrays
    #[serde(rename = "Timestamp[]")]
    TimestampArray,
}

impl FieldType {
    /// Whether a field of this type can be used as a pivot target.
    ///
    /// Only scalar `String` qualifies: pivots group rows by a string value,
    /// and array types have no single value to group by.
    pub fn is_pivot_eligible(&self) -> bool {
        matches!(self, FieldType::String)
    }

    /// Get the type name as it appears in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Int => "Int",
            FieldType::Float => "Float",
            FieldType::Bool => "Bool",
            FieldType::Timestamp => "Timestamp",
            FieldType::StringArray => "String[]",
            FieldType::IntArray => "Int[]",
            FieldType::FloatArray => "Float[]",
            FieldType::BoolArray => "Bool[]",
            FieldType::TimestampArray => "Timestamp[]",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unicity constraint status of a field
///
/// Unique constraints are created asynchronously by the backing store, so a
/// field can be in a pending state between the request and the index build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnicityConstraint {
    #[default]
    NoUnicityConstraint,
    PendingUniqueConstraint,
    ActiveUniqueConstraint,
}
