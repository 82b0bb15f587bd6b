//! # Data Catalog Error Types
//!
//! Error handling for data-model lookups, structural validation, and
//! configuration loading.
//!
//! ## Error Categories
//!
//! - **Lookup Errors**: Missing table or field ids
//! - **Validation Errors**: Duplicate ids and broken link references
//! - **Configuration Errors**: File I/O and parsing issues during model loading
//!
//! The pivot resolver never returns these: it degrades to "no further pivots
//! down this path" on inconsistent models. Errors surface from the explicit
//! lookup accessors, the validator, and the config loader.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DataCatalogError {
    #[error("No table found for `{table_id}`")]
    Table { table_id: String },
    #[error("No field `{field_id}` found on table `{table_id}`")]
    Field { field_id: String, table_id: String },
    #[error("Duplicate table id `{table_id}` in data model")]
    DuplicateTable { table_id: String },
    #[error("Duplicate field id `{field_id}` on table `{table_id}`")]
    DuplicateField { field_id: String, table_id: String },
    #[error("Duplicate link id `{link_id}` on table `{table_id}`")]
    DuplicateLink { link_id: String, table_id: String },
    #[error("Link `{link_id}` on table `{table_id}` references missing {side} `{reference}`")]
    DanglingLink {
        link_id: String,
        table_id: String,
        side: String,
        reference: String,
    },
    #[error("Link `{link_id}` declares child table `{child_table_id}` but belongs to table `{table_id}`")]
    ForeignLink {
        link_id: String,
        table_id: String,
        child_table_id: String,
    },
    #[error("Failed to read data model file: {error}")]
    ConfigReadError { error: String },
    #[error("Failed to parse data model: {error}")]
    ConfigParseError { error: String },
}
