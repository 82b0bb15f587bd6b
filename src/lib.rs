//! PivotGraph - Data-model catalog for a fraud-rules engine
//!
//! This crate provides the schema side of a risk-rules engine through:
//! - Data-model definitions (tables, typed fields, many-to-one links)
//! - Pivot discovery over the table-link graph
//! - YAML/JSON configuration loading
//! - Structural model validation

pub mod data_catalog;

pub use data_catalog::{
    pivot_options, DataCatalogError, DataModel, DataModelConfig, DataModelField, FieldPivot,
    FieldType, LinkPivot, LinkToSingle, Pivot, TableModel,
};
