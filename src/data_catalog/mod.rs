pub mod config;
pub mod data_model;
pub mod errors;
pub mod field_types;
pub mod model_validator;
pub mod pivot;

// Re-export commonly used types
pub use config::{DataModelConfig, DataModelDefinition};
pub use data_model::{DataModel, DataModelField, LinkToSingle, TableModel};
pub use errors::DataCatalogError;
pub use field_types::{FieldType, UnicityConstraint};
pub use model_validator::validate_data_model;
pub use pivot::{pivot_options, FieldPivot, LinkPivot, Pivot, MAX_PIVOT_DEPTH};
