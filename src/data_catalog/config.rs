//! Data-model configuration management.
//!
//! This module handles loading data-model definitions from YAML or JSON
//! configuration files. It supports:
//!
//! - Loading from YAML/JSON files or strings
//! - Conversion into a runtime [`DataModel`]
//! - Structural validation of the loaded model
//!
//! Data models are defined with the following structure:
//!
//! ```yaml
//! name: fraud_models          # Optional configuration name
//! data_model:
//!   tables:
//!     - id: transactions      # Unique table id
//!       name: Transactions    # Display name
//!       fields:
//!         - id: sender_id
//!           name: sender_id
//!           data_type: String
//!           nullable: true
//!       links_to_single:
//!         - id: account              # Unique link id
//!           name: account            # Used in dotted pivot paths
//!           parent_table_id: accounts
//!           parent_field_id: object_id
//!           child_table_id: transactions
//!           child_field_id: account_id
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::data_model::{DataModel, TableModel};
use super::errors::DataCatalogError;
use super::model_validator::validate_data_model;

/// Configuration for data models loaded from YAML/JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataModelConfig {
    /// Optional configuration name (used for multi-model registration)
    #[serde(default)]
    pub name: Option<String>,
    /// Data-model definition
    pub data_model: DataModelDefinition,
}

/// Data-model definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataModelDefinition {
    /// Table definitions, in display order
    pub tables: Vec<TableModel>,
}

impl DataModelConfig {
    /// Load a configuration from a file, dispatching on its extension
    /// (`.yaml`/`.yml` vs `.json`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DataCatalogError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path),
            _ => Self::from_yaml_file(path),
        }
    }

    /// Load a configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, DataCatalogError> {
        let raw = fs::read_to_string(path).map_err(|e| DataCatalogError::ConfigReadError {
            error: e.to_string(),
        })?;
        Self::from_yaml_str(&raw)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DataCatalogError> {
        let raw = fs::read_to_string(path).map_err(|e| DataCatalogError::ConfigReadError {
            error: e.to_string(),
        })?;
        Self::from_json_str(&raw)
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml_str(raw: &str) -> Result<Self, DataCatalogError> {
        serde_yaml::from_str(raw).map_err(|e| DataCatalogError::ConfigParseError {
            error: e.to_string(),
        })
    }

    /// Parse a configuration from a JSON string
    pub fn from_json_str(raw: &str) -> Result<Self, DataCatalogError> {
        serde_json::from_str(raw).map_err(|e| DataCatalogError::ConfigParseError {
            error: e.to_string(),
        })
    }

    /// Build the runtime [`DataModel`] and run structural validation over it.
    ///
    /// Broken files fail here, up front; the pivot resolver itself never
    /// validates and degrades gracefully instead.
    pub fn into_data_model(self) -> Result<DataModel, DataCatalogError> {
        let model = DataModel::build(self.data_model.tables);
        validate_data_model(&model)?;

        log::debug!(
            "Loaded data model{} with {} tables",
            self.name
                .as_deref()
                .map(|name| format!(" `{}`", name))
                .unwrap_or_default(),
            model.table_count()
        );

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_catalog::field_types::{FieldType, UnicityConstraint};
    use std::io::Write;

    const YAML_MODEL: &str = r#"
name: fraud_models
data_model:
  tables:
    - id: transactions
      name: Transactions
      fields:
        - id: sender_id
          name: sender_id
          data_type: String
          nullable: true
        - id: amount
          name: amount
          data_type: Float
        - id: account_id
          name: account_id
          data_type: String
      links_to_single:
        - id: account
          name: account
          parent_table_id: accounts
          parent_field_id: object_id
          child_table_id: transactions
          child_field_id: account_id
    - id: accounts
      name: Accounts
      fields:
        - id: object_id
          name: object_id
          data_type: String
          unicity: active_unique_constraint
        - id: account_id
          name: account_id
          data_type: String
"#;

    #[test]
    fn test_yaml_model_loads_and_validates() {
        let config = DataModelConfig::from_yaml_str(YAML_MODEL).unwrap();
        assert_eq!(config.name.as_deref(), Some("fraud_models"));

        let model = config.into_data_model().unwrap();
        assert_eq!(model.table_count(), 2);

        let transactions = model.get_table("transactions").unwrap();
        assert_eq!(transactions.links_to_single.len(), 1);

        let sender = transactions.field_by_id("sender_id").unwrap();
        assert_eq!(sender.data_type, FieldType::String);
        assert!(sender.nullable);

        // Omitted flags take their defaults
        let amount = transactions.field_by_id("amount").unwrap();
        assert!(!amount.nullable);
        assert!(!amount.is_enum);
        assert_eq!(amount.unicity, UnicityConstraint::NoUnicityConstraint);

        let accounts = model.get_table("accounts").unwrap();
        assert_eq!(
            accounts.field_by_id("object_id").unwrap().unicity,
            UnicityConstraint::ActiveUniqueConstraint
        );
    }

    #[test]
    fn test_json_model_loads() {
        let raw = r#"{
            "data_model": {
                "tables": [
                    {
                        "id": "events",
                        "name": "Events",
                        "fields": [
                            {"id": "kind", "name": "kind", "data_type": "String", "is_enum": true}
                        ]
                    }
                ]
            }
        }"#;

        let model = DataModelConfig::from_json_str(raw)
            .unwrap()
            .into_data_model()
            .unwrap();

        let events = model.get_table("events").unwrap();
        assert!(events.field_by_id("kind").unwrap().is_enum);
        assert!(events.links_to_single.is_empty());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = DataModelConfig::from_yaml_str("data_model: [not, a, mapping]").unwrap_err();
        assert!(matches!(err, DataCatalogError::ConfigParseError { .. }));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = DataModelConfig::from_yaml_file("/nonexistent/model.yaml").unwrap_err();
        assert!(matches!(err, DataCatalogError::ConfigReadError { .. }));
    }

    #[test]
    fn test_from_file_dispatches_on_extension() {
        let mut yaml_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        yaml_file.write_all(YAML_MODEL.as_bytes()).unwrap();
        let config = DataModelConfig::from_file(yaml_file.path()).unwrap();
        assert_eq!(config.data_model.tables.len(), 2);

        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json_file
            .write_all(br#"{"data_model": {"tables": []}}"#)
            .unwrap();
        let config = DataModelConfig::from_file(json_file.path()).unwrap();
        assert!(config.data_model.tables.is_empty());
    }

    #[test]
    fn test_invalid_model_is_rejected_on_conversion() {
        let raw = r#"
data_model:
  tables:
    - id: transactions
      name: Transactions
      fields:
        - id: amount
          name: amount
          data_type: Float
    - id: transactions
      name: Transactions again
      fields: []
"#;
        let err = DataModelConfig::from_yaml_str(raw)
            .unwrap()
            .into_data_model()
            .unwrap_err();

        assert_eq!(
            err,
            DataCatalogError::DuplicateTable {
                table_id: "transactions".to_string()
            }
        );
    }
}
