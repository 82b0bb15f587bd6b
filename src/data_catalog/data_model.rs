use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::errors::DataCatalogError;
use super::field_types::{FieldType, UnicityConstraint};

/// One column of a table model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataModelField {
    pub id: String,
    pub name: String,
    pub data_type: FieldType,
    /// Whether ingested rows may omit this field
    #[serde(default)]
    pub nullable: bool,
    /// Whether the field carries a closed set of values curated by the user
    #[serde(default)]
    pub is_enum: bool,
    /// Unique-constraint status, maintained by the backing store
    #[serde(default)]
    pub unicity: UnicityConstraint,
    #[serde(default)]
    pub description: String,
}

/// Many-to-one link from the declaring (child) table to a parent table
///
/// The link name is what users see; dotted pivot paths are built from it
/// (e.g. `account.company`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkToSingle {
    pub id: String,
    pub name: String,
    pub parent_table_id: String,
    pub parent_field_id: String,
    pub child_table_id: String,
    pub child_field_id: String,
}

/// One logical table of the scenario data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableModel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<DataModelField>,
    #[serde(default)]
    pub links_to_single: Vec<LinkToSingle>,
}

impl TableModel {
    /// Find a field by its id
    pub fn field_by_id(&self, field_id: &str) -> Option<&DataModelField> {
        self.fields.iter().find(|field| field.id == field_id)
    }

    pub fn get_field(&self, field_id: &str) -> Result<&DataModelField, DataCatalogError> {
        self.field_by_id(field_id).ok_or(DataCatalogError::Field {
            field_id: field_id.to_string(),
            table_id: self.id.clone(),
        })
    }

    /// Find a field by its display name
    pub fn field_by_name(&self, field_name: &str) -> Option<&DataModelField> {
        self.fields.iter().find(|field| field.name == field_name)
    }

    /// Find an outgoing link by its id
    pub fn link_by_id(&self, link_id: &str) -> Option<&LinkToSingle> {
        self.links_to_single.iter().find(|link| link.id == link_id)
    }
}

/// The full data model of one organization: every table a scenario can read
///
/// Table declaration order is preserved from the configuration; it has no
/// semantic meaning but keeps listings stable for users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataModel {
    tables: Vec<TableModel>,
}

impl DataModel {
    pub fn build(tables: Vec<TableModel>) -> DataModel {
        DataModel { tables }
    }

    pub fn tables(&self) -> &[TableModel] {
        &self.tables
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn get_table(&self, table_id: &str) -> Result<&TableModel, DataCatalogError> {
        self.get_table_opt(table_id)
            .ok_or(DataCatalogError::Table {
                table_id: table_id.to_string(),
            })
    }

    pub fn get_table_opt(&self, table_id: &str) -> Option<&TableModel> {
        self.tables.iter().find(|table| table.id == table_id)
    }

    /// Build an id-keyed lookup over the tables.
    ///
    /// Built once per traversal by callers that walk the link graph.
    pub fn tables_by_id(&self) -> HashMap<&str, &TableModel> {
        self.tables
            .iter()
            .map(|table| (table.id.as_str(), table))
            .collect()
    }
}
