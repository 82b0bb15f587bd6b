//! Structural validation for loaded data models.
//!
//! This module checks a [`DataModel`] for the defects a hand-edited
//! configuration file can introduce:
//!
//! - Duplicate table ids across the model
//! - Duplicate field or link ids within a table
//! - Links whose parent table or parent field does not exist
//! - Links whose child field does not exist on the declaring table
//! - Links declared under a table other than their `child_table_id`
//!
//! Validation is opt-in: the pivot resolver stays total on unvalidated
//! models and simply stops exploring broken branches. The config loader runs
//! this before handing a model out, so broken files fail fast.

use std::collections::HashSet;

use super::data_model::{DataModel, LinkToSingle, TableModel};
use super::errors::DataCatalogError;

/// Validate the structure of a data model, first failure wins.
pub fn validate_data_model(model: &DataModel) -> Result<(), DataCatalogError> {
    let mut table_ids = HashSet::new();
    for table in model.tables() {
        if !table_ids.insert(table.id.as_str()) {
            return Err(DataCatalogError::DuplicateTable {
                table_id: table.id.clone(),
            });
        }
        validate_table(table)?;
    }

    for table in model.tables() {
        for link in &table.links_to_single {
            validate_link(model, table, link)?;
        }
    }

    Ok(())
}

/// Check id uniqueness of a table's own fields and links
fn validate_table(table: &TableModel) -> Result<(), DataCatalogError> {
    let mut field_ids = HashSet::new();
    for field in &table.fields {
        if !field_ids.insert(field.id.as_str()) {
            return Err(DataCatalogError::DuplicateField {
                field_id: field.id.clone(),
                table_id: table.id.clone(),
            });
        }
    }

    let mut link_ids = HashSet::new();
    for link in &table.links_to_single {
        if !link_ids.insert(link.id.as_str()) {
            return Err(DataCatalogError::DuplicateLink {
                link_id: link.id.clone(),
                table_id: table.id.clone(),
            });
        }
    }

    Ok(())
}

/// Check that both ends of a link resolve against the model
fn validate_link(
    model: &DataModel,
    table: &TableModel,
    link: &LinkToSingle,
) -> Result<(), DataCatalogError> {
    if link.child_table_id != table.id {
        return Err(DataCatalogError::ForeignLink {
            link_id: link.id.clone(),
            table_id: table.id.clone(),
            child_table_id: link.child_table_id.clone(),
        });
    }

    if table.field_by_id(&link.child_field_id).is_none() {
        return Err(dangling(link, table, "child field", &link.child_field_id));
    }

    let parent_table = match model.get_table_opt(&link.parent_table_id) {
        Some(parent_table) => parent_table,
        None => return Err(dangling(link, table, "parent table", &link.parent_table_id)),
    };
    if parent_table.field_by_id(&link.parent_field_id).is_none() {
        return Err(dangling(link, table, "parent field", &link.parent_field_id));
    }

    Ok(())
}

fn dangling(
    link: &LinkToSingle,
    table: &TableModel,
    side: &str,
    reference: &str,
) -> DataCatalogError {
    DataCatalogError::DanglingLink {
        link_id: link.id.clone(),
        table_id: table.id.clone(),
        side: side.to_string(),
        reference: reference.to_string(),
    }
}
