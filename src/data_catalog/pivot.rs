//! Pivot discovery over the table-link graph
//!
//! A pivot is a string-valued attribute a scenario can group rows by: either
//! a direct `String` field of the base table, or a `String` field on an
//! ancestor table reached by following a chain of `links_to_single`. This
//! module enumerates every valid pivot for a base table.
//!
//! Resolution is a pure read over the current [`DataModel`] snapshot and is
//! recomputed on every call; pivots are never stored. Dangling table or field
//! references end the affected branch instead of raising, so the resolver is
//! total even on inconsistent models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::data_model::{DataModel, LinkToSingle, TableModel};

/// Maximum number of link hops a pivot path may contain.
///
/// Guarantees termination on cyclic link graphs; longer paths are silently
/// truncated, never an error.
pub const MAX_PIVOT_DEPTH: usize = 10;

/// A pivot on a direct `String` field of the base table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldPivot {
    pub base_table_id: String,
    pub field_id: String,
    /// Equals `field_id`
    pub id: String,
    /// The field's display name
    pub display_value: String,
}

/// A pivot reached through one or more links to an ancestor table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkPivot {
    pub base_table_id: String,
    /// Link ids from the base table to the ancestor, in traversal order.
    /// Never contains the same link id twice.
    pub path_link_ids: Vec<String>,
    /// The link ids joined by `.`
    pub id: String,
    /// The link names joined by `.` (e.g. `account.company`)
    pub display_value: String,
}

/// A user-selectable pivot: one of the two shapes above
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Pivot {
    Field(FieldPivot),
    Link(LinkPivot),
}

impl Pivot {
    pub fn id(&self) -> &str {
        match self {
            Pivot::Field(pivot) => &pivot.id,
            Pivot::Link(pivot) => &pivot.id,
        }
    }

    pub fn display_value(&self) -> &str {
        match self {
            Pivot::Field(pivot) => &pivot.display_value,
            Pivot::Link(pivot) => &pivot.display_value,
        }
    }

    pub fn base_table_id(&self) -> &str {
        match self {
            Pivot::Field(pivot) => &pivot.base_table_id,
            Pivot::Link(pivot) => &pivot.base_table_id,
        }
    }
}

/// Enumerate every valid pivot for `table`, resolving links against `model`.
///
/// Output order: the base table's own `String` fields first, in field order,
/// then link pivots in depth-first pre-order following each table's
/// `links_to_single` order. Deterministic for a given model.
pub fn pivot_options(table: &TableModel, model: &DataModel) -> Vec<Pivot> {
    let mut pivots: Vec<Pivot> = table
        .fields
        .iter()
        .filter(|field| field.data_type.is_pivot_eligible())
        .map(|field| {
            Pivot::Field(FieldPivot {
                base_table_id: table.id.clone(),
                field_id: field.id.clone(),
                id: field.id.clone(),
                display_value: field.name.clone(),
            })
        })
        .collect();

    let tables_by_id = model.tables_by_id();
    collect_link_pivots(
        &table.links_to_single,
        &tables_by_id,
        &table.id,
        None,
        1,
        &mut pivots,
    );

    pivots
}

/// Walk one level of `links`, emitting a pivot per link whose parent field is
/// a scalar `String` and recursing into each parent table.
///
/// `depth` is the number of links on the paths formed at this level; the
/// first level is 1.
fn collect_link_pivots(
    links: &[LinkToSingle],
    tables_by_id: &HashMap<&str, &TableModel>,
    base_table_id: &str,
    previous: Option<&LinkPivot>,
    depth: usize,
    pivots: &mut Vec<Pivot>,
) {
    if depth > MAX_PIVOT_DEPTH {
        log::debug!(
            "Pivot traversal for table {} truncated at {} hops",
            base_table_id,
            MAX_PIVOT_DEPTH
        );
        return;
    }

    for link in links {
        // A link id already on the path ends this whole level, not just the
        // repeated link. Callers rely on this exact pruning; do not soften it
        // to a `continue`.
        if let Some(previous) = previous {
            if previous.path_link_ids.iter().any(|id| id == &link.id) {
                break;
            }
        }

        let parent_table = match tables_by_id.get(link.parent_table_id.as_str()) {
            Some(table) => *table,
            None => break,
        };
        let parent_field = match parent_table.field_by_id(&link.parent_field_id) {
            Some(field) => field,
            None => break,
        };

        let path_link_ids = match previous {
            Some(previous) => {
                let mut path = previous.path_link_ids.clone();
                path.push(link.id.clone());
                path
            }
            None => vec![link.id.clone()],
        };
        let display_value = match previous {
            Some(previous) => format!("{}.{}", previous.display_value, link.name),
            None => link.name.clone(),
        };
        let candidate = LinkPivot {
            base_table_id: base_table_id.to_string(),
            id: path_link_ids.join("."),
            path_link_ids,
            display_value,
        };

        if parent_field.data_type.is_pivot_eligible() {
            pivots.push(Pivot::Link(candidate.clone()));
        }

        // A non-string parent field suppresses emission at this hop only;
        // deeper ancestors are still explored.
        collect_link_pivots(
            &parent_table.links_to_single,
            tables_by_id,
            base_table_id,
            Some(&candidate),
            depth + 1,
            pivots,
        );
    }
}
