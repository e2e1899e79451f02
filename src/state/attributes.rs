use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::state::control::{Column, Row};
use crate::state::table_model::TableModel;

/// Flat string-keyed attributes of a single control, as consumed by the host renderer.
pub type AttributeMap = BTreeMap<String, Value>;

// Nested controls go to the renderer as children, not attributes.
const COLUMN_CHILDREN: &[&str] = &["label"];
const ROW_CHILDREN: &[&str] = &["cells"];
const TABLE_CHILDREN: &[&str] = &["columns", "rows", "empty"];

#[derive(Error, Debug)]
pub enum AttributeError {
    #[error("failed to serialize control: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("control does not serialize to an object")]
    NotAnObject,
}

pub fn column_attributes(column: &Column) -> Result<AttributeMap, AttributeError> {
    project(column, COLUMN_CHILDREN)
}

pub fn row_attributes(row: &Row) -> Result<AttributeMap, AttributeError> {
    project(row, ROW_CHILDREN)
}

/// Table-level attributes. Columns, rows and the empty placeholder are left out.
pub fn table_attributes(model: &TableModel) -> Result<AttributeMap, AttributeError> {
    project(model, TABLE_CHILDREN)
}

fn project<T: Serialize>(control: &T, children: &[&str]) -> Result<AttributeMap, AttributeError> {
    match serde_json::to_value(control)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .filter(|(key, value)| !value.is_null() && !children.contains(&key.as_str()))
            .collect()),
        _ => Err(AttributeError::NotAnObject),
    }
}
