use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::state::table_model::TableModel;

#[derive(Error, Debug)]
pub enum TableIoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("table definition parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("table definition root is not an object")]
    NotAnObject,
}

/// Loads a table definition. Missing attributes take their defaults and a
/// missing or null `rows` becomes an empty list.
pub fn load_table(path: &Path) -> Result<TableModel, TableIoError> {
    let content = fs::read_to_string(path)?;
    parse_table(&content)
}

pub fn parse_table(content: &str) -> Result<TableModel, TableIoError> {
    let value: Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(TableIoError::NotAnObject);
    }
    let model: TableModel = serde_json::from_value(value)?;
    log::debug!(
        "loaded table definition: {} columns, {} rows",
        model.columns.len(),
        model.rows.len()
    );
    Ok(model)
}
