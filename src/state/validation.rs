use thiserror::Error;

use crate::state::control::{Column, Row};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructuralError {
    #[error("no visible columns: columns must contain at least one visible column")]
    NoVisibleColumns,

    #[error(
        "row cell/column count mismatch at row {row}: {visible_cells} visible cells, \
         expected {visible_columns} (one per visible column)"
    )]
    CellCountMismatch {
        row: usize,
        visible_cells: usize,
        visible_columns: usize,
    },

    #[error("divider thickness negative: {0} (must be greater than or equal to 0)")]
    NegativeDividerThickness(f64),

    #[error(
        "sort index out of range: {index} (must be >= 0 and < {visible_columns} visible columns)"
    )]
    SortIndexOutOfRange { index: i64, visible_columns: usize },

    #[error("column label not visible at column {column}")]
    HiddenColumnLabel { column: usize },

    #[error("row without visible cells at row {row}: rows must contain at least one visible cell")]
    NoVisibleCells { row: usize },
}

impl StructuralError {
    /// Index of the offending row, for row-level failures.
    pub fn row_index(&self) -> Option<usize> {
        match self {
            Self::CellCountMismatch { row, .. } | Self::NoVisibleCells { row } => Some(*row),
            _ => None,
        }
    }
}

/// Table-level shape check run before every render commit.
///
/// Row indices in errors refer to positions in `rows`, hidden rows included.
pub fn validate(
    columns: &[Column],
    rows: &[Row],
    sort_column_index: Option<i64>,
    divider_thickness: Option<f64>,
) -> Result<(), StructuralError> {
    let visible_columns = columns.iter().filter(|column| column.visible).count();
    if visible_columns == 0 {
        return Err(StructuralError::NoVisibleColumns);
    }

    for (row, entry) in rows.iter().enumerate().filter(|(_, row)| row.visible) {
        let visible_cells = entry.visible_cell_count();
        if visible_cells != visible_columns {
            return Err(StructuralError::CellCountMismatch {
                row,
                visible_cells,
                visible_columns,
            });
        }
    }

    if let Some(thickness) = divider_thickness {
        // NaN fails as well.
        if !(thickness >= 0.0) {
            return Err(StructuralError::NegativeDividerThickness(thickness));
        }
    }

    if let Some(index) = sort_column_index {
        let in_range = usize::try_from(index).is_ok_and(|index| index < visible_columns);
        if !in_range {
            return Err(StructuralError::SortIndexOutOfRange {
                index,
                visible_columns,
            });
        }
    }

    Ok(())
}

pub fn validate_column(index: usize, column: &Column) -> Result<(), StructuralError> {
    if column.label.visible {
        Ok(())
    } else {
        Err(StructuralError::HiddenColumnLabel { column: index })
    }
}

pub fn validate_row(index: usize, row: &Row) -> Result<(), StructuralError> {
    if row.cells.iter().any(|cell| cell.visible) {
        Ok(())
    } else {
        Err(StructuralError::NoVisibleCells { row: index })
    }
}
