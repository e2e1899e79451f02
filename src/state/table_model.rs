use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::state::control::{default_true, null_as_empty, ClipBehavior, Column, Content, Row};
use crate::state::sort_event::{self, DecodeError, SortRequest};
use crate::state::validation::{self, StructuralError};

pub const DEFAULT_LM_RATIO: f64 = 1.2;
pub const DEFAULT_SM_RATIO: f64 = 0.67;
pub const DEFAULT_FIXED_TOP_ROWS: u32 = 1;
pub const DEFAULT_SORT_ARROW_ICON: &str = "arrow_upward";
pub const DEFAULT_SORT_ARROW_ANIMATION_MS: u64 = 150;

/// Columns, rows and sort state of a data table with sticky header and columns.
///
/// The host mutates the public fields between render passes and calls
/// [`TableModel::validate`] before committing a render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableModel {
    pub columns: Vec<Column>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rows: Vec<Row>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_column_index: Option<i64>,
    #[serde(default)]
    pub sort_ascending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divider_thickness: Option<f64>,

    /// Placeholder shown when there are no data rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_margin: Option<f64>,
    #[serde(default = "default_lm_ratio")]
    pub lm_ratio: f64,
    #[serde(default = "default_sm_ratio")]
    pub sm_ratio: f64,
    /// Includes the checkbox column, if present.
    #[serde(default)]
    pub fixed_left_columns: u32,
    /// Includes the heading row.
    #[serde(default = "default_fixed_top_rows")]
    pub fixed_top_rows: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_columns_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_corner_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(default)]
    pub show_checkbox_column: bool,
    #[serde(default = "default_true")]
    pub show_heading_checkbox: bool,
    #[serde(default = "default_sort_arrow_icon")]
    pub sort_arrow_icon: String,
    #[serde(default = "default_sort_arrow_animation_ms")]
    pub sort_arrow_animation_duration_ms: u64,
    #[serde(default)]
    pub show_bottom_border: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_horizontal_scroll_bar_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vertical_scroll_bar_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkbox_horizontal_margin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_row_color: Option<Value>,
    /// Unlike min/max heights, a single height applies to every data row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_row_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_row_color: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_row_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_row_decoration: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_margin: Option<f64>,
    #[serde(default)]
    pub clip_behavior: ClipBehavior,
}

#[derive(Error, Debug)]
pub enum SortEventError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("column {0} is not sortable")]
    NotSortable(i64),
    #[error(transparent)]
    Structural(#[from] StructuralError),
}

impl TableModel {
    pub fn new(columns: Vec<Column>, rows: Option<Vec<Row>>) -> Self {
        Self {
            columns,
            rows: rows.unwrap_or_default(),
            sort_column_index: None,
            sort_ascending: false,
            divider_thickness: None,
            empty: None,
            bottom_margin: None,
            lm_ratio: DEFAULT_LM_RATIO,
            sm_ratio: DEFAULT_SM_RATIO,
            fixed_left_columns: 0,
            fixed_top_rows: DEFAULT_FIXED_TOP_ROWS,
            fixed_columns_color: None,
            fixed_corner_color: None,
            min_width: None,
            show_checkbox_column: false,
            show_heading_checkbox: true,
            sort_arrow_icon: DEFAULT_SORT_ARROW_ICON.to_string(),
            sort_arrow_animation_duration_ms: DEFAULT_SORT_ARROW_ANIMATION_MS,
            show_bottom_border: false,
            is_horizontal_scroll_bar_visible: None,
            is_vertical_scroll_bar_visible: None,
            checkbox_horizontal_margin: None,
            column_spacing: None,
            data_row_color: None,
            data_row_height: None,
            bgcolor: None,
            heading_row_color: None,
            heading_row_height: None,
            heading_row_decoration: None,
            horizontal_margin: None,
            clip_behavior: ClipBehavior::default(),
        }
    }

    pub fn visible_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| column.visible)
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.visible)
    }

    pub fn visible_column(&self, index: i64) -> Option<&Column> {
        let index = usize::try_from(index).ok()?;
        self.visible_columns().nth(index)
    }

    pub fn contains_column(&self, column: &Column) -> bool {
        self.columns.contains(column)
    }

    pub fn contains_row(&self, row: &Row) -> bool {
        self.rows.contains(row)
    }

    pub fn selected_row_indices(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| (row.visible && row.is_selected()).then_some(idx))
            .collect()
    }

    /// Relative widths of the visible columns, in visible order. Columns with a
    /// fixed width report `None`.
    pub fn relative_weights(&self) -> Vec<Option<f64>> {
        self.visible_columns()
            .map(|column| match column.width_override() {
                Some(_) => None,
                None => Some(column.relative_weight(self.sm_ratio, self.lm_ratio)),
            })
            .collect()
    }

    /// Runs the per-column and per-row checks for visible elements, then the
    /// table-level checks.
    pub fn validate(&self) -> Result<(), StructuralError> {
        let result = self.validate_inner();
        if let Err(err) = &result {
            log::warn!("table rejected before render: {err}");
        }
        result
    }

    fn validate_inner(&self) -> Result<(), StructuralError> {
        for (index, column) in self.columns.iter().enumerate() {
            if column.visible {
                validation::validate_column(index, column)?;
            }
        }
        for (index, row) in self.rows.iter().enumerate() {
            if row.visible {
                validation::validate_row(index, row)?;
            }
        }
        validation::validate(
            &self.columns,
            &self.rows,
            self.sort_column_index,
            self.divider_thickness,
        )
    }

    /// Records the requested sort state. Row order is left to the host.
    pub fn apply_sort_request(&mut self, request: SortRequest) {
        self.sort_column_index = Some(request.column_index);
        self.sort_ascending = request.ascending;
    }

    /// Decodes a raw sort event and applies it when it targets a sortable visible
    /// column and the resulting state validates. On error the model is unchanged.
    pub fn handle_sort_event(&mut self, raw_payload: &str) -> Result<SortRequest, SortEventError> {
        let request = sort_event::decode_sort_event(raw_payload)?;

        match self.visible_column(request.column_index) {
            Some(column) if column.sortable => {}
            Some(_) => return Err(SortEventError::NotSortable(request.column_index)),
            None => {
                let visible_columns = self.visible_columns().count();
                return Err(StructuralError::SortIndexOutOfRange {
                    index: request.column_index,
                    visible_columns,
                }
                .into());
            }
        }

        let previous = (self.sort_column_index, self.sort_ascending);
        self.apply_sort_request(request);
        if let Err(err) = self.validate() {
            (self.sort_column_index, self.sort_ascending) = previous;
            return Err(err.into());
        }
        Ok(request)
    }
}

fn default_lm_ratio() -> f64 {
    DEFAULT_LM_RATIO
}

fn default_sm_ratio() -> f64 {
    DEFAULT_SM_RATIO
}

fn default_fixed_top_rows() -> u32 {
    DEFAULT_FIXED_TOP_ROWS
}

fn default_sort_arrow_icon() -> String {
    DEFAULT_SORT_ARROW_ICON.to_string()
}

fn default_sort_arrow_animation_ms() -> u64 {
    DEFAULT_SORT_ARROW_ANIMATION_MS
}
