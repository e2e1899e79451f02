use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Renderable content owned by the host renderer. Only `visible` is ever inspected here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub value: Value,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl Content {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            visible: true,
        }
    }

    pub fn hidden(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            visible: false,
        }
    }
}

/// Relative size class of a column. Ratios between classes come from the table's
/// `sm_ratio` and `lm_ratio`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnSize {
    #[default]
    #[serde(rename = "s")]
    S,
    #[serde(rename = "m")]
    M,
    #[serde(rename = "l")]
    L,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeadingAlignment {
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClipBehavior {
    #[default]
    None,
    HardEdge,
    AntiAlias,
    AntiAliasWithSaveLayer,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub label: Content,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_row_alignment: Option<HeadingAlignment>,
    #[serde(default)]
    pub numeric: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ColumnSize>,
    /// Set when the host registered a sort handler for this column.
    #[serde(default)]
    pub sortable: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl Column {
    pub fn new(label: Content) -> Self {
        Self {
            label,
            fixed_width: None,
            heading_row_alignment: None,
            numeric: false,
            size: None,
            sortable: false,
            visible: true,
        }
    }

    pub fn with_size(mut self, size: ColumnSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn effective_size(&self) -> ColumnSize {
        self.size.unwrap_or_default()
    }

    /// Share of the available width relative to a Medium column.
    pub fn relative_weight(&self, sm_ratio: f64, lm_ratio: f64) -> f64 {
        match self.effective_size() {
            ColumnSize::S => sm_ratio,
            ColumnSize::M => 1.0,
            ColumnSize::L => lm_ratio,
        }
    }

    pub fn width_override(&self) -> Option<f64> {
        self.fixed_width
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cells: Vec<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_row_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl Row {
    pub fn new(cells: Vec<Content>) -> Self {
        Self {
            cells,
            color: None,
            decoration: None,
            specific_row_height: None,
            selected: None,
            visible: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn contains(&self, cell: &Content) -> bool {
        self.cells.contains(cell)
    }

    pub fn visible_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visible).count()
    }

    pub fn is_selected(&self) -> bool {
        self.selected.unwrap_or(false)
    }
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
