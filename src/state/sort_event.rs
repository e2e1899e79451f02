use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

/// A request from the host renderer to sort by a visible column. It reports
/// intent only; reordering the row data is up to the host application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortRequest {
    pub column_index: i64,
    pub ascending: bool,
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("sort event payload is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("sort event payload is not an object")]
    NotAnObject,
    #[error("sort event payload is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
}

// Field names are fixed by the host renderer's wire format.
#[derive(Deserialize)]
struct SortEventPayload {
    i: i64,
    #[serde(default)]
    a: Option<bool>,
}

pub fn decode_sort_event(raw_payload: &str) -> Result<SortRequest, DecodeError> {
    let value: Value = serde_json::from_str(raw_payload).map_err(DecodeError::Json)?;
    decode_sort_event_value(value)
}

pub fn decode_sort_event_value(value: Value) -> Result<SortRequest, DecodeError> {
    if !value.is_object() {
        log::debug!("rejecting non-object sort event payload: {value}");
        return Err(DecodeError::NotAnObject);
    }

    let payload: SortEventPayload =
        serde_json::from_value(value).map_err(DecodeError::Malformed)?;
    let request = SortRequest {
        column_index: payload.i,
        ascending: payload.a.unwrap_or(false),
    };
    log::debug!(
        "decoded sort event: column {} ascending={}",
        request.column_index,
        request.ascending
    );
    Ok(request)
}

impl SortRequest {
    pub fn new(column_index: i64, ascending: bool) -> Self {
        Self {
            column_index,
            ascending,
        }
    }

    /// Encodes the request in the `{"i": .., "a": ..}` shape the host renderer emits.
    pub fn to_payload(&self) -> String {
        json!({ "i": self.column_index, "a": self.ascending }).to_string()
    }
}
