use datatable2::state::control::{Column, ColumnSize, Content, Row};
use datatable2::state::sort_event::SortRequest;
use datatable2::state::table_model::{SortEventError, TableModel};
use datatable2::state::validation::StructuralError;

fn sample_model() -> TableModel {
    let columns = vec![
        Column::new(Content::new("Name")).with_size(ColumnSize::L).sortable(),
        Column::new(Content::new("Calories")).numeric().sortable(),
        Column::new(Content::new("Fat")).numeric(),
    ];
    let rows = vec![
        Row::new(vec![
            Content::new("Frozen yogurt"),
            Content::new(159),
            Content::new(6.0),
        ]),
        Row::new(vec![
            Content::new("Eclair"),
            Content::new(262),
            Content::new(16.0),
        ]),
    ];
    let mut model = TableModel::new(columns, Some(rows));
    model.sort_column_index = Some(1);
    model.divider_thickness = Some(1.0);
    model
}

#[test]
fn test_new_applies_defaults() {
    let model = TableModel::new(vec![Column::new(Content::new("A"))], None);
    assert!(model.rows.is_empty());
    assert_eq!(model.lm_ratio, 1.2);
    assert_eq!(model.sm_ratio, 0.67);
    assert_eq!(model.fixed_top_rows, 1);
    assert_eq!(model.fixed_left_columns, 0);
    assert!(model.show_heading_checkbox);
    assert!(!model.show_checkbox_column);
    assert!(!model.sort_ascending);
    assert_eq!(model.sort_column_index, None);
    assert_eq!(model.sort_arrow_icon, "arrow_upward");
    assert_eq!(model.sort_arrow_animation_duration_ms, 150);
}

#[test]
fn test_validate_sample_model() {
    assert_eq!(sample_model().validate(), Ok(()));
}

#[test]
fn test_validate_reports_short_row() {
    let mut model = sample_model();
    model.rows[1].cells.pop();
    let err = model.validate().unwrap_err();
    assert_eq!(err.row_index(), Some(1));
}

#[test]
fn test_validate_hidden_label_on_visible_column() {
    let mut model = sample_model();
    model.columns[2].label.visible = false;
    assert_eq!(
        model.validate(),
        Err(StructuralError::HiddenColumnLabel { column: 2 })
    );
}

#[test]
fn test_validate_ignores_hidden_label_on_hidden_column() {
    let mut model = sample_model();
    model.columns[2].label.visible = false;
    model.columns[2].visible = false;
    for row in &mut model.rows {
        row.cells[2].visible = false;
    }
    assert_eq!(model.validate(), Ok(()));
}

#[test]
fn test_validate_row_without_visible_cells() {
    let mut model = sample_model();
    for cell in &mut model.rows[0].cells {
        cell.visible = false;
    }
    assert_eq!(
        model.validate(),
        Err(StructuralError::NoVisibleCells { row: 0 })
    );
}

#[test]
fn test_validate_sort_index_after_hiding_column() {
    let mut model = sample_model();
    model.sort_column_index = Some(2);
    assert_eq!(model.validate(), Ok(()));

    model.columns[0].visible = false;
    for row in &mut model.rows {
        row.cells[0].visible = false;
    }
    assert!(matches!(
        model.validate(),
        Err(StructuralError::SortIndexOutOfRange { index: 2, .. })
    ));
}

#[test]
fn test_apply_sort_request_does_not_reorder_rows() {
    let mut model = sample_model();
    let before = model.rows.clone();
    model.apply_sort_request(SortRequest::new(0, true));
    assert_eq!(model.sort_column_index, Some(0));
    assert!(model.sort_ascending);
    assert_eq!(model.rows, before);
}

#[test]
fn test_handle_sort_event_updates_sort_state() {
    let mut model = sample_model();
    let request = model.handle_sort_event(r#"{"i": 0, "a": true}"#).unwrap();
    assert_eq!(request, SortRequest::new(0, true));
    assert_eq!(model.sort_column_index, Some(0));
    assert!(model.sort_ascending);
}

#[test]
fn test_handle_sort_event_rejects_unsortable_column() {
    let mut model = sample_model();
    let err = model.handle_sort_event(r#"{"i": 2, "a": true}"#).unwrap_err();
    assert!(matches!(err, SortEventError::NotSortable(2)));
    assert_eq!(model.sort_column_index, Some(1));
    assert!(!model.sort_ascending);
}

#[test]
fn test_handle_sort_event_rejects_out_of_range() {
    let mut model = sample_model();
    let err = model.handle_sort_event(r#"{"i": 3}"#).unwrap_err();
    assert!(matches!(
        err,
        SortEventError::Structural(StructuralError::SortIndexOutOfRange {
            index: 3,
            visible_columns: 3
        })
    ));
    assert_eq!(model.sort_column_index, Some(1));
}

#[test]
fn test_handle_sort_event_rejects_bad_payload() {
    let mut model = sample_model();
    let err = model.handle_sort_event(r#"{"a": true}"#).unwrap_err();
    assert!(matches!(err, SortEventError::Decode(_)));
    assert_eq!(model.sort_column_index, Some(1));
}

#[test]
fn test_handle_sort_event_restores_state_when_table_invalid() {
    let mut model = sample_model();
    model.divider_thickness = Some(-1.0);
    let err = model.handle_sort_event(r#"{"i": 0, "a": true}"#).unwrap_err();
    assert!(matches!(
        err,
        SortEventError::Structural(StructuralError::NegativeDividerThickness(_))
    ));
    assert_eq!(model.sort_column_index, Some(1));
    assert!(!model.sort_ascending);
}

#[test]
fn test_visible_column_skips_hidden() {
    let mut model = sample_model();
    model.columns[0].visible = false;
    let column = model.visible_column(0).unwrap();
    assert_eq!(column.label, Content::new("Calories"));
    assert!(model.visible_column(-1).is_none());
    assert!(model.visible_column(2).is_none());
}

#[test]
fn test_relative_weights() {
    let mut model = sample_model();
    model.columns[1].size = Some(ColumnSize::M);
    model.columns[2].fixed_width = Some(80.0);
    assert_eq!(model.relative_weights(), vec![Some(1.2), Some(1.0), None]);

    model.columns[1].size = None;
    assert_eq!(model.relative_weights()[1], Some(0.67));
}

#[test]
fn test_contains() {
    let model = sample_model();
    assert!(model.contains_column(&model.columns[0].clone()));
    assert!(model.contains_row(&model.rows[1].clone()));
    assert!(!model.contains_column(&Column::new(Content::new("Sodium"))));
    assert!(model.rows[0].contains(&Content::new("Frozen yogurt")));
    assert!(!model.rows[0].contains(&Content::new("Eclair")));
}

#[test]
fn test_selected_row_indices() {
    let mut model = sample_model();
    assert!(model.selected_row_indices().is_empty());
    model.rows[1].selected = Some(true);
    model.rows[0].selected = Some(false);
    assert_eq!(model.selected_row_indices(), vec![1]);
}
