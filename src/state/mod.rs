pub mod attributes;
pub mod control;
pub mod sort_event;
pub mod table_model;
pub mod validation;
