use crate::local_storage::schema::{ColumnSpec, text};

/// Report menu configuration: which classifications each report menu key
/// offers.
pub struct ReportTable;

impl ReportTable {
    pub const TABLE_NAME: &'static str = "Report";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("MenuKey"),
        text("Classification"),
        text("ComboClassification"),
        text("LabelName"),
        text("IsActive"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                MenuKey TEXT NOT NULL,
                Classification TEXT,
                ComboClassification TEXT,
                LabelName TEXT,
                IsActive TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Maps report filter controls to the item classification column they
/// select over.
pub struct ReportControlMasterTable;

impl ReportControlMasterTable {
    pub const TABLE_NAME: &'static str = "ReportControlMaster";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("ControlName"),
        text("ControlId"),
        text("ReferenceColumn"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ControlName TEXT,
                ControlId TEXT,
                ReferenceColumn TEXT
            )",
            Self::TABLE_NAME
        )
    }
}
