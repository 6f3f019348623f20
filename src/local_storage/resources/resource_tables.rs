use crate::local_storage::schema::{ColumnSpec, text};

/// Surveys published to the user, with completion state.
pub struct SurveyMasterTable;

impl SurveyMasterTable {
    pub const TABLE_NAME: &'static str = "SurveyMaster";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("ID"),
        text("SurveyName"),
        text("CompanyName"),
        text("CustomerID"),
        text("PublishedDate"),
        text("TimeRequired"),
        text("SurveyURL"),
        text("SurveyDoneDate"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ID TEXT PRIMARY KEY NOT NULL,
                SurveyName TEXT,
                CompanyName TEXT,
                CustomerID TEXT,
                PublishedDate TEXT,
                TimeRequired TEXT,
                SurveyURL TEXT,
                SurveyDoneDate TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Downloadable training and marketing material.
pub struct ResourcesTable;

impl ResourcesTable {
    pub const TABLE_NAME: &'static str = "Resources";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("ID"),
        text("ResourceName"),
        text("ParentResourceID"),
        text("URL"),
        text("Descreption"),
        text("FileName"),
        text("SequenceNo"),
        text("IsDownloadable"),
        text("ResourceType"),
        text("CreatedDate"),
        text("LastUpdatedDate"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ID TEXT PRIMARY KEY NOT NULL,
                ResourceName TEXT,
                ParentResourceID TEXT,
                URL TEXT,
                Descreption TEXT,
                FileName TEXT,
                SequenceNo TEXT,
                IsDownloadable TEXT,
                ResourceType TEXT,
                CreatedDate TEXT,
                LastUpdatedDate TEXT
            )",
            Self::TABLE_NAME
        )
    }
}
