use crate::local_storage::schema::{ColumnSpec, integer, text};

/// Monthly sales lines as delivered by the sync. Refreshed wholesale on
/// every sync; the dashboards aggregate them in SQL on demand.
pub struct SalesTable;

impl SalesTable {
    pub const TABLE_NAME: &'static str = "Sales";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("UserID"),
        text("DistributorID"),
        text("CustomerID"),
        integer("Month"),
        text("ItemID"),
        text("Quantity"),
        text("Value"),
        text("user_id"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                UserID TEXT,
                DistributorID TEXT,
                CustomerID TEXT,
                Month INTEGER,
                ItemID TEXT,
                Quantity TEXT,
                Value TEXT,
                user_id TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Year-to-date sales lines.
pub struct SalesYtdTable;

impl SalesYtdTable {
    pub const TABLE_NAME: &'static str = "SalesYTD";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("UserID"),
        text("DistributorID"),
        text("CustomerID"),
        text("ItemID"),
        text("Quantity"),
        text("Value"),
        text("user_id"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                UserID TEXT,
                DistributorID TEXT,
                CustomerID TEXT,
                ItemID TEXT,
                Quantity TEXT,
                Value TEXT,
                user_id TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Per-classification sales targets.
pub struct TargetTable;

impl TargetTable {
    pub const TABLE_NAME: &'static str = "Target";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("UserID"),
        text("TDate"),
        text("ClassificationID"),
        text("ClassificationName"),
        integer("Target"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                UserID TEXT,
                TDate TEXT,
                ClassificationID TEXT,
                ClassificationName TEXT,
                Target INTEGER
            )",
            Self::TABLE_NAME
        )
    }
}
