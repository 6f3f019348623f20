use crate::local_storage::schema::{ColumnSpec, text};

/// Provides constants and utilities for working with
/// the "MultiEntityUser" database table, one row per distributor a
/// user can act for.
pub struct MultiEntityUserTable;

impl MultiEntityUserTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "MultiEntityUser";

    /// The column name for the user identifier.
    pub const COLUMN_USER_ID: &'static str = "UserId";

    /// The column name for the distributor identifier.
    pub const COLUMN_DISTRIBUTOR_ID: &'static str = "DistributorId";

    /// The column name for the division identifier.
    pub const COLUMN_DIVISION_ID: &'static str = "DivisionId";

    /// The column name for the distributor display name.
    pub const COLUMN_DISTRIBUTOR: &'static str = "Distributor";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("UserId"),
        text("DistributorId"),
        text("DivisionId"),
        text("Distributor"),
    ];

    /// SQL statement for creating the MultiEntityUser table.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} TEXT NOT NULL,
                {} TEXT,
                {} TEXT,
                {} TEXT
            )",
            Self::TABLE_NAME,
            Self::COLUMN_USER_ID,
            Self::COLUMN_DISTRIBUTOR_ID,
            Self::COLUMN_DIVISION_ID,
            Self::COLUMN_DISTRIBUTOR
        )
    }
}
