use crate::local_storage::schema::{ColumnSpec, text, text_from};

/// Provides constants and utilities for working with
/// the "Settings" database table, the multi-row key/value set
/// delivered by every sync.
pub struct SettingsTable;

impl SettingsTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "Settings";

    /// The column name for the setting key.
    pub const COLUMN_KEY: &'static str = "Key";

    /// The column name for the setting value.
    pub const COLUMN_VALUE: &'static str = "Value";

    pub const COLUMNS: &'static [ColumnSpec] = &[text("Key"), text("Value")];

    /// SQL statement for creating the Settings table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} TEXT NOT NULL,
                {} TEXT
            )",
            Self::TABLE_NAME,
            Self::COLUMN_KEY,
            Self::COLUMN_VALUE
        )
    }
}

/// The legacy single key/value table. Reads go through this one; the
/// loader mirrors every Settings row into it by name.
pub struct SettingTable;

impl SettingTable {
    pub const TABLE_NAME: &'static str = "Setting";

    pub const COLUMN_NAME: &'static str = "Name";

    pub const COLUMN_VALUE: &'static str = "Value";

    /// Loader columns: the snapshot's `Key` field lands in `Name`.
    pub const COLUMNS: &'static [ColumnSpec] = &[text_from("Name", "Key"), text("Value")];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} TEXT PRIMARY KEY NOT NULL,
                {} TEXT
            )",
            Self::TABLE_NAME,
            Self::COLUMN_NAME,
            Self::COLUMN_VALUE
        )
    }
}
