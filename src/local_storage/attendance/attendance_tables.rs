/// Provides constants and utilities for working with
/// the "Attendance" database table. Local-only until synced.
pub struct AttendanceTable;

impl AttendanceTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "Attendance";

    /// The column name for the user identifier.
    pub const COLUMN_USER_ID: &'static str = "UserId";

    /// The column name for the punch type.
    pub const COLUMN_ATTENDANCE_TYPE: &'static str = "AttendanceType";

    /// The column name for the punch date.
    pub const COLUMN_ATTENDANCE_DATE: &'static str = "AttendanceDate";

    /// The column name for the punch time.
    pub const COLUMN_ATTENDANCE_TIME: &'static str = "AttendanceTime";

    /// The column name for the day-end marker (0 = day start, 1 = day end).
    pub const COLUMN_IS_DAY_END: &'static str = "IsDayEnd";

    /// The column name for the sync marker.
    pub const COLUMN_SYNC_FLAG: &'static str = "SyncFlag";

    /// SQL statement for creating the Attendance table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                {} TEXT NOT NULL,
                {} TEXT,
                {} TEXT,
                {} TEXT,
                Latitude REAL,
                Longitude REAL,
                Remark TEXT,
                {} INTEGER NOT NULL DEFAULT 0,
                {} INTEGER NOT NULL DEFAULT 0
            )",
            Self::TABLE_NAME,
            Self::COLUMN_USER_ID,
            Self::COLUMN_ATTENDANCE_TYPE,
            Self::COLUMN_ATTENDANCE_DATE,
            Self::COLUMN_ATTENDANCE_TIME,
            Self::COLUMN_IS_DAY_END,
            Self::COLUMN_SYNC_FLAG
        )
    }
}

/// App usage log, written locally and drained by the sync.
pub struct UsesLogTable;

impl UsesLogTable {
    pub const TABLE_NAME: &'static str = "UsesLog";

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                UserId TEXT NOT NULL,
                Activity TEXT,
                DateTime TEXT,
                SyncFlag INTEGER NOT NULL DEFAULT 0
            )",
            Self::TABLE_NAME
        )
    }
}
