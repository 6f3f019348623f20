use crate::local_storage::schema::{ColumnSpec, integer, text};

/// Permanent journey plan routes assigned to the user.
pub struct PjpMasterTable;

impl PjpMasterTable {
    pub const TABLE_NAME: &'static str = "PJPMaster";

    pub const COLUMNS: &'static [ColumnSpec] =
        &[text("RouteID"), text("RouteName"), text("userid")];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                RouteID TEXT NOT NULL,
                RouteName TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Monthly journey plan headers.
pub struct MjpMasterTable;

impl MjpMasterTable {
    pub const TABLE_NAME: &'static str = "MJPMaster";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("ID"),
        text("ExecutiveId"),
        text("MonthYear"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ID TEXT PRIMARY KEY NOT NULL,
                ExecutiveId TEXT,
                MonthYear TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Planned activities inside a monthly journey plan.
pub struct MjpMasterDetailsTable;

impl MjpMasterDetailsTable {
    pub const TABLE_NAME: &'static str = "MJPMasterDetails";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("MJPMasterID"),
        text("PlannedDate"),
        text("EntityType"),
        text("EntityTypeID"),
        text("ActivityTitle"),
        text("IsActivityDone"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                MJPMasterID TEXT NOT NULL,
                PlannedDate TEXT,
                EntityType TEXT,
                EntityTypeID TEXT,
                ActivityTitle TEXT,
                IsActivityDone TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Area picker entries. `AreaId` is numeric in the payload and kept that
/// way.
pub struct OnlineParentAreaTable;

impl OnlineParentAreaTable {
    pub const TABLE_NAME: &'static str = "OnlineParentArea";

    pub const COLUMNS: &'static [ColumnSpec] = &[integer("AreaId"), text("Area")];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                AreaId INTEGER,
                Area TEXT
            )",
            Self::TABLE_NAME
        )
    }
}
