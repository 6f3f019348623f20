use crate::local_storage::schema::{ColumnSpec, text};

/// Discount type master.
pub struct DiscountMasterTable;

impl DiscountMasterTable {
    pub const TABLE_NAME: &'static str = "DiscountMaster";

    pub const COLUMNS: &'static [ColumnSpec] =
        &[text("ID"), text("Code"), text("DT_DESC"), text("userid")];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ID TEXT PRIMARY KEY NOT NULL,
                Code TEXT,
                DT_DESC TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Scheme type master.
pub struct SchemeMasterTable;

impl SchemeMasterTable {
    pub const TABLE_NAME: &'static str = "SchemeMaster";

    pub const COLUMNS: &'static [ColumnSpec] =
        &[text("ID"), text("Code"), text("DT_DESC"), text("userid")];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ID TEXT PRIMARY KEY NOT NULL,
                Code TEXT,
                DT_DESC TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Scheme slabs and benefit text per scheme window.
pub struct SchemeDetailsTable;

impl SchemeDetailsTable {
    pub const TABLE_NAME: &'static str = "SchemeDetails";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("ID"),
        text("SchemeID"),
        text("SchemeName"),
        text("FromDate"),
        text("ToDate"),
        text("SlabNo"),
        text("SchemeBenefits"),
        text("Remarks"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ID TEXT PRIMARY KEY NOT NULL,
                SchemeID TEXT,
                SchemeName TEXT,
                FromDate TEXT,
                ToDate TEXT,
                SlabNo TEXT,
                SchemeBenefits TEXT,
                Remarks TEXT
            )",
            Self::TABLE_NAME
        )
    }
}
