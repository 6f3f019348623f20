use crate::local_storage::schema::{ColumnSpec, text};

/// The distributor master.
pub struct PDistributorTable;

impl PDistributorTable {
    pub const TABLE_NAME: &'static str = "PDistributor";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("DistributorID"),
        text("Distributor"),
        text("DistributorAlias"),
        text("ERPCode"),
        text("AREAID"),
        text("AREA"),
        text("BRANCHID"),
        text("BRANCH"),
        text("DISTRIBUTORGROUPID"),
        text("DISTRIBUTORGROUP"),
        text("IsSelectedDistributor"),
        text("DISTRIBUTORINFO"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                DistributorID TEXT NOT NULL,
                Distributor TEXT,
                DistributorAlias TEXT,
                ERPCode TEXT,
                AREAID TEXT,
                AREA TEXT,
                BRANCHID TEXT,
                BRANCH TEXT,
                DISTRIBUTORGROUPID TEXT,
                DISTRIBUTORGROUP TEXT,
                IsSelectedDistributor TEXT,
                DISTRIBUTORINFO TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Contact people per distributor.
pub struct DistributorContactsTable;

impl DistributorContactsTable {
    pub const TABLE_NAME: &'static str = "DistributorContacts";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("DistributorID"),
        text("SequenceNo"),
        text("ContactPerson"),
        text("ContactNumber"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                DistributorID TEXT NOT NULL,
                SequenceNo TEXT,
                ContactPerson TEXT,
                ContactNumber TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Upload freshness per distributor, one column per trailing day.
pub struct DistributorDataStatusTable;

impl DistributorDataStatusTable {
    pub const TABLE_NAME: &'static str = "DistributorDataStatus";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("Branch"),
        text("DistributorID"),
        text("Area"),
        text("Day7"),
        text("Day6"),
        text("Day5"),
        text("Day4"),
        text("Day3"),
        text("Day2"),
        text("Day1"),
        text("LastUploadDate"),
        text("LastInvoiceDate"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                Branch TEXT,
                DistributorID TEXT NOT NULL,
                Area TEXT,
                Day7 TEXT,
                Day6 TEXT,
                Day5 TEXT,
                Day4 TEXT,
                Day3 TEXT,
                Day2 TEXT,
                Day1 TEXT,
                LastUploadDate TEXT,
                LastInvoiceDate TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}
