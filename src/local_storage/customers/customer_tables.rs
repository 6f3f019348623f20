use crate::local_storage::schema::{ColumnSpec, real, text};

/// The outlet master. Coordinates are the only non-text columns; a missing
/// or unparsable coordinate is stored as NULL so the map view can filter
/// on it.
pub struct PcustomerTable;

impl PcustomerTable {
    pub const TABLE_NAME: &'static str = "Pcustomer";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("CustomerId"),
        text("Party"),
        text("LicenceNo"),
        text("IsActive"),
        text("ERPCode"),
        text("RouteID"),
        text("RouteName"),
        text("AREAID"),
        text("AREA"),
        text("BRANCHID"),
        text("BRANCH"),
        text("CUSTOMERCLASSID"),
        text("CUSTOMERCLASS"),
        text("CUSTOMERCLASS2ID"),
        text("CUSTOMERCLASS2"),
        text("CUSTOMERGROUPID"),
        text("CUSTOMERGROUP"),
        text("CUSTOMERSEGMENTID"),
        text("CUSTOMERSEGMENT"),
        text("CUSTOMERSUBSEGMENTID"),
        text("CUSTOMERSUBSEGMENT"),
        text("LICENCETYPEID"),
        text("LICENCETYPE"),
        text("OCTROIZONEID"),
        text("OCTROIZONE"),
        text("Outlet_Info"),
        text("DefaultDistributorId"),
        text("SchemeID"),
        text("PriceListId"),
        real("Latitude"),
        real("Longitude"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                CustomerId TEXT NOT NULL,
                Party TEXT,
                LicenceNo TEXT,
                IsActive TEXT,
                ERPCode TEXT,
                RouteID TEXT,
                RouteName TEXT,
                AREAID TEXT,
                AREA TEXT,
                BRANCHID TEXT,
                BRANCH TEXT,
                CUSTOMERCLASSID TEXT,
                CUSTOMERCLASS TEXT,
                CUSTOMERCLASS2ID TEXT,
                CUSTOMERCLASS2 TEXT,
                CUSTOMERGROUPID TEXT,
                CUSTOMERGROUP TEXT,
                CUSTOMERSEGMENTID TEXT,
                CUSTOMERSEGMENT TEXT,
                CUSTOMERSUBSEGMENTID TEXT,
                CUSTOMERSUBSEGMENT TEXT,
                LICENCETYPEID TEXT,
                LICENCETYPE TEXT,
                OCTROIZONEID TEXT,
                OCTROIZONE TEXT,
                Outlet_Info TEXT,
                DefaultDistributorId TEXT,
                SchemeID TEXT,
                PriceListId TEXT,
                Latitude REAL,
                Longitude REAL,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Bank account details per outlet. The backend treats an absent domain as
/// "all deleted", so the loader clears this table when the snapshot has no
/// entry for it.
pub struct BankCustomerTable;

impl BankCustomerTable {
    pub const TABLE_NAME: &'static str = "RO_BankCustomer";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("PartyCode"),
        text("BankName"),
        text("AccountNo"),
        text("IFSC"),
        text("BankBranch"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                PartyCode TEXT NOT NULL,
                BankName TEXT,
                AccountNo TEXT,
                IFSC TEXT,
                BankBranch TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}
