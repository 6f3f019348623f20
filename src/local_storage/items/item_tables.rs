use crate::local_storage::schema::{ColumnSpec, text};

/// The item master. Wide on purpose: every classification dimension the
/// report filters can group by is denormalized onto the row.
pub struct PItemTable;

impl PItemTable {
    pub const TABLE_NAME: &'static str = "PItem";

    /// Classification column pairs (`X`, `XID`) that report controls may
    /// select dynamically.
    pub const CLASSIFICATION_COLUMNS: &'static [&'static str] = &[
        "BRAND",
        "DIVISION",
        "FLAVOUR",
        "ITEMCLASS",
        "ITEMGROUP",
        "ITEMSIZE",
        "ITEMSUBGROUP",
        "ITEMTYPE",
    ];

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("ItemId"),
        text("Item"),
        text("ItemAlias"),
        text("BPC"),
        text("BPC1"),
        text("BPC2"),
        text("ErpCode"),
        text("Volume"),
        text("ReportingQuantity"),
        text("MRP"),
        text("PTR"),
        text("BRANDID"),
        text("BRAND"),
        text("DIVISIONID"),
        text("DIVISION"),
        text("FLAVOURID"),
        text("FLAVOUR"),
        text("ITEMCLASSID"),
        text("ITEMCLASS"),
        text("ITEMGROUPID"),
        text("ITEMGROUP"),
        text("ITEMSIZEID"),
        text("ITEMSIZE"),
        text("ITEMSUBGROUPID"),
        text("ITEMSUBGROUP"),
        text("ITEMTYPEID"),
        text("ITEMTYPE"),
        text("ITEMSEQUENCE"),
        text("Focus"),
        text("IsSelectedBrand"),
        text("IsSelectedBrandProduct"),
        text("bottleQut"),
        text("SchemeID"),
        text("ScanCode"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ItemId TEXT NOT NULL,
                Item TEXT,
                ItemAlias TEXT,
                BPC TEXT,
                BPC1 TEXT,
                BPC2 TEXT,
                ErpCode TEXT,
                Volume TEXT,
                ReportingQuantity TEXT,
                MRP TEXT,
                PTR TEXT,
                BRANDID TEXT,
                BRAND TEXT,
                DIVISIONID TEXT,
                DIVISION TEXT,
                FLAVOURID TEXT,
                FLAVOUR TEXT,
                ITEMCLASSID TEXT,
                ITEMCLASS TEXT,
                ITEMGROUPID TEXT,
                ITEMGROUP TEXT,
                ITEMSIZEID TEXT,
                ITEMSIZE TEXT,
                ITEMSUBGROUPID TEXT,
                ITEMSUBGROUP TEXT,
                ITEMTYPEID TEXT,
                ITEMTYPE TEXT,
                ITEMSEQUENCE TEXT,
                Focus TEXT,
                IsSelectedBrand TEXT,
                IsSelectedBrandProduct TEXT,
                bottleQut TEXT,
                SchemeID TEXT,
                ScanCode TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Units of measure. `id` is assigned locally; the UOM picker binds to it.
pub struct UomMasterTable;

impl UomMasterTable {
    pub const TABLE_NAME: &'static str = "uommaster";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("UOMDescription"),
        text("ConvToBase"),
        text("Formula"),
        text("UOMKey"),
        text("IsQuantity"),
        text("ConversionFormula"),
        text("ConversionUomFormula"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                UOMDescription TEXT,
                ConvToBase TEXT,
                Formula TEXT,
                UOMKey TEXT,
                IsQuantity TEXT,
                ConversionFormula TEXT,
                ConversionUomFormula TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Item sub-groups.
pub struct SubGroupMasterTable;

impl SubGroupMasterTable {
    pub const TABLE_NAME: &'static str = "SubGroupMaster";

    pub const COLUMNS: &'static [ColumnSpec] = &[text("Id"), text("GroupId"), text("Name")];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                Id TEXT NOT NULL,
                GroupId TEXT,
                Name TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Price list entries per classification and distributor.
pub struct PriceListClassificationTable;

impl PriceListClassificationTable {
    pub const TABLE_NAME: &'static str = "PriceListClassification";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("ClassificationId"),
        text("ItemId"),
        text("Price"),
        text("DistributorId"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ClassificationId TEXT,
                ItemId TEXT NOT NULL,
                Price TEXT,
                DistributorId TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}
