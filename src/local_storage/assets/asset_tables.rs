use crate::local_storage::schema::{ColumnSpec, text};

/// Assets placed at outlets (coolers, racks) with their QR codes.
pub struct OutletAssetInformationTable;

impl OutletAssetInformationTable {
    pub const TABLE_NAME: &'static str = "OutletAssetInformation";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("CustomerID"),
        text("AssetID"),
        text("AssetQRcode"),
        text("AssetInformation"),
        text("ScanFlag"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                CustomerID TEXT NOT NULL,
                AssetID TEXT,
                AssetQRcode TEXT,
                AssetInformation TEXT,
                ScanFlag TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Asset types and the classification options offered when auditing them.
pub struct AssetTypeClassificationListTable;

impl AssetTypeClassificationListTable {
    pub const TABLE_NAME: &'static str = "AssetTypeClassificationList";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("AssetTypeID"),
        text("AssetName"),
        text("ClassificationList"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                AssetTypeID TEXT NOT NULL,
                AssetName TEXT,
                ClassificationList TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Results of asset placement audits.
pub struct AssetPlacementVerificationTable;

impl AssetPlacementVerificationTable {
    pub const TABLE_NAME: &'static str = "AssetPlacementVerification";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("OrderID"),
        text("AssetID"),
        text("QRCode"),
        text("ScanStatus"),
        text("AssetInformation"),
        text("Remark"),
        text("Condition"),
        text("AuditDate"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                OrderID TEXT NOT NULL,
                AssetID TEXT,
                QRCode TEXT,
                ScanStatus TEXT,
                AssetInformation TEXT,
                Remark TEXT,
                Condition TEXT,
                AuditDate TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}
