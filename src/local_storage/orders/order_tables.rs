use crate::local_storage::schema::{ColumnSpec, text};

/// One header row per visit activity (order, check-in, attendance punch).
/// Rows are written locally before they are synced, so the loader upserts
/// by id and never clears this table.
pub struct OrderMasterTable;

impl OrderMasterTable {
    pub const TABLE_NAME: &'static str = "OrderMaster";

    /// The column name for the client-generated order identifier.
    pub const COLUMN_ID: &'static str = "id";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("id"),
        text("Current_date_time"),
        text("entity_type"),
        text("entity_id"),
        text("latitude"),
        text("longitude"),
        text("total_amount"),
        text("from_date"),
        text("to_date"),
        text("collection_type"),
        text("user_id"),
        text("remark"),
        text("selected_flag"),
        text("sync_flag"),
        text("check_date"),
        text("DefaultDistributorId"),
        text("ExpectedDeliveryDate"),
        text("ActivityStatus"),
        text("ActivityStart"),
        text("ActivityEnd"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id TEXT PRIMARY KEY NOT NULL,
                Current_date_time TEXT,
                entity_type TEXT,
                entity_id TEXT,
                latitude TEXT,
                longitude TEXT,
                total_amount TEXT,
                from_date TEXT,
                to_date TEXT,
                collection_type TEXT,
                user_id TEXT,
                remark TEXT,
                selected_flag TEXT,
                sync_flag TEXT,
                check_date TEXT,
                DefaultDistributorId TEXT,
                ExpectedDeliveryDate TEXT,
                ActivityStatus TEXT,
                ActivityStart TEXT,
                ActivityEnd TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Line items per order. Appended, never cleared by the loader, for the
/// same reason as the master rows.
pub struct OrderDetailsTable;

impl OrderDetailsTable {
    pub const TABLE_NAME: &'static str = "OrderDetails";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("order_id"),
        text("item_id"),
        text("item_Name"),
        text("quantity_one"),
        text("quantity_two"),
        text("small_Unit"),
        text("large_Unit"),
        text("rate"),
        text("Amount"),
        text("selected_flag"),
        text("sync_flag"),
        text("bottleQty"),
        text("BrandId"),
        text("entityId"),
        text("CollectionType"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                order_id TEXT NOT NULL,
                item_id TEXT,
                item_Name TEXT,
                quantity_one TEXT,
                quantity_two TEXT,
                small_Unit TEXT,
                large_Unit TEXT,
                rate TEXT,
                Amount TEXT,
                selected_flag TEXT,
                sync_flag TEXT,
                bottleQty TEXT,
                BrandId TEXT,
                entityId TEXT,
                CollectionType TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Server-side pending order lines, refreshed wholesale.
pub struct PendingOrdersTable;

impl PendingOrdersTable {
    pub const TABLE_NAME: &'static str = "VW_PendingOrders";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("Party"),
        text("Id"),
        text("POM_DOC_NO"),
        text("POM_DOC_DATE"),
        text("POM_DOC_AMOUNT"),
        text("POD_ITEM_NAME"),
        text("POD_SQTY"),
        text("POD_FQTY"),
        text("POD_LEDGER_NAME"),
        text("POD_RNP"),
        text("POD_RATE"),
        text("POD_QUANTITY"),
        text("POD_TOTALDISCOUNT"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                Party TEXT,
                Id TEXT,
                POM_DOC_NO TEXT,
                POM_DOC_DATE TEXT,
                POM_DOC_AMOUNT TEXT,
                POD_ITEM_NAME TEXT,
                POD_SQTY TEXT,
                POD_FQTY TEXT,
                POD_LEDGER_NAME TEXT,
                POD_RNP TEXT,
                POD_RATE TEXT,
                POD_QUANTITY TEXT,
                POD_TOTALDISCOUNT TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}
