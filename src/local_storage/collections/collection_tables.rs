use crate::local_storage::schema::{ColumnSpec, text};

/// Payment receipts logged against outlets.
pub struct PaymentReceiptLogTable;

impl PaymentReceiptLogTable {
    pub const TABLE_NAME: &'static str = "TX_PaymentReceipt_log";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("ID"),
        text("ReceivedDateTime"),
        text("PaymentMode"),
        text("ChequeNo"),
        text("ChequeDated"),
        text("BankDetails"),
        text("Amount"),
        text("OutletID"),
        text("Narration"),
        text("ExecutiveID"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ID TEXT NOT NULL,
                ReceivedDateTime TEXT,
                PaymentMode TEXT,
                ChequeNo TEXT,
                ChequeDated TEXT,
                BankDetails TEXT,
                Amount TEXT,
                OutletID TEXT,
                Narration TEXT,
                ExecutiveID TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Collection allocations per invoice.
pub struct CollectionsLogTable;

impl CollectionsLogTable {
    pub const TABLE_NAME: &'static str = "TX_Collections_log";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("MobileGenPrimaryKey"),
        text("InvoiceCode"),
        text("AllocatedAmount"),
        text("CollectionDatetime"),
        text("PartyCode"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                MobileGenPrimaryKey TEXT NOT NULL,
                InvoiceCode TEXT,
                AllocatedAmount TEXT,
                CollectionDatetime TEXT,
                PartyCode TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Per-collection discount breakdown lines.
pub struct CollectionsDetailsLogTable;

impl CollectionsDetailsLogTable {
    pub const TABLE_NAME: &'static str = "TX_CollectionsDetails_log";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("CollectionID"),
        text("Amount"),
        text("DiscountType"),
        text("InvoiceCode"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                CollectionID TEXT NOT NULL,
                Amount TEXT,
                DiscountType TEXT,
                InvoiceCode TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Outstanding amounts per party and document.
pub struct OutstandingDetailsTable;

impl OutstandingDetailsTable {
    pub const TABLE_NAME: &'static str = "OutstandingDetails";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("ID"),
        text("PartyCode"),
        text("Document"),
        text("Date"),
        text("DisPactchDate"),
        text("Amount"),
        text("OSAmount"),
        text("OSDocument"),
        text("InvoiceDate"),
        text("DiscountAc"),
        text("PdcAmt"),
        text("PdcDate"),
        text("CDStatus"),
        text("Narration"),
        text("TpNo"),
        text("LedgerCode"),
        text("CDPercentage"),
        text("ChqNo"),
        text("PayslipNo"),
        text("ReceivedAmt"),
        text("Lag"),
        text("UnAllocated"),
        text("NetOsAmt"),
        text("VhrNo"),
        text("PartyName"),
        text("Location"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ID TEXT PRIMARY KEY NOT NULL,
                PartyCode TEXT,
                Document TEXT,
                Date TEXT,
                DisPactchDate TEXT,
                Amount TEXT,
                OSAmount TEXT,
                OSDocument TEXT,
                InvoiceDate TEXT,
                DiscountAc TEXT,
                PdcAmt TEXT,
                PdcDate TEXT,
                CDStatus TEXT,
                Narration TEXT,
                TpNo TEXT,
                LedgerCode TEXT,
                CDPercentage TEXT,
                ChqNo TEXT,
                PayslipNo TEXT,
                ReceivedAmt TEXT,
                Lag TEXT,
                UnAllocated TEXT,
                NetOsAmt TEXT,
                VhrNo TEXT,
                PartyName TEXT,
                Location TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}

/// Bounced cheques per party.
pub struct ChequeReturnDetailsTable;

impl ChequeReturnDetailsTable {
    pub const TABLE_NAME: &'static str = "ChequeReturnDetails";

    pub const COLUMNS: &'static [ColumnSpec] = &[
        text("ID"),
        text("PartyCode"),
        text("ReceiptNo"),
        text("ReceiptDate"),
        text("ChqNo"),
        text("ChqDate"),
        text("ChqAmt"),
        text("BankName"),
        text("Branch"),
        text("BounceDate"),
        text("userid"),
    ];

    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ID TEXT PRIMARY KEY NOT NULL,
                PartyCode TEXT,
                ReceiptNo TEXT,
                ReceiptDate TEXT,
                ChqNo TEXT,
                ChqDate TEXT,
                ChqAmt TEXT,
                BankName TEXT,
                Branch TEXT,
                BounceDate TEXT,
                userid TEXT
            )",
            Self::TABLE_NAME
        )
    }
}
