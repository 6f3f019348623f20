pub mod collection_tables;

pub use collection_tables::{
    ChequeReturnDetailsTable, CollectionsDetailsLogTable, CollectionsLogTable,
    OutstandingDetailsTable, PaymentReceiptLogTable,
};
