pub mod report_local_storage;
pub mod report_tables;

pub use report_local_storage::ReportLocalStorage;
pub use report_tables::{ReportControlMasterTable, ReportTable};
