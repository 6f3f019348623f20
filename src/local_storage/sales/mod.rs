pub mod sales_tables;

pub use sales_tables::{SalesTable, SalesYtdTable, TargetTable};
