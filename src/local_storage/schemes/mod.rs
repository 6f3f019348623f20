pub mod scheme_tables;

pub use scheme_tables::{DiscountMasterTable, SchemeDetailsTable, SchemeMasterTable};
