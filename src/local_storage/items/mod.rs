pub mod item_local_storage;
pub mod item_tables;

pub use item_local_storage::{BrandRef, CategoryRef, ItemLocalStorage, ItemRef};
pub use item_tables::{PItemTable, PriceListClassificationTable, SubGroupMasterTable, UomMasterTable};
