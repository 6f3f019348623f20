pub mod customer_local_storage;
pub mod customer_tables;

pub use customer_local_storage::{CustomerLocalStorage, OutletParty, ShopLocation};
pub use customer_tables::{BankCustomerTable, PcustomerTable};
