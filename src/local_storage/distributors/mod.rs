pub mod distributor_local_storage;
pub mod distributor_tables;

pub use distributor_local_storage::{DistributorLocalStorage, DistributorRef};
pub use distributor_tables::{DistributorContactsTable, DistributorDataStatusTable, PDistributorTable};
