pub mod config;
pub mod error;
pub mod local_storage;
pub mod services;

#[cfg(test)]
mod test;

pub use config::{DATABASE_VERSION, StoreConfig};
pub use error::StoreError;
pub use local_storage::sql_store::{SqlStatement, SqlStore};
pub use services::sync_service::{DataLoader, SyncReport, SyncSnapshot};
