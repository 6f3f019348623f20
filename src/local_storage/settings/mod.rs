pub mod settings_local_storage;
pub mod settings_tables;

pub use settings_local_storage::SettingsLocalStorage;
pub use settings_tables::{SettingTable, SettingsTable};
