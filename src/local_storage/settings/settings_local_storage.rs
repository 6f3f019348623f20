use std::sync::Arc;

use serde_json::{Value, json};
use tracing::error;

use crate::error::StoreError;
use crate::local_storage::SqlStore;
use crate::local_storage::settings::settings_tables::SettingTable;

pub struct SettingsLocalStorage {
    store: Arc<SqlStore>,
}

impl SettingsLocalStorage {
    pub fn new(store: Arc<SqlStore>) -> Self {
        SettingsLocalStorage { store }
    }

    /// Looks a setting up by name in the legacy Setting table.
    pub fn setting_value(&self, name: &str) -> Option<String> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = ?",
            SettingTable::COLUMN_VALUE,
            SettingTable::TABLE_NAME,
            SettingTable::COLUMN_NAME
        );

        match self.store.select(&query, &[json!(name)]) {
            Ok(rows) => rows
                .first()
                .and_then(|row| row.get(SettingTable::COLUMN_VALUE))
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(e) => {
                error!(name, "could not read setting: {}", e);
                None
            }
        }
    }

    pub fn set_setting_value(&self, name: &str, value: &str) -> Result<(), StoreError> {
        let query = format!(
            "INSERT OR REPLACE INTO {} ({}, {}) VALUES (?, ?)",
            SettingTable::TABLE_NAME,
            SettingTable::COLUMN_NAME,
            SettingTable::COLUMN_VALUE
        );
        self.store.run(&query, &[json!(name), json!(value)])?;
        Ok(())
    }

    /// Timestamp of the last completed sync, recorded by the sync flow.
    pub fn last_sync(&self) -> Option<String> {
        self.setting_value("LastSync")
    }

    pub fn auto_sync_flag(&self) -> String {
        self.setting_value("AutoSync").unwrap_or_else(|| "0".to_string())
    }

    pub fn sync_on_activity_flag(&self) -> String {
        self.setting_value("SyncOnActivity")
            .unwrap_or_else(|| "0".to_string())
    }

    pub fn attendance_settings(&self) -> Option<String> {
        self.setting_value("AttendanceSettings")
    }

    pub fn order_confirm_flag(&self) -> Option<String> {
        self.setting_value("OrderConfirmSignature")
    }

    pub fn external_share_flag(&self) -> Option<String> {
        self.setting_value("ExternalShare")
    }

    pub fn app_log_writing(&self) -> Option<String> {
        self.setting_value("AppLogWriting")
    }
}
