use std::sync::Arc;

use serde_json::{Value, json};
use tracing::error;

use crate::local_storage::SqlStore;
use crate::local_storage::engine::Row;
use crate::local_storage::reports::report_tables::{ReportControlMasterTable, ReportTable};

pub struct ReportLocalStorage {
    store: Arc<SqlStore>,
}

impl ReportLocalStorage {
    pub fn new(store: Arc<SqlStore>) -> Self {
        ReportLocalStorage { store }
    }

    /// Classification rows for one report menu key ("Report1",
    /// "Report2", ...).
    pub fn classifications_for_menu(&self, menu_key: &str) -> Vec<Row> {
        let query = format!(
            "SELECT * FROM {} WHERE MenuKey = ?",
            ReportTable::TABLE_NAME
        );

        match self.store.select(&query, &[json!(menu_key)]) {
            Ok(rows) => rows,
            Err(e) => {
                error!(menu_key, "could not read report classifications: {}", e);
                Vec::new()
            }
        }
    }

    pub fn control_id(&self, reference_column: &str) -> Option<String> {
        let query = format!(
            "SELECT ControlId FROM {} WHERE ReferenceColumn = ?",
            ReportControlMasterTable::TABLE_NAME
        );

        match self.store.select(&query, &[json!(reference_column)]) {
            Ok(rows) => rows
                .first()
                .and_then(|row| row.get("ControlId"))
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(e) => {
                error!(reference_column, "could not read control id: {}", e);
                None
            }
        }
    }
}
