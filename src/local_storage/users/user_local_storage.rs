use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::error;

use crate::local_storage::SqlStore;
use crate::local_storage::engine::Row;
use crate::local_storage::users::user_tables::MultiEntityUserTable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiEntityUser {
    pub user_id: String,
    pub distributor_id: String,
    pub division_id: String,
    pub distributor: String,
}

impl MultiEntityUser {
    pub fn from_row(row: &Row) -> Self {
        let field = |name: &str| {
            row.get(name)
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string()
        };

        MultiEntityUser {
            user_id: field(MultiEntityUserTable::COLUMN_USER_ID),
            distributor_id: field(MultiEntityUserTable::COLUMN_DISTRIBUTOR_ID),
            division_id: field(MultiEntityUserTable::COLUMN_DIVISION_ID),
            distributor: field(MultiEntityUserTable::COLUMN_DISTRIBUTOR),
        }
    }
}

pub struct UserLocalStorage {
    store: Arc<SqlStore>,
}

impl UserLocalStorage {
    pub fn new(store: Arc<SqlStore>) -> Self {
        UserLocalStorage { store }
    }

    /// Every distributor entity the logged-in account can act for.
    pub fn all_entities(&self) -> Vec<MultiEntityUser> {
        let query = format!("SELECT * FROM {}", MultiEntityUserTable::TABLE_NAME);

        match self.store.select(&query, &[]) {
            Ok(rows) => rows.iter().map(MultiEntityUser::from_row).collect(),
            Err(e) => {
                error!("could not read multi entity users: {}", e);
                Vec::new()
            }
        }
    }

    pub fn first_entity_for_user(&self, user_id: &str) -> Option<MultiEntityUser> {
        let query = format!(
            "SELECT * FROM {} WHERE {} = ? LIMIT 1",
            MultiEntityUserTable::TABLE_NAME,
            MultiEntityUserTable::COLUMN_USER_ID
        );

        match self.store.select(&query, &[json!(user_id)]) {
            Ok(rows) => rows.first().map(MultiEntityUser::from_row),
            Err(e) => {
                error!(user_id, "could not read multi entity user: {}", e);
                None
            }
        }
    }

    pub fn user_ids(&self) -> Vec<String> {
        let query = format!(
            "SELECT {} FROM {}",
            MultiEntityUserTable::COLUMN_USER_ID,
            MultiEntityUserTable::TABLE_NAME
        );

        match self.store.select(&query, &[]) {
            Ok(rows) => rows
                .iter()
                .filter_map(|row| row.get(MultiEntityUserTable::COLUMN_USER_ID))
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Err(e) => {
                error!("could not read multi entity user ids: {}", e);
                Vec::new()
            }
        }
    }
}
