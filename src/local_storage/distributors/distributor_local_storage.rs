use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::error;

use crate::local_storage::SqlStore;
use crate::local_storage::distributors::distributor_tables::PDistributorTable;
use crate::local_storage::engine::Row;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributorRef {
    pub distributor_id: String,
    pub distributor: String,
}

impl DistributorRef {
    fn from_row(row: &Row) -> Self {
        let field = |name: &str| {
            row.get(name)
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string()
        };

        DistributorRef {
            distributor_id: field("DistributorID"),
            distributor: field("Distributor"),
        }
    }
}

pub struct DistributorLocalStorage {
    store: Arc<SqlStore>,
}

impl DistributorLocalStorage {
    pub fn new(store: Arc<SqlStore>) -> Self {
        DistributorLocalStorage { store }
    }

    pub fn distributors_for_user(&self, user_id: &str) -> Vec<DistributorRef> {
        let query = format!(
            "SELECT DISTINCT DistributorID, Distributor FROM {} WHERE userid = ? ORDER BY Distributor",
            PDistributorTable::TABLE_NAME
        );

        match self.store.select(&query, &[json!(user_id)]) {
            Ok(rows) => rows.iter().map(DistributorRef::from_row).collect(),
            Err(e) => {
                error!(user_id, "could not read distributors: {}", e);
                Vec::new()
            }
        }
    }

    pub fn all_distributors(&self) -> Vec<DistributorRef> {
        let query = format!(
            "SELECT DISTINCT DistributorID, Distributor FROM {} ORDER BY Distributor ASC",
            PDistributorTable::TABLE_NAME
        );

        match self.store.select(&query, &[]) {
            Ok(rows) => rows.iter().map(DistributorRef::from_row).collect(),
            Err(e) => {
                error!("could not read distributors: {}", e);
                Vec::new()
            }
        }
    }

    /// Distributor details in the same shape the outlet lookup returns, so
    /// visit screens can treat both entity types alike.
    pub fn distributor_for_user(&self, distributor_id: &str, user_id: &str) -> Vec<Row> {
        let query = format!(
            "SELECT Distributor as Party, AREA as AREA FROM {} WHERE DistributorID = ? AND userid = ?",
            PDistributorTable::TABLE_NAME
        );

        match self
            .store
            .select(&query, &[json!(distributor_id), json!(user_id)])
        {
            Ok(rows) => rows,
            Err(e) => {
                error!(distributor_id, "could not read distributor: {}", e);
                Vec::new()
            }
        }
    }
}
