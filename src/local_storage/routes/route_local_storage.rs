use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::local_storage::SqlStore;
use crate::local_storage::routes::route_tables::{OnlineParentAreaTable, PjpMasterTable};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRef {
    pub route_id: String,
    pub route_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentArea {
    pub area_id: i64,
    pub area: String,
}

pub struct RouteLocalStorage {
    store: Arc<SqlStore>,
}

impl RouteLocalStorage {
    pub fn new(store: Arc<SqlStore>) -> Self {
        RouteLocalStorage { store }
    }

    pub fn routes(&self) -> Vec<RouteRef> {
        let query = format!("SELECT * FROM {}", PjpMasterTable::TABLE_NAME);

        match self.store.select(&query, &[]) {
            Ok(rows) => rows
                .iter()
                .map(|row| RouteRef {
                    route_id: row
                        .get("RouteID")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    route_name: row
                        .get("RouteName")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                })
                .collect(),
            Err(e) => {
                error!("could not read routes: {}", e);
                Vec::new()
            }
        }
    }

    pub fn parent_areas(&self) -> Vec<ParentArea> {
        let query = format!(
            "SELECT AreaId, Area FROM {} ORDER BY Area ASC",
            OnlineParentAreaTable::TABLE_NAME
        );

        match self.store.select(&query, &[]) {
            Ok(rows) => rows
                .iter()
                .map(|row| ParentArea {
                    area_id: row.get("AreaId").and_then(Value::as_i64).unwrap_or(0),
                    area: row
                        .get("Area")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                })
                .collect(),
            Err(e) => {
                error!("could not read parent areas: {}", e);
                Vec::new()
            }
        }
    }
}
