use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::error;

use crate::local_storage::SqlStore;
use crate::local_storage::customers::customer_tables::PcustomerTable;
use crate::local_storage::engine::Row;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutletParty {
    pub party: String,
    pub customer_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopLocation {
    pub customer_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

pub struct CustomerLocalStorage {
    store: Arc<SqlStore>,
}

impl CustomerLocalStorage {
    pub fn new(store: Arc<SqlStore>) -> Self {
        CustomerLocalStorage { store }
    }

    pub fn shops_by_route(&self, route_id: &str) -> Vec<Row> {
        let query = format!(
            "SELECT * FROM {} WHERE RouteID = ?",
            PcustomerTable::TABLE_NAME
        );
        self.select_rows(&query, &[json!(route_id)])
    }

    pub fn outlet_details(&self, customer_id: &str) -> Option<Row> {
        let query = format!(
            "SELECT * FROM {} WHERE CustomerId = ?",
            PcustomerTable::TABLE_NAME
        );
        self.select_rows(&query, &[json!(customer_id)])
            .into_iter()
            .next()
    }

    /// Outlet details scoped to one user, for the visit activity screens.
    pub fn customer_for_user(&self, customer_id: &str, user_id: &str) -> Vec<Row> {
        let query = format!(
            "SELECT * FROM {} WHERE CustomerId = ? AND userid = ?",
            PcustomerTable::TABLE_NAME
        );
        self.select_rows(&query, &[json!(customer_id), json!(user_id)])
    }

    pub fn outlet_parties(&self) -> Vec<OutletParty> {
        let query = format!(
            "SELECT DISTINCT Party, CustomerId FROM {}",
            PcustomerTable::TABLE_NAME
        );

        self.select_rows(&query, &[])
            .iter()
            .map(|row| OutletParty {
                party: string_field(row, "Party"),
                customer_id: string_field(row, "CustomerId"),
            })
            .collect()
    }

    /// Outlets with known coordinates, used to push shop locations back to
    /// the server.
    pub fn shop_locations_for_sync(&self) -> Vec<ShopLocation> {
        let query = format!(
            "SELECT CustomerId, Latitude, Longitude
             FROM {}
             WHERE Latitude IS NOT NULL
             AND Longitude IS NOT NULL",
            PcustomerTable::TABLE_NAME
        );

        self.select_rows(&query, &[])
            .iter()
            .filter_map(|row| {
                Some(ShopLocation {
                    customer_id: string_field(row, "CustomerId"),
                    latitude: row.get("Latitude").and_then(Value::as_f64)?,
                    longitude: row.get("Longitude").and_then(Value::as_f64)?,
                })
            })
            .collect()
    }

    fn select_rows(&self, query: &str, params: &[Value]) -> Vec<Row> {
        match self.store.select(query, params) {
            Ok(rows) => rows,
            Err(e) => {
                error!("could not read customers: {}", e);
                Vec::new()
            }
        }
    }
}

fn string_field(row: &Row, name: &str) -> String {
    row.get(name)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
