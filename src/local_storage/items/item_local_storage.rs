use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::local_storage::SqlStore;
use crate::local_storage::engine::Row;
use crate::local_storage::items::item_tables::{PItemTable, UomMasterTable};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandRef {
    pub brand_id: String,
    pub brand: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub group_id: String,
    pub group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRef {
    pub item_id: String,
    pub item: String,
}

pub struct ItemLocalStorage {
    store: Arc<SqlStore>,
}

impl ItemLocalStorage {
    pub fn new(store: Arc<SqlStore>) -> Self {
        ItemLocalStorage { store }
    }

    pub fn sku_list(&self) -> Vec<Row> {
        self.select_rows(&format!("SELECT * FROM {}", PItemTable::TABLE_NAME), &[])
    }

    /// Distinct brands with a non-empty name.
    pub fn brands(&self) -> Vec<BrandRef> {
        let query = format!(
            "SELECT DISTINCT BRANDID, BRAND FROM {} WHERE BRAND IS NOT NULL AND BRAND != ''",
            PItemTable::TABLE_NAME
        );

        self.select_rows(&query, &[])
            .iter()
            .map(|row| BrandRef {
                brand_id: string_field(row, "BRANDID"),
                brand: string_field(row, "BRAND"),
            })
            .collect()
    }

    pub fn brands_for_user(&self, user_id: &str) -> Vec<BrandRef> {
        let query = format!(
            "SELECT DISTINCT BRAND, BRANDID FROM {} WHERE userid = ? ORDER BY BRAND",
            PItemTable::TABLE_NAME
        );

        self.select_rows(&query, &[json!(user_id)])
            .iter()
            .map(|row| BrandRef {
                brand_id: string_field(row, "BRANDID"),
                brand: string_field(row, "BRAND"),
            })
            .collect()
    }

    pub fn categories(&self) -> Vec<CategoryRef> {
        let query = format!(
            "SELECT DISTINCT ITEMGROUPID, ITEMGROUP FROM {} WHERE ITEMGROUP IS NOT NULL AND ITEMGROUP != ''",
            PItemTable::TABLE_NAME
        );

        self.select_rows(&query, &[])
            .iter()
            .map(|row| CategoryRef {
                group_id: string_field(row, "ITEMGROUPID"),
                group: string_field(row, "ITEMGROUP"),
            })
            .collect()
    }

    pub fn skus_for_user(&self, user_id: &str) -> Vec<ItemRef> {
        let query = format!(
            "SELECT DISTINCT Item, ItemId FROM {} WHERE userid = ? ORDER BY Item",
            PItemTable::TABLE_NAME
        );

        self.select_rows(&query, &[json!(user_id)])
            .iter()
            .map(|row| ItemRef {
                item_id: string_field(row, "ItemId"),
                item: string_field(row, "Item"),
            })
            .collect()
    }

    pub fn sizes_for_user(&self, user_id: &str) -> Vec<Row> {
        let query = format!(
            "SELECT DISTINCT ITEMSIZE, ITEMSIZEID, Item FROM {} WHERE userid = ? ORDER BY Item",
            PItemTable::TABLE_NAME
        );
        self.select_rows(&query, &[json!(user_id)])
    }

    pub fn item_ids_for_brands(&self, brand_ids: &[String]) -> Vec<String> {
        if brand_ids.is_empty() {
            return Vec::new();
        }

        let placeholders = vec!["?"; brand_ids.len()].join(",");
        let query = format!(
            "SELECT DISTINCT ItemId FROM {} WHERE BRANDID IN ({})",
            PItemTable::TABLE_NAME,
            placeholders
        );
        let params: Vec<Value> = brand_ids.iter().map(|id| json!(id)).collect();

        self.select_rows(&query, &params)
            .iter()
            .map(|row| string_field(row, "ItemId"))
            .collect()
    }

    /// Distinct values of one classification column, selected by a report
    /// control. The column name comes from ReportControlMaster data, so it
    /// is checked against the fixed pair list before it reaches the SQL.
    pub fn classification_values(&self, control: &str, user_id: &str) -> Vec<Row> {
        if !PItemTable::CLASSIFICATION_COLUMNS.contains(&control) {
            warn!(control, "unknown classification column requested");
            return Vec::new();
        }

        let query = format!(
            "SELECT DISTINCT {control} as BRAND, {control}ID as BRANDID, IsSelectedBrand, IsSelectedBrandProduct FROM {} WHERE userid = ? ORDER BY {control}",
            PItemTable::TABLE_NAME
        );
        self.select_rows(&query, &[json!(user_id)])
    }

    pub fn uom_list(&self) -> Vec<Row> {
        let query = format!(
            "SELECT id, UOMDescription FROM {}",
            UomMasterTable::TABLE_NAME
        );
        self.select_rows(&query, &[])
    }

    fn select_rows(&self, query: &str, params: &[Value]) -> Vec<Row> {
        match self.store.select(query, params) {
            Ok(rows) => rows,
            Err(e) => {
                error!("could not read items: {}", e);
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
