use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::error;

use crate::error::StoreError;
use crate::local_storage::SqlStore;
use crate::local_storage::engine::Row;
use crate::local_storage::orders::order_tables::OrderMasterTable;

/// Collection-type code for a day-start punch.
pub const COLLECTION_TYPE_DAY_START: i64 = 8;
/// Collection-type code for a day-end punch.
pub const COLLECTION_TYPE_DAY_END: i64 = 9;

/// One locally created OrderMaster row (shop check-in, attendance punch,
/// order header). Everything is carried as text, the way the sync payload
/// transports it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCheckIn {
    pub id: String,
    pub current_date_time: String,
    pub entity_type: String,
    pub entity_id: String,
    pub latitude: String,
    pub longitude: String,
    pub total_amount: String,
    pub from_date: String,
    pub to_date: String,
    pub collection_type: String,
    pub user_id: String,
    pub remark: String,
    pub selected_flag: String,
    pub sync_flag: String,
    pub check_date: String,
    pub default_distributor_id: String,
    pub expected_delivery_date: String,
    pub activity_status: String,
    pub activity_start: String,
    pub activity_end: String,
    pub userid: String,
}

pub struct OrderLocalStorage {
    store: Arc<SqlStore>,
}

impl OrderLocalStorage {
    pub fn new(store: Arc<SqlStore>) -> Self {
        OrderLocalStorage { store }
    }

    /// Writes one check-in row. Propagates failures so the screen can show
    /// a retry prompt.
    pub fn insert_shop_check_in(&self, check_in: &OrderCheckIn) -> Result<usize, StoreError> {
        let query = format!(
            "INSERT INTO {}(id,Current_date_time,entity_type,entity_id,latitude,
                longitude,total_amount,from_date,to_date,collection_type,user_id,selected_flag,sync_flag,remark,check_date,DefaultDistributorId,ExpectedDeliveryDate,ActivityStatus,ActivityStart,ActivityEnd,userid)
                VALUES (?,?,?,?,?,?,?,?,?,?,?,?,?,?,?,?,?,?,?,?,?)",
            OrderMasterTable::TABLE_NAME
        );

        self.store.run(
            &query,
            &[
                json!(check_in.id),
                json!(check_in.current_date_time),
                json!(check_in.entity_type),
                json!(check_in.entity_id),
                json!(check_in.latitude),
                json!(check_in.longitude),
                json!(check_in.total_amount),
                json!(check_in.from_date),
                json!(check_in.to_date),
                json!(check_in.collection_type),
                json!(check_in.user_id),
                json!(check_in.selected_flag),
                json!(check_in.sync_flag),
                json!(check_in.remark),
                json!(check_in.check_date),
                json!(check_in.default_distributor_id),
                json!(check_in.expected_delivery_date),
                json!(check_in.activity_status),
                json!(check_in.activity_start),
                json!(check_in.activity_end),
                json!(check_in.userid),
            ],
        )
    }

    /// Ids of punches of one collection type on one day (8 = day start,
    /// 9 = day end).
    pub fn check_ins_for_date(&self, collection_type: i64, date: &str) -> Vec<String> {
        let query = format!(
            "SELECT id FROM {} WHERE collection_type = ? AND from_date = ?",
            OrderMasterTable::TABLE_NAME
        );

        match self.store.select(&query, &[json!(collection_type), json!(date)]) {
            Ok(rows) => rows
                .iter()
                .filter_map(|row| row.get(OrderMasterTable::COLUMN_ID))
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Err(e) => {
                error!(collection_type, date, "could not read check-ins: {}", e);
                Vec::new()
            }
        }
    }

    /// Number of locally written rows the server has not confirmed yet.
    pub fn unsynced_order_count(&self) -> i64 {
        let query = format!(
            "SELECT COUNT(*) as TotalCount FROM {} WHERE sync_flag = 0",
            OrderMasterTable::TABLE_NAME
        );

        match self.store.select(&query, &[]) {
            Ok(rows) => rows
                .first()
                .and_then(|row| row.get("TotalCount"))
                .and_then(Value::as_i64)
                .unwrap_or(0),
            Err(e) => {
                error!("could not count unsynced orders: {}", e);
                0
            }
        }
    }

    pub fn distinct_activity_entities(&self) -> Vec<String> {
        let query = format!(
            "SELECT DISTINCT entity_id FROM {}",
            OrderMasterTable::TABLE_NAME
        );

        match self.store.select(&query, &[]) {
            Ok(rows) => rows
                .iter()
                .filter_map(|row| row.get("entity_id"))
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Err(e) => {
                error!("could not read activity entities: {}", e);
                Vec::new()
            }
        }
    }

    /// Everything booked against one outlet, joined with line items and
    /// item names.
    pub fn order_booked_details(&self, entity_id: &str, user_id: &str) -> Vec<Row> {
        let query = "SELECT DISTINCT Current_date_time, OrderMaster.from_date, ActivityStart, ActivityEnd, collection_type,
            OrderMaster.id, OrderDetails.item_id, OrderDetails.quantity_one, OrderDetails.quantity_two,
            OrderDetails.small_Unit, OrderDetails.large_Unit, OrderDetails.Amount, PItem.Item
            FROM OrderMaster
            LEFT JOIN OrderDetails ON OrderMaster.id = OrderDetails.order_id
            LEFT JOIN PItem ON OrderDetails.item_id = PItem.ItemId
            WHERE OrderMaster.entity_id = ? AND OrderMaster.userid = ?";

        match self.store.select(query, &[json!(entity_id), json!(user_id)]) {
            Ok(rows) => rows,
            Err(e) => {
                error!(entity_id, "could not read booked orders: {}", e);
                Vec::new()
            }
        }
    }

    /// Same join narrowed to one day.
    pub fn orders_for_entity_on_date(&self, entity_id: &str, date: &str, user_id: &str) -> Vec<Row> {
        let query = "SELECT Current_date_time, OrderMaster.from_date, ActivityStart, ActivityEnd, collection_type,
            OrderMaster.id, OrderDetails.item_id, OrderDetails.quantity_one, OrderDetails.quantity_two,
            OrderDetails.Amount, PItem.Item
            FROM OrderMaster
            LEFT JOIN OrderDetails ON OrderMaster.id = OrderDetails.order_id
            LEFT JOIN PItem ON OrderDetails.item_id = PItem.ItemId
            WHERE OrderMaster.entity_id = ? AND OrderMaster.from_date = ? AND OrderMaster.userid = ?";

        match self
            .store
            .select(query, &[json!(entity_id), json!(date), json!(user_id)])
        {
            Ok(rows) => rows,
            Err(e) => {
                error!(entity_id, date, "could not read orders for date: {}", e);
                Vec::new()
            }
        }
    }

    /// Visited outlets per day for the activity report, one result set per
    /// requested date.
    pub fn activity_for_dates(&self, dates: &[&str]) -> Vec<Vec<Row>> {
        let query = "SELECT DISTINCT OrderMaster.entity_id, OrderMaster.from_date, Pcustomer.Party, Pcustomer.CustomerId
            FROM OrderMaster
            LEFT JOIN Pcustomer ON OrderMaster.entity_id = Pcustomer.CustomerId
            WHERE OrderMaster.from_date = ?";

        dates
            .iter()
            .map(|date| match self.store.select(query, &[json!(date)]) {
                Ok(rows) => rows,
                Err(e) => {
                    error!(date, "could not read activity: {}", e);
                    Vec::new()
                }
            })
            .collect()
    }
}
