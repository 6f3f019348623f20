use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::error::StoreError;
use crate::local_storage::SqlStore;
use crate::local_storage::attendance::attendance_tables::{AttendanceTable, UsesLogTable};
use crate::local_storage::engine::Row;

/// One attendance punch. `is_day_end` is 0 for the day-start punch and 1
/// for the day-end punch; the two are queried independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAttendance {
    pub user_id: String,
    pub attendance_type: String,
    pub attendance_date: String,
    pub attendance_time: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub remark: String,
    pub is_day_end: i64,
}

pub struct AttendanceLocalStorage {
    store: Arc<SqlStore>,
}

impl AttendanceLocalStorage {
    pub fn new(store: Arc<SqlStore>) -> Self {
        AttendanceLocalStorage { store }
    }

    /// Writes one punch, unsynced. Propagates failures so the screen can
    /// offer a retry.
    pub fn insert_attendance(&self, attendance: &NewAttendance) -> Result<usize, StoreError> {
        let query = format!(
            "INSERT INTO {} (
                UserId, AttendanceType, AttendanceDate, AttendanceTime,
                Latitude, Longitude, Remark, IsDayEnd, SyncFlag
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0)",
            AttendanceTable::TABLE_NAME
        );

        self.store.run(
            &query,
            &[
                json!(attendance.user_id),
                json!(attendance.attendance_type),
                json!(attendance.attendance_date),
                json!(attendance.attendance_time),
                json!(attendance.latitude),
                json!(attendance.longitude),
                json!(attendance.remark),
                json!(attendance.is_day_end),
            ],
        )
    }

    /// Day-start punches on one date.
    pub fn attendance_for_date(&self, date: &str) -> Vec<Row> {
        self.punches_for_date(date, 0)
    }

    /// Day-end punches on one date, independent of the day-start rows.
    pub fn day_end_attendance_for_date(&self, date: &str) -> Vec<Row> {
        self.punches_for_date(date, 1)
    }

    fn punches_for_date(&self, date: &str, is_day_end: i64) -> Vec<Row> {
        let query = format!(
            "SELECT * FROM {} WHERE {} = ? AND {} = ?",
            AttendanceTable::TABLE_NAME,
            AttendanceTable::COLUMN_ATTENDANCE_DATE,
            AttendanceTable::COLUMN_IS_DAY_END
        );

        match self.store.select(&query, &[json!(date), json!(is_day_end)]) {
            Ok(rows) => rows,
            Err(e) => {
                error!(date, is_day_end, "could not read attendance: {}", e);
                Vec::new()
            }
        }
    }

    pub fn insert_uses_log(
        &self,
        user_id: &str,
        activity: &str,
        date_time: &str,
    ) -> Result<usize, StoreError> {
        let query = format!(
            "INSERT INTO {} (UserId, Activity, DateTime, SyncFlag) VALUES (?, ?, ?, 0)",
            UsesLogTable::TABLE_NAME
        );

        self.store
            .run(&query, &[json!(user_id), json!(activity), json!(date_time)])
    }
}
