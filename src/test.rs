use std::fs;
use std::sync::Arc;

use serde_json::{Value, json};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::local_storage::SqlStore;
use crate::services::sync_service::{DataLoader, SyncSnapshot};

// Helper to build a config pointing at a fresh directory under the system
// temp dir
fn test_config() -> StoreConfig {
    let dir = std::env::temp_dir().join(format!("fieldsales_test_{}", Uuid::new_v4()));
    StoreConfig::new(dir)
}

// Helper to open a store with the schema applied
fn setup_store(config: &StoreConfig) -> Arc<SqlStore> {
    let store = Arc::new(SqlStore::open(config));
    store.create_tables().expect("Failed to create tables");
    store
}

// Helper to clean up a test store directory
fn teardown(config: &StoreConfig) {
    if config.data_dir.exists() {
        fs::remove_dir_all(&config.data_dir).expect("Failed to remove test directory");
    }
}

fn load(store: &Arc<SqlStore>, snapshot: Value) -> crate::services::sync_service::SyncReport {
    DataLoader::new(store.clone())
        .load_snapshot(&SyncSnapshot::from_value(snapshot))
        .expect("Failed to load snapshot")
}

#[cfg(test)]
mod store_tests {
    use super::*;
    use crate::error::StoreError;
    use crate::local_storage::sql_store::SqlStatement;

    #[test]
    fn test_round_trip_survives_reopen() {
        let config = test_config();
        let store = setup_store(&config);

        store
            .run(
                "INSERT OR REPLACE INTO Setting (Name, Value) VALUES (?, ?)",
                &[json!("LastSync"), json!("2025-06-01T08:30:00Z")],
            )
            .expect("Failed to insert setting");
        store
            .run(
                "INSERT INTO Pcustomer (CustomerId, Party, RouteID, Latitude, Longitude, userid)
                 VALUES (?, ?, ?, ?, ?, ?)",
                &[
                    json!("C-1"),
                    json!("Corner Shop"),
                    json!("R-9"),
                    json!(11.5),
                    json!(76.25),
                    json!("u-1"),
                ],
            )
            .expect("Failed to insert customer");
        store.save_database().expect("Failed to save");

        let settings_before = store
            .select("SELECT * FROM Setting ORDER BY Name", &[])
            .expect("Failed to select settings");
        let customers_before = store
            .select("SELECT * FROM Pcustomer ORDER BY CustomerId", &[])
            .expect("Failed to select customers");
        store.close();

        let reopened = SqlStore::open(&config);
        let settings_after = reopened
            .select("SELECT * FROM Setting ORDER BY Name", &[])
            .expect("Failed to select settings after reopen");
        let customers_after = reopened
            .select("SELECT * FROM Pcustomer ORDER BY CustomerId", &[])
            .expect("Failed to select customers after reopen");

        assert_eq!(settings_before, settings_after);
        assert_eq!(customers_before, customers_after);
        assert_eq!(customers_after.len(), 1);
        assert_eq!(
            customers_after[0].get("Latitude").and_then(Value::as_f64),
            Some(11.5)
        );

        teardown(&config);
    }

    #[test]
    fn test_transaction_rolls_back_completely() {
        let config = test_config();
        let store = setup_store(&config);

        let statements: Vec<SqlStatement> = vec![
            SqlStatement::new(
                "INSERT INTO Settings (Key, Value) VALUES (?, ?)",
                vec![json!("a"), json!("1")],
            ),
            SqlStatement::new(
                "INSERT INTO Settings (Key, Value) VALUES (?, ?)",
                vec![json!("b"), json!("2")],
            ),
            SqlStatement::new("INSERT INTO NoSuchTable (x) VALUES (?)", vec![json!("boom")]),
            SqlStatement::new(
                "INSERT INTO Settings (Key, Value) VALUES (?, ?)",
                vec![json!("c"), json!("3")],
            ),
            SqlStatement::new(
                "INSERT INTO Settings (Key, Value) VALUES (?, ?)",
                vec![json!("d"), json!("4")],
            ),
        ];

        let result = store.transaction(&statements);
        assert!(matches!(result, Err(StoreError::Transaction { .. })));

        assert_eq!(store.row_count("Settings").expect("Failed to count"), 0);

        teardown(&config);
    }

    #[test]
    fn test_transaction_commits_whole_batch() {
        let config = test_config();
        let store = setup_store(&config);

        let statements: Vec<SqlStatement> = (0..3)
            .map(|i| {
                SqlStatement::new(
                    "INSERT INTO Settings (Key, Value) VALUES (?, ?)",
                    vec![json!(format!("key-{}", i)), json!(format!("{}", i))],
                )
            })
            .collect();

        store.transaction(&statements).expect("Failed to commit");
        assert_eq!(store.row_count("Settings").expect("Failed to count"), 3);

        teardown(&config);
    }

    #[test]
    fn test_schema_setup_is_repeatable() {
        let config = test_config();
        let store = setup_store(&config);

        let tables_first = store
            .select(
                "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name",
                &[],
            )
            .expect("Failed to list tables");

        store.create_tables().expect("Failed to re-run schema setup");

        let tables_second = store
            .select(
                "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name",
                &[],
            )
            .expect("Failed to list tables again");

        assert_eq!(tables_first, tables_second);
        assert!(store.table_exists("OrderMaster").expect("Failed to check"));
        assert!(store.table_exists("Attendance").expect("Failed to check"));

        teardown(&config);
    }

    #[test]
    fn test_reset_clears_everything() {
        let config = test_config();
        let store = setup_store(&config);

        for i in 0..500 {
            store
                .run_unsaved(
                    "INSERT INTO PItem (ItemId, Item, userid) VALUES (?, ?, ?)",
                    &[json!(format!("I-{}", i)), json!("Item"), json!("u-1")],
                )
                .expect("Failed to insert item");
        }
        store.save_database().expect("Failed to save");
        assert_eq!(store.row_count("PItem").expect("Failed to count"), 500);

        store.reset().expect("Failed to reset");

        assert_eq!(store.row_count("PItem").expect("Failed to count"), 0);
        assert!(store.table_exists("PItem").expect("Failed to check"));

        // The wipe also reaches the stored image.
        store.close();
        let reopened = SqlStore::open(&config);
        assert_eq!(reopened.row_count("PItem").expect("Failed to count"), 0);

        teardown(&config);
    }

    #[test]
    fn test_maintenance_helpers() {
        let config = test_config();
        let store = setup_store(&config);

        assert!(store.table_exists("Report").expect("Failed to check"));
        assert!(!store.table_exists("Missing").expect("Failed to check"));

        store
            .run(
                "INSERT INTO Report (MenuKey, Classification) VALUES (?, ?)",
                &[json!("Report1"), json!("Brand")],
            )
            .expect("Failed to insert report row");
        assert_eq!(store.row_count("Report").expect("Failed to count"), 1);

        store.clear_table("Report").expect("Failed to clear");
        assert_eq!(store.row_count("Report").expect("Failed to count"), 0);

        store.drop_table("Report").expect("Failed to drop");
        assert!(!store.table_exists("Report").expect("Failed to check"));

        assert!(store.database_size().expect("Failed to size") > 0);

        teardown(&config);
    }

    #[test]
    fn test_in_memory_mode_when_storage_unavailable() {
        // Point the data dir at a file so the directory cannot be created.
        let blocker = std::env::temp_dir().join(format!("fieldsales_blocker_{}", Uuid::new_v4()));
        fs::write(&blocker, b"not a directory").expect("Failed to write blocker");

        let config = StoreConfig::new(&blocker);
        let store = SqlStore::open(&config);

        store.create_tables().expect("Failed to create tables");
        store
            .run(
                "INSERT INTO Settings (Key, Value) VALUES (?, ?)",
                &[json!("k"), json!("v")],
            )
            .expect("Failed to insert");
        assert_eq!(store.row_count("Settings").expect("Failed to count"), 1);
        store.save_database().expect("save should be a no-op");

        // Nothing was persisted, so a second store starts empty.
        store.close();
        let second = SqlStore::open(&config);
        second.create_tables().expect("Failed to create tables");
        assert_eq!(second.row_count("Settings").expect("Failed to count"), 0);

        fs::remove_file(&blocker).expect("Failed to remove blocker");
    }

    #[test]
    fn test_version_gate_requests_full_resync_once() {
        let config = test_config();

        let first = SqlStore::open(&config);
        assert!(first.full_resync_required());
        drop(first);

        let second = SqlStore::open(&config);
        assert!(!second.full_resync_required());

        teardown(&config);
    }
}

#[cfg(test)]
mod loader_tests {
    use super::*;
    use crate::local_storage::orders::{OrderCheckIn, OrderLocalStorage};
    use crate::local_storage::schema::{FieldKind, normalize_field};

    #[test]
    fn test_settings_snapshot_reaches_legacy_table() {
        let config = test_config();
        let store = setup_store(&config);

        load(
            &store,
            json!({"Settings": [{"Key": "AutoSync", "Value": "1"}]}),
        );

        let rows = store
            .select(
                "SELECT Value FROM Setting WHERE Name = ?",
                &[json!("AutoSync")],
            )
            .expect("Failed to select");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Value").and_then(Value::as_str), Some("1"));

        // The multi-row table is refreshed as well.
        assert_eq!(store.row_count("Settings").expect("Failed to count"), 1);

        teardown(&config);
    }

    #[test]
    fn test_reloading_same_snapshot_is_idempotent() {
        let config = test_config();
        let store = setup_store(&config);

        let snapshot = json!({
            "Settings": [{"Key": "AutoSync", "Value": "1"}],
            "PCustomer": [
                {"CustomerId": "C-1", "Party": "One", "RouteID": "R-1", "userid": "u"},
                {"CustomerId": "C-2", "Party": "Two", "RouteID": "R-1", "userid": "u"},
            ],
            "PItem": [
                {"ItemId": "I-1", "Item": "Cola", "BRANDID": "B-1", "BRAND": "Cola", "userid": "u"},
            ],
        });

        load(&store, snapshot.clone());
        let customers_once = store
            .select("SELECT * FROM Pcustomer ORDER BY CustomerId", &[])
            .expect("Failed to select");
        let items_once = store
            .select("SELECT * FROM PItem ORDER BY ItemId", &[])
            .expect("Failed to select");

        load(&store, snapshot);
        let customers_twice = store
            .select("SELECT * FROM Pcustomer ORDER BY CustomerId", &[])
            .expect("Failed to select");
        let items_twice = store
            .select("SELECT * FROM PItem ORDER BY ItemId", &[])
            .expect("Failed to select");

        assert_eq!(customers_once, customers_twice);
        assert_eq!(items_once, items_twice);
        assert_eq!(customers_twice.len(), 2);

        teardown(&config);
    }

    #[test]
    fn test_row_failures_do_not_abort_the_batch() {
        let config = test_config();
        let store = setup_store(&config);

        // Record 5 reuses the previous ID, violating the primary key.
        let surveys: Vec<Value> = (1..=10)
            .map(|i| {
                let id = if i == 5 { 4 } else { i };
                json!({"ID": format!("S-{}", id), "SurveyName": format!("Survey {}", i)})
            })
            .collect();

        let report = load(&store, json!({"SurveyMaster": surveys}));

        let survey_report = report
            .domains
            .iter()
            .find(|d| d.table == "SurveyMaster")
            .expect("SurveyMaster missing from report");
        assert_eq!(survey_report.result.success_count, 9);
        assert_eq!(survey_report.result.error_count, 1);
        assert_eq!(survey_report.result.error_details.len(), 1);

        // Records after the failing one were still attempted.
        let rows = store
            .select("SELECT ID FROM SurveyMaster ORDER BY ID", &[])
            .expect("Failed to select");
        assert_eq!(rows.len(), 9);
        assert!(
            rows.iter()
                .any(|r| r.get("ID").and_then(Value::as_str) == Some("S-10"))
        );

        teardown(&config);
    }

    #[test]
    fn test_order_master_survives_snapshot_without_orders() {
        let config = test_config();
        let store = setup_store(&config);
        let orders = OrderLocalStorage::new(store.clone());

        for id in ["local-1", "local-2"] {
            orders
                .insert_shop_check_in(&OrderCheckIn {
                    id: id.to_string(),
                    entity_id: "C-1".to_string(),
                    collection_type: "10".to_string(),
                    sync_flag: "0".to_string(),
                    from_date: "2025-06-01".to_string(),
                    user_id: "u-1".to_string(),
                    userid: "u-1".to_string(),
                    ..OrderCheckIn::default()
                })
                .expect("Failed to insert check-in");
        }

        load(&store, json!({"Settings": [{"Key": "AutoSync", "Value": "0"}]}));

        assert_eq!(store.row_count("OrderMaster").expect("Failed to count"), 2);

        teardown(&config);
    }

    #[test]
    fn test_order_master_upserts_by_id() {
        let config = test_config();
        let store = setup_store(&config);

        load(
            &store,
            json!({"OrderMaster": [
                {"id": "o-1", "entity_id": "C-1", "sync_flag": "1", "total_amount": "10"},
            ]}),
        );
        load(
            &store,
            json!({"OrderMaster": [
                {"id": "o-1", "entity_id": "C-1", "sync_flag": "1", "total_amount": "25"},
            ]}),
        );

        let rows = store
            .select("SELECT total_amount FROM OrderMaster WHERE id = ?", &[json!("o-1")])
            .expect("Failed to select");
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].get("total_amount").and_then(Value::as_str),
            Some("25")
        );

        teardown(&config);
    }

    #[test]
    fn test_order_details_are_appended() {
        let config = test_config();
        let store = setup_store(&config);

        let snapshot = json!({"OrderDetails": [
            {"order_id": "o-1", "item_id": "I-1", "quantity_one": "2"},
        ]});
        load(&store, snapshot.clone());
        load(&store, snapshot);

        assert_eq!(store.row_count("OrderDetails").expect("Failed to count"), 2);

        teardown(&config);
    }

    #[test]
    fn test_bank_customers_cleared_when_domain_absent() {
        let config = test_config();
        let store = setup_store(&config);

        load(
            &store,
            json!({"RO_BankCustomer": [
                {"PartyCode": "P-1", "BankName": "First Bank", "userid": "u"},
            ]}),
        );
        assert_eq!(
            store.row_count("RO_BankCustomer").expect("Failed to count"),
            1
        );

        // Absent key means the upstream deleted everything.
        load(&store, json!({"Settings": [{"Key": "AutoSync", "Value": "0"}]}));
        assert_eq!(
            store.row_count("RO_BankCustomer").expect("Failed to count"),
            0
        );

        teardown(&config);
    }

    #[test]
    fn test_non_object_records_are_counted_as_failures() {
        let config = test_config();
        let store = setup_store(&config);

        let report = load(
            &store,
            json!({"PJPMaster": [
                {"RouteID": "R-1", "RouteName": "Old Town", "userid": "u"},
                "garbage",
            ]}),
        );

        let routes_report = report
            .domains
            .iter()
            .find(|d| d.table == "PJPMaster")
            .expect("PJPMaster missing from report");
        assert_eq!(routes_report.result.success_count, 1);
        assert_eq!(routes_report.result.error_count, 1);

        teardown(&config);
    }

    #[test]
    fn test_snapshot_load_persists_once_at_the_end() {
        let config = test_config();
        let store = setup_store(&config);

        load(
            &store,
            json!({"PCustomer": [
                {"CustomerId": "C-1", "Party": "One", "userid": "u"},
            ]}),
        );

        // A second store sees the loaded data, proving the final save ran.
        store.close();
        let reopened = SqlStore::open(&config);
        assert_eq!(reopened.row_count("Pcustomer").expect("Failed to count"), 1);

        teardown(&config);
    }

    #[test]
    fn test_field_normalization() {
        assert_eq!(
            normalize_field(FieldKind::Text, None),
            Value::String(String::new())
        );
        assert_eq!(
            normalize_field(FieldKind::Text, Some(&Value::Null)),
            Value::String(String::new())
        );
        assert_eq!(
            normalize_field(FieldKind::Text, Some(&json!(0))),
            Value::String("0".to_string())
        );
        assert_eq!(
            normalize_field(FieldKind::Text, Some(&json!(true))),
            Value::String("true".to_string())
        );

        assert_eq!(normalize_field(FieldKind::Integer, Some(&json!("42"))), json!(42));
        assert_eq!(normalize_field(FieldKind::Integer, Some(&json!("x"))), json!(0));
        assert_eq!(normalize_field(FieldKind::Integer, None), json!(0));

        assert_eq!(normalize_field(FieldKind::Real, None), Value::Null);
        assert_eq!(
            normalize_field(FieldKind::Real, Some(&json!("18.5"))),
            json!(18.5)
        );
        assert_eq!(normalize_field(FieldKind::Real, Some(&json!(""))), Value::Null);
    }
}

#[cfg(test)]
mod domain_query_tests {
    use super::*;
    use crate::local_storage::attendance::{AttendanceLocalStorage, NewAttendance};
    use crate::local_storage::customers::CustomerLocalStorage;
    use crate::local_storage::distributors::DistributorLocalStorage;
    use crate::local_storage::items::ItemLocalStorage;
    use crate::local_storage::orders::order_local_storage::{
        COLLECTION_TYPE_DAY_END, COLLECTION_TYPE_DAY_START,
    };
    use crate::local_storage::orders::{OrderCheckIn, OrderLocalStorage};
    use crate::local_storage::reports::ReportLocalStorage;
    use crate::local_storage::routes::RouteLocalStorage;
    use crate::local_storage::settings::SettingsLocalStorage;
    use crate::local_storage::users::UserLocalStorage;

    fn punch(date: &str, is_day_end: i64) -> NewAttendance {
        NewAttendance {
            user_id: "u-1".to_string(),
            attendance_type: if is_day_end == 0 { "IN" } else { "OUT" }.to_string(),
            attendance_date: date.to_string(),
            attendance_time: "08:30:00".to_string(),
            latitude: Some(18.52),
            longitude: Some(73.85),
            remark: String::new(),
            is_day_end,
        }
    }

    #[test]
    fn test_day_start_and_day_end_attendance_are_independent() {
        let config = test_config();
        let store = setup_store(&config);
        let attendance = AttendanceLocalStorage::new(store.clone());

        attendance
            .insert_attendance(&punch("2025-06-02", 0))
            .expect("Failed to insert day-start punch");
        assert_eq!(attendance.attendance_for_date("2025-06-02").len(), 1);
        assert_eq!(attendance.day_end_attendance_for_date("2025-06-02").len(), 0);

        attendance
            .insert_attendance(&punch("2025-06-02", 1))
            .expect("Failed to insert day-end punch");
        assert_eq!(attendance.day_end_attendance_for_date("2025-06-02").len(), 1);
        assert_eq!(attendance.attendance_for_date("2025-06-02").len(), 1);

        teardown(&config);
    }

    #[test]
    fn test_uses_log_insert() {
        let config = test_config();
        let store = setup_store(&config);
        let attendance = AttendanceLocalStorage::new(store.clone());

        attendance
            .insert_uses_log("u-1", "Login", "2025-06-02T08:00:00Z")
            .expect("Failed to insert uses log");
        assert_eq!(store.row_count("UsesLog").expect("Failed to count"), 1);

        teardown(&config);
    }

    #[test]
    fn test_setting_reads_and_writes() {
        let config = test_config();
        let store = setup_store(&config);
        let settings = SettingsLocalStorage::new(store.clone());

        assert_eq!(settings.auto_sync_flag(), "0");
        assert_eq!(settings.last_sync(), None);

        settings
            .set_setting_value("AutoSync", "1")
            .expect("Failed to write setting");
        settings
            .set_setting_value("LastSync", "2025-06-02T10:00:00Z")
            .expect("Failed to write setting");

        assert_eq!(settings.auto_sync_flag(), "1");
        assert_eq!(
            settings.last_sync().as_deref(),
            Some("2025-06-02T10:00:00Z")
        );
        assert_eq!(settings.attendance_settings(), None);

        teardown(&config);
    }

    #[test]
    fn test_check_ins_by_collection_type() {
        let config = test_config();
        let store = setup_store(&config);
        let orders = OrderLocalStorage::new(store.clone());

        for (id, code) in [("in-1", COLLECTION_TYPE_DAY_START), ("out-1", COLLECTION_TYPE_DAY_END)] {
            orders
                .insert_shop_check_in(&OrderCheckIn {
                    id: id.to_string(),
                    collection_type: code.to_string(),
                    from_date: "2025-06-02".to_string(),
                    sync_flag: "0".to_string(),
                    user_id: "u-1".to_string(),
                    userid: "u-1".to_string(),
                    ..OrderCheckIn::default()
                })
                .expect("Failed to insert check-in");
        }

        let day_start = orders.check_ins_for_date(COLLECTION_TYPE_DAY_START, "2025-06-02");
        assert_eq!(day_start, vec!["in-1".to_string()]);

        let day_end = orders.check_ins_for_date(COLLECTION_TYPE_DAY_END, "2025-06-02");
        assert_eq!(day_end, vec!["out-1".to_string()]);

        assert_eq!(orders.unsynced_order_count(), 2);
        assert_eq!(orders.distinct_activity_entities().len(), 1);

        teardown(&config);
    }

    #[test]
    fn test_order_join_queries() {
        let config = test_config();
        let store = setup_store(&config);
        let orders = OrderLocalStorage::new(store.clone());

        load(
            &store,
            json!({
                "PItem": [{"ItemId": "I-1", "Item": "Cola 300ml", "userid": "u-1"}],
                "OrderDetails": [
                    {"order_id": "o-1", "item_id": "I-1", "quantity_one": "3", "Amount": "120", "userid": "u-1"},
                ],
            }),
        );
        orders
            .insert_shop_check_in(&OrderCheckIn {
                id: "o-1".to_string(),
                entity_id: "C-1".to_string(),
                from_date: "2025-06-02".to_string(),
                collection_type: "1".to_string(),
                sync_flag: "0".to_string(),
                user_id: "u-1".to_string(),
                userid: "u-1".to_string(),
                ..OrderCheckIn::default()
            })
            .expect("Failed to insert order header");

        let booked = orders.order_booked_details("C-1", "u-1");
        assert_eq!(booked.len(), 1);
        assert_eq!(
            booked[0].get("Item").and_then(Value::as_str),
            Some("Cola 300ml")
        );

        let on_date = orders.orders_for_entity_on_date("C-1", "2025-06-02", "u-1");
        assert_eq!(on_date.len(), 1);

        let activity = orders.activity_for_dates(&["2025-06-02", "2025-06-01"]);
        assert_eq!(activity.len(), 2);
        assert_eq!(activity[0].len(), 1);
        assert!(activity[1].is_empty());

        teardown(&config);
    }

    #[test]
    fn test_customer_lookups() {
        let config = test_config();
        let store = setup_store(&config);
        let customers = CustomerLocalStorage::new(store.clone());

        load(
            &store,
            json!({"PCustomer": [
                {"CustomerId": "C-1", "Party": "Evergreen Mart", "RouteID": "R-1",
                 "Latitude": 18.52, "Longitude": 73.85, "userid": "u-1"},
                {"CustomerId": "C-2", "Party": "Lakeside Stores", "RouteID": "R-2", "userid": "u-1"},
            ]}),
        );

        assert_eq!(customers.shops_by_route("R-1").len(), 1);
        assert_eq!(customers.shops_by_route("R-3").len(), 0);

        let details = customers.outlet_details("C-2").expect("outlet missing");
        assert_eq!(
            details.get("Party").and_then(Value::as_str),
            Some("Lakeside Stores")
        );

        assert_eq!(customers.outlet_parties().len(), 2);
        assert_eq!(customers.customer_for_user("C-1", "u-1").len(), 1);

        // Only outlets with coordinates are pushed back to the server.
        let locations = customers.shop_locations_for_sync();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].customer_id, "C-1");

        teardown(&config);
    }

    #[test]
    fn test_item_lookups() {
        let config = test_config();
        let store = setup_store(&config);
        let items = ItemLocalStorage::new(store.clone());

        load(
            &store,
            json!({"PItem": [
                {"ItemId": "I-1", "Item": "Cola 300ml", "BRANDID": "B-1", "BRAND": "Cola",
                 "ITEMGROUPID": "G-1", "ITEMGROUP": "Beverages", "ITEMSIZEID": "Z-1",
                 "ITEMSIZE": "300ml", "userid": "u-1"},
                {"ItemId": "I-2", "Item": "Soda 500ml", "BRANDID": "B-2", "BRAND": "Soda",
                 "ITEMGROUPID": "G-1", "ITEMGROUP": "Beverages", "userid": "u-1"},
            ]}),
        );

        assert_eq!(items.sku_list().len(), 2);
        assert_eq!(items.brands().len(), 2);
        assert_eq!(items.brands_for_user("u-1").len(), 2);
        assert_eq!(items.categories().len(), 1);
        assert_eq!(items.skus_for_user("u-1").len(), 2);
        assert_eq!(items.sizes_for_user("u-1").len(), 2);

        let ids = items.item_ids_for_brands(&["B-1".to_string()]);
        assert_eq!(ids, vec!["I-1".to_string()]);
        assert!(items.item_ids_for_brands(&[]).is_empty());

        // Dynamic classification column, allowlisted.
        let by_brand = items.classification_values("BRAND", "u-1");
        assert_eq!(by_brand.len(), 2);
        assert!(items.classification_values("BRAND; DROP TABLE PItem", "u-1").is_empty());

        teardown(&config);
    }

    #[test]
    fn test_report_controls() {
        let config = test_config();
        let store = setup_store(&config);
        let reports = ReportLocalStorage::new(store.clone());

        load(
            &store,
            json!({
                "Report": [
                    {"MenuKey": "Report1", "Classification": "Brand", "IsActive": "1"},
                    {"MenuKey": "Report2", "Classification": "Target", "IsActive": "1"},
                ],
                "ReportControlMaster": [
                    {"ControlName": "Brand filter", "ControlId": "BRAND", "ReferenceColumn": "R1Control"},
                ],
            }),
        );

        assert_eq!(reports.classifications_for_menu("Report1").len(), 1);
        assert_eq!(reports.classifications_for_menu("Report9").len(), 0);
        assert_eq!(reports.control_id("R1Control").as_deref(), Some("BRAND"));
        assert_eq!(reports.control_id("missing"), None);

        teardown(&config);
    }

    #[test]
    fn test_distributor_and_user_lookups() {
        let config = test_config();
        let store = setup_store(&config);
        let distributors = DistributorLocalStorage::new(store.clone());
        let users = UserLocalStorage::new(store.clone());

        load(
            &store,
            json!({
                "PDistributor": [
                    {"DistributorID": "D-2", "Distributor": "Beta Traders", "AREA": "South", "userid": "u-1"},
                    {"DistributorID": "D-1", "Distributor": "Alpha Agencies", "AREA": "North", "userid": "u-1"},
                ],
                "RO_MultiEntityUser": [
                    {"UserId": "u-1", "DistributorId": "D-1", "DivisionId": "V-1", "Distributor": "Alpha Agencies"},
                ],
            }),
        );

        let for_user = distributors.distributors_for_user("u-1");
        assert_eq!(for_user.len(), 2);
        assert_eq!(for_user[0].distributor, "Alpha Agencies");

        assert_eq!(distributors.all_distributors().len(), 2);

        let as_party = distributors.distributor_for_user("D-1", "u-1");
        assert_eq!(
            as_party[0].get("Party").and_then(Value::as_str),
            Some("Alpha Agencies")
        );

        assert_eq!(users.all_entities().len(), 1);
        assert_eq!(users.user_ids(), vec!["u-1".to_string()]);
        let first = users.first_entity_for_user("u-1").expect("user missing");
        assert_eq!(first.distributor_id, "D-1");
        assert!(users.first_entity_for_user("u-9").is_none());

        teardown(&config);
    }

    #[test]
    fn test_route_lookups() {
        let config = test_config();
        let store = setup_store(&config);
        let routes = RouteLocalStorage::new(store.clone());

        load(
            &store,
            json!({
                "PJPMaster": [
                    {"RouteID": "R-1", "RouteName": "Old Town", "userid": "u-1"},
                ],
                "OnlineParentArea": [
                    {"AreaId": 2, "Area": "West"},
                    {"AreaId": 1, "Area": "East"},
                ],
            }),
        );

        let routes_list = routes.routes();
        assert_eq!(routes_list.len(), 1);
        assert_eq!(routes_list[0].route_name, "Old Town");

        let areas = routes.parent_areas();
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].area, "East");
        assert_eq!(areas[0].area_id, 1);

        teardown(&config);
    }
}

#[cfg(test)]
mod engine_tests {
    use super::*;
    use crate::local_storage::engine::SqlEngine;
    use crate::local_storage::image_store::ImageStore;

    #[test]
    fn test_engine_image_round_trip() {
        let engine = SqlEngine::create().expect("Failed to create engine");
        engine
            .execute("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT)", &[])
            .expect("Failed to create table");
        engine
            .execute("INSERT INTO t (id, name) VALUES (?, ?)", &[json!(1), json!("one")])
            .expect("Failed to insert");

        let image = engine.export().expect("Failed to export");
        assert!(!image.is_empty());
        engine.close();

        let hydrated = SqlEngine::from_image(&image).expect("Failed to hydrate");
        let rows = hydrated
            .query("SELECT id, name FROM t", &[])
            .expect("Failed to query");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("id").and_then(Value::as_i64), Some(1));
        assert_eq!(rows[0].get("name").and_then(Value::as_str), Some("one"));
    }

    #[test]
    fn test_engine_rejects_garbage_image() {
        assert!(SqlEngine::from_image(&[]).is_err());
        assert!(SqlEngine::from_image(b"definitely not a database").is_err());
    }

    #[test]
    fn test_blob_columns_are_base64_encoded() {
        let engine = SqlEngine::create().expect("Failed to create engine");
        engine
            .execute("CREATE TABLE b (data BLOB)", &[])
            .expect("Failed to create table");
        engine
            .execute("INSERT INTO b (data) VALUES (X'0102')", &[])
            .expect("Failed to insert blob");

        let rows = engine.query("SELECT data FROM b", &[]).expect("Failed to query");
        assert_eq!(rows[0].get("data").and_then(Value::as_str), Some("AQI="));
    }

    #[test]
    fn test_image_store_round_trip() {
        let config = test_config();
        let store = ImageStore::open(&config.data_dir, &config.database_name)
            .expect("Failed to open image store");

        assert_eq!(store.load().expect("Failed to load"), None);

        store.save(b"image-bytes").expect("Failed to save");
        assert_eq!(
            store.load().expect("Failed to load"),
            Some(b"image-bytes".to_vec())
        );

        // Saving again replaces the image wholesale.
        store.save(b"second").expect("Failed to save");
        assert_eq!(store.load().expect("Failed to load"), Some(b"second".to_vec()));

        store.clear().expect("Failed to clear");
        assert_eq!(store.load().expect("Failed to load"), None);

        teardown(&config);
    }

    #[test]
    fn test_schema_version_sidecar() {
        let config = test_config();
        let store = ImageStore::open(&config.data_dir, &config.database_name)
            .expect("Failed to open image store");

        assert_eq!(store.load_schema_version(), None);
        store.save_schema_version(7).expect("Failed to save version");
        assert_eq!(store.load_schema_version(), Some(7));

        // Clearing the image keeps the version counter.
        store.save(b"image").expect("Failed to save");
        store.clear().expect("Failed to clear");
        assert_eq!(store.load_schema_version(), Some(7));

        teardown(&config);
    }
}
