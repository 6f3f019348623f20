use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use crate::error::StoreError;
use crate::local_storage::SqlStore;
use crate::local_storage::schema::{ColumnSpec, normalize_field};
use crate::local_storage::{
    assets, collections, customers, distributors, items, orders, reports, resources, routes,
    sales, schemes, settings, users,
};

/// The full payload fetched from the backend after login or sync, keyed by
/// domain name. Values that are not arrays are treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncSnapshot(pub Map<String, Value>);

impl SyncSnapshot {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => SyncSnapshot(map),
            _ => SyncSnapshot::default(),
        }
    }

    fn domain(&self, name: &str) -> Option<&Vec<Value>> {
        self.0.get(name).and_then(Value::as_array)
    }
}

/// How a domain table is refreshed from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStrategy {
    /// DELETE FROM the table, then plain INSERT every record.
    ReplaceAll,
    /// INSERT OR REPLACE keyed on the table's primary key; the table is
    /// never cleared, so local unsynced rows survive.
    Upsert,
    /// Plain INSERT without clearing.
    Append,
}

/// Declarative per-table load policy, consumed generically below.
pub struct DomainSpec {
    /// Key in the snapshot payload.
    pub domain: &'static str,
    /// Target table; differs from `domain` for a few renamed domains.
    pub table: &'static str,
    pub strategy: RefreshStrategy,
    pub columns: &'static [ColumnSpec],
    /// When set, an absent or empty domain clears the table instead of
    /// leaving it untouched (the backend treats absence as deletion).
    pub clear_when_absent: bool,
}

const fn replace_all(
    domain: &'static str,
    table: &'static str,
    columns: &'static [ColumnSpec],
) -> DomainSpec {
    DomainSpec {
        domain,
        table,
        strategy: RefreshStrategy::ReplaceAll,
        columns,
        clear_when_absent: false,
    }
}

/// Every loadable domain in the order the backend payload is applied. The
/// `Settings` key appears twice: once for the wholesale refresh and once
/// for the legacy single key/value mirror.
pub const DOMAIN_SPECS: &[DomainSpec] = &[
    replace_all("Settings", settings::SettingsTable::TABLE_NAME, settings::SettingsTable::COLUMNS),
    DomainSpec {
        domain: "Settings",
        table: settings::SettingTable::TABLE_NAME,
        strategy: RefreshStrategy::Upsert,
        columns: settings::SettingTable::COLUMNS,
        clear_when_absent: false,
    },
    replace_all("RO_MultiEntityUser", users::MultiEntityUserTable::TABLE_NAME, users::MultiEntityUserTable::COLUMNS),
    replace_all("Sales", sales::SalesTable::TABLE_NAME, sales::SalesTable::COLUMNS),
    replace_all("PaymentReceipt_Log", collections::PaymentReceiptLogTable::TABLE_NAME, collections::PaymentReceiptLogTable::COLUMNS),
    replace_all("Collections_Log", collections::CollectionsLogTable::TABLE_NAME, collections::CollectionsLogTable::COLUMNS),
    replace_all("CollectionsDetails_Log", collections::CollectionsDetailsLogTable::TABLE_NAME, collections::CollectionsDetailsLogTable::COLUMNS),
    replace_all("VW_PendingOrders", orders::PendingOrdersTable::TABLE_NAME, orders::PendingOrdersTable::COLUMNS),
    replace_all("SalesYTD", sales::SalesYtdTable::TABLE_NAME, sales::SalesYtdTable::COLUMNS),
    replace_all("ReportControlMaster", reports::ReportControlMasterTable::TABLE_NAME, reports::ReportControlMasterTable::COLUMNS),
    replace_all("UOMMaster", items::UomMasterTable::TABLE_NAME, items::UomMasterTable::COLUMNS),
    DomainSpec {
        domain: "OrderMaster",
        table: orders::OrderMasterTable::TABLE_NAME,
        strategy: RefreshStrategy::Upsert,
        columns: orders::OrderMasterTable::COLUMNS,
        clear_when_absent: false,
    },
    replace_all("DiscountMaster", schemes::DiscountMasterTable::TABLE_NAME, schemes::DiscountMasterTable::COLUMNS),
    replace_all("SchemeMaster", schemes::SchemeMasterTable::TABLE_NAME, schemes::SchemeMasterTable::COLUMNS),
    replace_all("PriceListClassification", items::PriceListClassificationTable::TABLE_NAME, items::PriceListClassificationTable::COLUMNS),
    replace_all("PJPMaster", routes::PjpMasterTable::TABLE_NAME, routes::PjpMasterTable::COLUMNS),
    DomainSpec {
        domain: "OrderDetails",
        table: orders::OrderDetailsTable::TABLE_NAME,
        strategy: RefreshStrategy::Append,
        columns: orders::OrderDetailsTable::COLUMNS,
        clear_when_absent: false,
    },
    replace_all("Resources", resources::ResourcesTable::TABLE_NAME, resources::ResourcesTable::COLUMNS),
    replace_all("OnlineParentArea", routes::OnlineParentAreaTable::TABLE_NAME, routes::OnlineParentAreaTable::COLUMNS),
    replace_all("AssetPlacementVerification", assets::AssetPlacementVerificationTable::TABLE_NAME, assets::AssetPlacementVerificationTable::COLUMNS),
    replace_all("AssetTypeClassificationList", assets::AssetTypeClassificationListTable::TABLE_NAME, assets::AssetTypeClassificationListTable::COLUMNS),
    replace_all("DistributorDataStatus", distributors::DistributorDataStatusTable::TABLE_NAME, distributors::DistributorDataStatusTable::COLUMNS),
    replace_all("DistributorContacts", distributors::DistributorContactsTable::TABLE_NAME, distributors::DistributorContactsTable::COLUMNS),
    replace_all("OutletAssetInformation", assets::OutletAssetInformationTable::TABLE_NAME, assets::OutletAssetInformationTable::COLUMNS),
    replace_all("SurveyMaster", resources::SurveyMasterTable::TABLE_NAME, resources::SurveyMasterTable::COLUMNS),
    replace_all("Report", reports::ReportTable::TABLE_NAME, reports::ReportTable::COLUMNS),
    replace_all("PCustomer", customers::PcustomerTable::TABLE_NAME, customers::PcustomerTable::COLUMNS),
    replace_all("PDistributor", distributors::PDistributorTable::TABLE_NAME, distributors::PDistributorTable::COLUMNS),
    replace_all("PItem", items::PItemTable::TABLE_NAME, items::PItemTable::COLUMNS),
    replace_all("Target", sales::TargetTable::TABLE_NAME, sales::TargetTable::COLUMNS),
    replace_all("MJPMaster", routes::MjpMasterTable::TABLE_NAME, routes::MjpMasterTable::COLUMNS),
    replace_all("MJPMasterDetails", routes::MjpMasterDetailsTable::TABLE_NAME, routes::MjpMasterDetailsTable::COLUMNS),
    replace_all("SubGroupMaster", items::SubGroupMasterTable::TABLE_NAME, items::SubGroupMasterTable::COLUMNS),
    replace_all("SchemeDetails", schemes::SchemeDetailsTable::TABLE_NAME, schemes::SchemeDetailsTable::COLUMNS),
    replace_all("OutstandingDetails", collections::OutstandingDetailsTable::TABLE_NAME, collections::OutstandingDetailsTable::COLUMNS),
    replace_all("ChequeReturnDetails", collections::ChequeReturnDetailsTable::TABLE_NAME, collections::ChequeReturnDetailsTable::COLUMNS),
    DomainSpec {
        domain: "RO_BankCustomer",
        table: customers::BankCustomerTable::TABLE_NAME,
        strategy: RefreshStrategy::ReplaceAll,
        columns: customers::BankCustomerTable::COLUMNS,
        clear_when_absent: true,
    },
];

/// Outcome of loading one domain. Row failures are counted, never thrown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchInsertResult {
    pub success_count: usize,
    pub error_count: usize,
    pub error_details: Vec<String>,
}

#[derive(Debug)]
pub struct DomainReport {
    pub domain: &'static str,
    pub table: &'static str,
    pub result: BatchInsertResult,
}

#[derive(Debug, Default)]
pub struct SyncReport {
    pub domains: Vec<DomainReport>,
}

impl SyncReport {
    pub fn total_success(&self) -> usize {
        self.domains.iter().map(|d| d.result.success_count).sum()
    }

    pub fn total_errors(&self) -> usize {
        self.domains.iter().map(|d| d.result.error_count).sum()
    }
}

/// Applies sync snapshots to the local store, one declarative policy per
/// table.
pub struct DataLoader {
    store: Arc<SqlStore>,
}

impl DataLoader {
    pub fn new(store: Arc<SqlStore>) -> Self {
        DataLoader { store }
    }

    /// Refreshes every domain table present in the snapshot, then persists
    /// the database image once for the whole batch. Saving per row would
    /// export the full image thousands of times; an interrupted load loses
    /// only the unsaved tail and the next full sync repeats it.
    pub fn load_snapshot(&self, snapshot: &SyncSnapshot) -> Result<SyncReport, StoreError> {
        self.store.init()?;
        self.store.create_tables()?;

        let mut report = SyncReport::default();
        for spec in DOMAIN_SPECS {
            match snapshot.domain(spec.domain) {
                Some(rows) if !rows.is_empty() => {
                    let result = self.load_domain(spec, rows);
                    info!(
                        domain = spec.domain,
                        table = spec.table,
                        inserted = result.success_count,
                        failed = result.error_count,
                        "domain loaded"
                    );
                    report.domains.push(DomainReport {
                        domain: spec.domain,
                        table: spec.table,
                        result,
                    });
                }
                _ if spec.clear_when_absent => {
                    match self
                        .store
                        .run_unsaved(&format!("DELETE FROM {}", spec.table), &[])
                    {
                        Ok(_) => debug!(table = spec.table, "domain absent, table cleared"),
                        Err(e) => {
                            error!(table = spec.table, "could not clear absent domain: {}", e)
                        }
                    }
                }
                _ => {}
            }
        }

        self.store.save_database()?;
        info!(
            inserted = report.total_success(),
            failed = report.total_errors(),
            "snapshot load complete"
        );
        Ok(report)
    }

    fn load_domain(&self, spec: &DomainSpec, rows: &[Value]) -> BatchInsertResult {
        if spec.strategy == RefreshStrategy::ReplaceAll {
            if let Err(e) = self
                .store
                .run_unsaved(&format!("DELETE FROM {}", spec.table), &[])
            {
                error!(table = spec.table, "could not clear table before reload: {}", e);
            }
        }

        let sql = insert_statement(spec);
        let mut result = BatchInsertResult::default();

        for (index, row) in rows.iter().enumerate() {
            let Some(record) = row.as_object() else {
                let detail = format!(
                    "invalid {} record at index {}: not an object",
                    spec.table, index
                );
                warn!("{}", detail);
                result.error_count += 1;
                result.error_details.push(detail);
                continue;
            };

            let params: Vec<Value> = spec
                .columns
                .iter()
                .map(|column| normalize_field(column.kind, record.get(column.source)))
                .collect();

            match self.store.run_unsaved(&sql, &params) {
                Ok(_) => result.success_count += 1,
                Err(e) => {
                    let detail = format!(
                        "insert into {} failed for record {}: {}",
                        spec.table,
                        index + 1,
                        e
                    );
                    warn!("{}", detail);
                    result.error_count += 1;
                    result.error_details.push(detail);
                }
            }
        }

        result
    }
}

fn insert_statement(spec: &DomainSpec) -> String {
    let columns: Vec<&str> = spec.columns.iter().map(|c| c.column).collect();
    let placeholders = vec!["?"; columns.len()].join(", ");
    let verb = match spec.strategy {
        RefreshStrategy::Upsert => "INSERT OR REPLACE INTO",
        RefreshStrategy::ReplaceAll | RefreshStrategy::Append => "INSERT INTO",
    };
    format!(
        "{} {} ({}) VALUES ({})",
        verb,
        spec.table,
        columns.join(", "),
        placeholders
    )
}
