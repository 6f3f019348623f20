use once_cell::sync::Lazy;
use serde_json::Value;

use crate::local_storage::{
    assets, attendance, collections, customers, distributors, items, orders, reports, resources,
    routes, sales, schemes, settings, users,
};

/// How a snapshot field is normalized before it is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Bound as TEXT; missing and null become the empty string.
    Text,
    /// Bound as INTEGER; missing, null and unparsable values become 0.
    Integer,
    /// Bound as REAL; missing, null and unparsable values become SQL NULL.
    Real,
}

/// One insertable column of a domain table and the snapshot field it is
/// filled from.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub column: &'static str,
    pub source: &'static str,
    pub kind: FieldKind,
}

pub const fn text(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        column: name,
        source: name,
        kind: FieldKind::Text,
    }
}

pub const fn integer(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        column: name,
        source: name,
        kind: FieldKind::Integer,
    }
}

pub const fn real(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        column: name,
        source: name,
        kind: FieldKind::Real,
    }
}

/// A column filled from a differently named snapshot field.
pub const fn text_from(column: &'static str, source: &'static str) -> ColumnSpec {
    ColumnSpec {
        column,
        source,
        kind: FieldKind::Text,
    }
}

/// Turns one snapshot field into a bindable value according to its kind.
/// Only missing, null and unparsable inputs take the kind's default, so a
/// numeric 0 survives as `"0"` instead of collapsing to an empty string.
pub fn normalize_field(kind: FieldKind, value: Option<&Value>) -> Value {
    match kind {
        FieldKind::Text => Value::String(match value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => other.to_string(),
        }),
        FieldKind::Integer => {
            let number = match value {
                Some(Value::Number(n)) => {
                    n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0)
                }
                Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
                Some(Value::Bool(b)) => *b as i64,
                _ => 0,
            };
            Value::from(number)
        }
        FieldKind::Real => {
            let number = match value {
                Some(Value::Number(n)) => n.as_f64(),
                Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            number
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null)
        }
    }
}

/// Every CREATE TABLE statement, in load order. All statements use
/// IF NOT EXISTS, so re-running the whole set on startup is harmless.
pub fn create_table_statements() -> &'static [(&'static str, String)] {
    static STATEMENTS: Lazy<Vec<(&'static str, String)>> = Lazy::new(|| {
        vec![
            statement(settings::SettingsTable::TABLE_NAME, settings::SettingsTable::create_table()),
            statement(settings::SettingTable::TABLE_NAME, settings::SettingTable::create_table()),
            statement(users::MultiEntityUserTable::TABLE_NAME, users::MultiEntityUserTable::create_table()),
            statement(sales::SalesTable::TABLE_NAME, sales::SalesTable::create_table()),
            statement(sales::SalesYtdTable::TABLE_NAME, sales::SalesYtdTable::create_table()),
            statement(collections::PaymentReceiptLogTable::TABLE_NAME, collections::PaymentReceiptLogTable::create_table()),
            statement(collections::CollectionsLogTable::TABLE_NAME, collections::CollectionsLogTable::create_table()),
            statement(collections::CollectionsDetailsLogTable::TABLE_NAME, collections::CollectionsDetailsLogTable::create_table()),
            statement(orders::PendingOrdersTable::TABLE_NAME, orders::PendingOrdersTable::create_table()),
            statement(reports::ReportControlMasterTable::TABLE_NAME, reports::ReportControlMasterTable::create_table()),
            statement(items::UomMasterTable::TABLE_NAME, items::UomMasterTable::create_table()),
            statement(orders::OrderMasterTable::TABLE_NAME, orders::OrderMasterTable::create_table()),
            statement(orders::OrderDetailsTable::TABLE_NAME, orders::OrderDetailsTable::create_table()),
            statement(schemes::DiscountMasterTable::TABLE_NAME, schemes::DiscountMasterTable::create_table()),
            statement(schemes::SchemeMasterTable::TABLE_NAME, schemes::SchemeMasterTable::create_table()),
            statement(items::PriceListClassificationTable::TABLE_NAME, items::PriceListClassificationTable::create_table()),
            statement(routes::PjpMasterTable::TABLE_NAME, routes::PjpMasterTable::create_table()),
            statement(resources::ResourcesTable::TABLE_NAME, resources::ResourcesTable::create_table()),
            statement(routes::OnlineParentAreaTable::TABLE_NAME, routes::OnlineParentAreaTable::create_table()),
            statement(assets::AssetPlacementVerificationTable::TABLE_NAME, assets::AssetPlacementVerificationTable::create_table()),
            statement(assets::AssetTypeClassificationListTable::TABLE_NAME, assets::AssetTypeClassificationListTable::create_table()),
            statement(distributors::DistributorDataStatusTable::TABLE_NAME, distributors::DistributorDataStatusTable::create_table()),
            statement(distributors::DistributorContactsTable::TABLE_NAME, distributors::DistributorContactsTable::create_table()),
            statement(assets::OutletAssetInformationTable::TABLE_NAME, assets::OutletAssetInformationTable::create_table()),
            statement(resources::SurveyMasterTable::TABLE_NAME, resources::SurveyMasterTable::create_table()),
            statement(reports::ReportTable::TABLE_NAME, reports::ReportTable::create_table()),
            statement(customers::PcustomerTable::TABLE_NAME, customers::PcustomerTable::create_table()),
            statement(distributors::PDistributorTable::TABLE_NAME, distributors::PDistributorTable::create_table()),
            statement(items::PItemTable::TABLE_NAME, items::PItemTable::create_table()),
            statement(sales::TargetTable::TABLE_NAME, sales::TargetTable::create_table()),
            statement(routes::MjpMasterTable::TABLE_NAME, routes::MjpMasterTable::create_table()),
            statement(routes::MjpMasterDetailsTable::TABLE_NAME, routes::MjpMasterDetailsTable::create_table()),
            statement(items::SubGroupMasterTable::TABLE_NAME, items::SubGroupMasterTable::create_table()),
            statement(schemes::SchemeDetailsTable::TABLE_NAME, schemes::SchemeDetailsTable::create_table()),
            statement(collections::OutstandingDetailsTable::TABLE_NAME, collections::OutstandingDetailsTable::create_table()),
            statement(collections::ChequeReturnDetailsTable::TABLE_NAME, collections::ChequeReturnDetailsTable::create_table()),
            statement(customers::BankCustomerTable::TABLE_NAME, customers::BankCustomerTable::create_table()),
            statement(attendance::AttendanceTable::TABLE_NAME, attendance::AttendanceTable::create_table()),
            statement(attendance::UsesLogTable::TABLE_NAME, attendance::UsesLogTable::create_table()),
        ]
    });
    &STATEMENTS[..]
}

fn statement(table: &'static str, ddl: String) -> (&'static str, String) {
    (table, ddl)
}
