use std::ptr::NonNull;

use base64::prelude::*;
use rusqlite::serialize::OwnedData;
use rusqlite::types::Type;
use rusqlite::{Connection, DatabaseName, ToSql};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::StoreError;

/// One result row, keyed by column name. INTEGER and REAL columns become
/// JSON numbers, TEXT becomes a string, BLOB is base64-encoded.
pub type Row = Map<String, Value>;

/// In-memory SQLite engine. Hydrated from a serialized image or created
/// empty; its full state can be exported back to an image at any time.
pub struct SqlEngine {
    conn: Connection,
}

impl SqlEngine {
    pub fn create() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            StoreError::Internal(format!("cannot open in-memory database: {}", e))
        })?;
        Ok(SqlEngine { conn })
    }

    pub fn from_image(image: &[u8]) -> Result<Self, StoreError> {
        let mut conn = Connection::open_in_memory().map_err(|e| {
            StoreError::Internal(format!("cannot open in-memory database: {}", e))
        })?;

        let data = owned_data_from_bytes(image)?;
        conn.deserialize(DatabaseName::Main, data, false)
            .map_err(|e| StoreError::Image(format!("cannot load database image: {}", e)))?;

        // Deserialization does not validate the content; probe it so a
        // corrupt image fails here instead of on the first query.
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| StoreError::Image(format!("database image is not usable: {}", e)))?;

        Ok(SqlEngine { conn })
    }

    /// Executes one mutating statement (INSERT/UPDATE/DELETE/DDL) and
    /// returns the number of affected rows.
    pub fn execute(&self, sql: &str, params: &[Value]) -> Result<usize, StoreError> {
        let bound: Vec<Box<dyn ToSql>> = params.iter().map(json_to_param).collect();
        self.conn
            .execute(sql, rusqlite::params_from_iter(bound))
            .map_err(|e| StoreError::Query {
                sql: sql.to_string(),
                params: params.to_vec(),
                source: e,
            })
    }

    /// Executes one SELECT and collects every row into a column-keyed map.
    pub fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, StoreError> {
        let query_error = |e: rusqlite::Error| StoreError::Query {
            sql: sql.to_string(),
            params: params.to_vec(),
            source: e,
        };

        let mut stmt = self.conn.prepare(sql).map_err(query_error)?;

        let column_names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();

        let bound: Vec<Box<dyn ToSql>> = params.iter().map(json_to_param).collect();
        let rows = stmt
            .query_map(rusqlite::params_from_iter(bound), |row| {
                let mut map = Map::new();
                for (i, column_name) in column_names.iter().enumerate() {
                    map.insert(column_name.clone(), value_from_row(row, i)?);
                }
                Ok(map)
            })
            .map_err(query_error)?;

        let mut results = Vec::new();
        for row in rows {
            match row {
                Ok(row) => results.push(row),
                Err(e) => warn!("error reading row: {}", e),
            }
        }
        Ok(results)
    }

    /// Serializes the full database state to an image.
    pub fn export(&self) -> Result<Vec<u8>, StoreError> {
        let data = self
            .conn
            .serialize(DatabaseName::Main)
            .map_err(|e| StoreError::Image(format!("cannot serialize database: {}", e)))?;
        Ok(data.as_ref().to_vec())
    }

    /// Releases the engine. Consuming `self` makes use-after-close
    /// unrepresentable; the store keeps an empty slot afterwards.
    pub fn close(self) {
        if let Err((_conn, e)) = self.conn.close() {
            warn!("error closing database connection: {}", e);
        }
    }
}

fn value_from_row(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Value> {
    let value = match row.get_ref(index)?.data_type() {
        Type::Null => Value::Null,
        Type::Integer => Value::from(row.get::<_, i64>(index)?),
        Type::Real => {
            let val: f64 = row.get(index)?;
            serde_json::Number::from_f64(val)
                .map(Value::Number)
                .unwrap_or(Value::Null)
        }
        Type::Text => Value::String(row.get(index)?),
        Type::Blob => {
            let bytes: Vec<u8> = row.get(index)?;
            Value::String(BASE64_STANDARD.encode(&bytes))
        }
    };
    Ok(value)
}

fn json_to_param(value: &Value) -> Box<dyn ToSql> {
    match value {
        Value::Null => Box::new(Option::<String>::None),
        Value::Bool(b) => Box::new(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Box::new(i)
            } else if let Some(f) = n.as_f64() {
                Box::new(f)
            } else {
                Box::new(Option::<String>::None)
            }
        }
        Value::String(s) => Box::new(s.clone()),
        Value::Array(_) | Value::Object(_) => Box::new(value.to_string()),
    }
}

/// Copies the image into an SQLite-owned buffer for `deserialize`. SQLite
/// frees the buffer when the connection is done with it.
fn owned_data_from_bytes(bytes: &[u8]) -> Result<OwnedData, StoreError> {
    if bytes.is_empty() {
        return Err(StoreError::Image("database image is empty".to_string()));
    }

    let size: i32 = bytes
        .len()
        .try_into()
        .map_err(|_| StoreError::Image("database image too large".to_string()))?;

    // SAFETY: sqlite3_malloc returns a valid buffer of `size` bytes or null;
    // null is handled below, and size == bytes.len().
    let raw = unsafe { rusqlite::ffi::sqlite3_malloc(size) as *mut u8 };
    let Some(ptr) = NonNull::new(raw) else {
        return Err(StoreError::Image(
            "allocation for database image failed".to_string(),
        ));
    };

    // SAFETY: both regions are valid for bytes.len() and do not overlap;
    // OwnedData takes ownership of the sqlite3_malloc'd buffer.
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), ptr.as_ptr(), bytes.len());
        Ok(OwnedData::from_raw_nonnull(ptr, bytes.len()))
    }
}
