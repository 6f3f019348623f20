use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Query failed: {sql}")]
    Query {
        sql: String,
        params: Vec<Value>,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Transaction failed: {sql}")]
    Transaction {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Schema apply failed for table {table}")]
    SchemaApply {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database image error: {0}")]
    Image(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
