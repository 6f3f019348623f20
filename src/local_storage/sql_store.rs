use std::sync::Mutex;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::{DATABASE_VERSION, StoreConfig};
use crate::error::StoreError;
use crate::local_storage::engine::{Row, SqlEngine};
use crate::local_storage::image_store::ImageStore;
use crate::local_storage::schema;

/// One statement of a transaction batch.
#[derive(Debug, Clone)]
pub struct SqlStatement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl SqlStatement {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        SqlStatement {
            sql: sql.into(),
            params,
        }
    }
}

/// The one façade every caller goes through: owns the single in-memory
/// engine, hydrates it from the saved image, and writes the image back
/// after every mutation. All access is serialized behind one mutex, so a
/// save always exports the engine state current at that moment.
pub struct SqlStore {
    image: Option<ImageStore>,
    engine: Mutex<Option<SqlEngine>>,
    full_resync_required: bool,
}

impl SqlStore {
    /// Opens the store. When the backing directory cannot be used the store
    /// still comes up serving from memory only; a warning is logged once
    /// and nothing survives the process.
    pub fn open(config: &StoreConfig) -> Self {
        let image = match ImageStore::open(&config.data_dir, &config.database_name) {
            Ok(store) => Some(store),
            Err(e) => {
                warn!("persistent storage unavailable, running in-memory only: {}", e);
                None
            }
        };

        let mut full_resync_required = false;
        if let Some(store) = &image {
            let stored = store.load_schema_version().unwrap_or(0);
            if stored < DATABASE_VERSION {
                info!(
                    stored,
                    current = DATABASE_VERSION,
                    "database version upgrade, full sync required"
                );
                full_resync_required = true;
                if let Err(e) = store.save_schema_version(DATABASE_VERSION) {
                    warn!("could not record database version: {}", e);
                }
            }
        }

        SqlStore {
            image,
            engine: Mutex::new(None),
            full_resync_required,
        }
    }

    /// True right after a version bump; the caller reacts by running a full
    /// sync against the server.
    pub fn full_resync_required(&self) -> bool {
        self.full_resync_required
    }

    /// Forces hydration of the engine. Idempotent; every operation also
    /// hydrates on demand.
    pub fn init(&self) -> Result<(), StoreError> {
        self.with_engine(|_| Ok(()))
    }

    /// Applies every schema statement, tolerating per-table failures so one
    /// bad definition cannot block the rest, then persists once.
    pub fn create_tables(&self) -> Result<(), StoreError> {
        self.with_engine(|engine| {
            for (table, ddl) in schema::create_table_statements() {
                match engine.execute(ddl, &[]) {
                    Ok(_) => {}
                    Err(StoreError::Query { source, .. }) => {
                        let err = StoreError::SchemaApply {
                            table: (*table).to_string(),
                            source,
                        };
                        error!("{}", err);
                    }
                    Err(e) => error!(table = *table, "schema apply failed: {}", e),
                }
            }
            self.persist(engine);
            Ok(())
        })
    }

    /// Executes one mutating statement and persists the new image. A failed
    /// persist keeps the mutation in memory and is only logged.
    pub fn run(&self, sql: &str, params: &[Value]) -> Result<usize, StoreError> {
        self.with_engine(|engine| {
            let changes = engine.execute(sql, params)?;
            self.persist(engine);
            Ok(changes)
        })
    }

    /// Executes one read-only statement. Never persists.
    pub fn select(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, StoreError> {
        self.with_engine(|engine| engine.query(sql, params))
    }

    /// Runs the batch inside BEGIN/COMMIT. Any failure rolls everything
    /// back and surfaces as a transaction error.
    pub fn transaction(&self, statements: &[SqlStatement]) -> Result<(), StoreError> {
        self.with_engine(|engine| {
            engine
                .execute("BEGIN TRANSACTION", &[])
                .map_err(as_transaction_error)?;

            for statement in statements {
                if let Err(e) = engine.execute(&statement.sql, &statement.params) {
                    if let Err(rollback_err) = engine.execute("ROLLBACK", &[]) {
                        error!("rollback failed: {}", rollback_err);
                    }
                    return Err(as_transaction_error(e));
                }
            }

            engine
                .execute("COMMIT", &[])
                .map_err(as_transaction_error)?;
            self.persist(engine);
            Ok(())
        })
    }

    /// Exports the live engine and writes the image. Safe to call
    /// redundantly; a no-op without persistent storage.
    pub fn save_database(&self) -> Result<(), StoreError> {
        self.with_engine(|engine| {
            let Some(store) = &self.image else {
                debug!("no persistent storage, skipping save");
                return Ok(());
            };
            let bytes = engine.export()?;
            store.save(&bytes)
        })
    }

    pub fn clear_table(&self, table: &str) -> Result<usize, StoreError> {
        self.run(&format!("DELETE FROM {}", table), &[])
    }

    pub fn drop_table(&self, table: &str) -> Result<usize, StoreError> {
        self.run(&format!("DROP TABLE IF EXISTS {}", table), &[])
    }

    pub fn table_exists(&self, table: &str) -> Result<bool, StoreError> {
        let rows = self.select(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?",
            &[Value::String(table.to_string())],
        )?;
        Ok(!rows.is_empty())
    }

    pub fn row_count(&self, table: &str) -> Result<i64, StoreError> {
        let rows = self.select(&format!("SELECT COUNT(*) AS count FROM {}", table), &[])?;
        Ok(rows
            .first()
            .and_then(|row| row.get("count"))
            .and_then(Value::as_i64)
            .unwrap_or(0))
    }

    /// Size of the exported image in bytes.
    pub fn database_size(&self) -> Result<usize, StoreError> {
        self.with_engine(|engine| Ok(engine.export()?.len()))
    }

    /// Releases the engine. The next operation rehydrates from the last
    /// saved image.
    pub fn close(&self) {
        if let Ok(mut slot) = self.engine.lock() {
            if let Some(engine) = slot.take() {
                engine.close();
            }
        }
    }

    /// Full wipe: closes the engine, deletes the stored image and rebuilds
    /// an empty schema. Used for logout and version migrations.
    pub fn reset(&self) -> Result<(), StoreError> {
        {
            let mut slot = self
                .engine
                .lock()
                .map_err(|_| StoreError::Internal("engine lock poisoned".to_string()))?;
            if let Some(engine) = slot.take() {
                engine.close();
            }
            if let Some(store) = &self.image {
                if let Err(e) = store.clear() {
                    error!("could not clear stored database image: {}", e);
                }
            }
        }

        self.create_tables()
    }

    /// Mutation without the trailing image save; the bulk loader uses this
    /// and saves once at the end of the whole batch.
    pub(crate) fn run_unsaved(&self, sql: &str, params: &[Value]) -> Result<usize, StoreError> {
        self.with_engine(|engine| engine.execute(sql, params))
    }

    fn with_engine<T>(
        &self,
        f: impl FnOnce(&SqlEngine) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut slot = self
            .engine
            .lock()
            .map_err(|_| StoreError::Internal("engine lock poisoned".to_string()))?;

        if slot.is_none() {
            *slot = Some(self.hydrate()?);
        }

        match slot.as_ref() {
            Some(engine) => f(engine),
            None => Err(StoreError::Internal("engine not initialized".to_string())),
        }
    }

    fn hydrate(&self) -> Result<SqlEngine, StoreError> {
        if let Some(store) = &self.image {
            match store.load() {
                Ok(Some(bytes)) => match SqlEngine::from_image(&bytes) {
                    Ok(engine) => {
                        info!(bytes = bytes.len(), "database loaded from saved image");
                        return Ok(engine);
                    }
                    Err(e) => error!("saved database image unusable, starting empty: {}", e),
                },
                Ok(None) => debug!("no saved database image, starting empty"),
                Err(e) => error!("could not read saved database image: {}", e),
            }
        }

        info!("new database created");
        SqlEngine::create()
    }

    fn persist(&self, engine: &SqlEngine) {
        let Some(store) = &self.image else {
            return;
        };
        match engine.export() {
            Ok(bytes) => {
                if let Err(e) = store.save(&bytes) {
                    error!("could not save database image: {}", e);
                }
            }
            Err(e) => error!("could not export database: {}", e),
        }
    }
}

fn as_transaction_error(e: StoreError) -> StoreError {
    match e {
        StoreError::Query { sql, source, .. } => StoreError::Transaction { sql, source },
        other => other,
    }
}
