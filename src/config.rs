use std::env;
use std::path::PathBuf;

/// Bumped whenever the table layout changes in a way that requires the app
/// to re-fetch everything from the server. Stored next to the database
/// image, never inside it.
pub const DATABASE_VERSION: i64 = 7;

pub const DEFAULT_DATABASE_NAME: &str = "fieldsales_db";
pub const DEFAULT_DATA_DIR: &str = "databases";

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the database image and its version sidecar.
    pub data_dir: PathBuf,
    /// Base name for the files inside `data_dir`.
    pub database_name: String,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
        }
    }

    pub fn database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = name.into();
        self
    }

    pub fn from_env() -> Self {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        StoreConfig {
            data_dir: env::var("FIELDSALES_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            database_name: env::var("FIELDSALES_DB_NAME")
                .unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string()),
        }
    }
}
