use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::error::StoreError;

/// File-backed store for the serialized database image. One image file per
/// store, replaced atomically on every save so the previous image survives
/// any failure up to the final rename. A plain-text sidecar carries the
/// schema version counter outside the image itself.
pub struct ImageStore {
    dir: PathBuf,
    name: String,
}

impl ImageStore {
    pub fn open(dir: &Path, name: &str) -> Result<Self, StoreError> {
        fs::create_dir_all(dir).map_err(|e| {
            StoreError::StorageUnavailable(format!(
                "cannot create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        Ok(ImageStore {
            dir: dir.to_path_buf(),
            name: name.to_string(),
        })
    }

    pub fn image_path(&self) -> PathBuf {
        self.dir.join(format!("{}.img", self.name))
    }

    fn version_path(&self) -> PathBuf {
        self.dir.join(format!("{}.version", self.name))
    }

    /// Returns the saved image, or `None` on first run.
    pub fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.image_path();
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(|e| {
            StoreError::StorageUnavailable(format!("cannot read database image: {}", e))
        })?;

        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(bytes))
    }

    /// Writes the image to a temp file, syncs it, then renames it over the
    /// current image.
    pub fn save(&self, data: &[u8]) -> Result<(), StoreError> {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| StoreError::Internal(format!("system time error: {}", e)))?
            .as_nanos();
        let temp_path = self.dir.join(format!("{}.img.{}.tmp", self.name, nanos));

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .map_err(|e| {
                StoreError::StorageUnavailable(format!("cannot create temp image file: {}", e))
            })?;
        file.write_all(data)
            .map_err(|e| StoreError::StorageUnavailable(format!("image write failed: {}", e)))?;
        file.sync_all()
            .map_err(|e| StoreError::StorageUnavailable(format!("image sync failed: {}", e)))?;

        fs::rename(&temp_path, self.image_path())
            .map_err(|e| StoreError::StorageUnavailable(format!("image rename failed: {}", e)))?;

        debug!(bytes = data.len(), "database image saved");
        Ok(())
    }

    /// Deletes the saved image. The version sidecar is left alone, matching
    /// a reset that is followed by a fresh sync on the same schema.
    pub fn clear(&self) -> Result<(), StoreError> {
        let path = self.image_path();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                StoreError::StorageUnavailable(format!("cannot delete database image: {}", e))
            })?;
        }
        Ok(())
    }

    pub fn load_schema_version(&self) -> Option<i64> {
        fs::read_to_string(self.version_path())
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }

    pub fn save_schema_version(&self, version: i64) -> Result<(), StoreError> {
        fs::write(self.version_path(), version.to_string()).map_err(|e| {
            StoreError::StorageUnavailable(format!("cannot record database version: {}", e))
        })
    }
}
