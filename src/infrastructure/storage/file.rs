//! File-backed key-value storage: one JSON document per key

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::KeyValueStorage;
use crate::shared::AppResult;

/// Directory holding one `<key>.json` file per stored snapshot
#[derive(Debug, Clone)]
pub struct FileKeyValueStorage {
    dir: PathBuf,
}

impl FileKeyValueStorage {
    pub fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        info!("Key-value storage at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

/// `<data dir>/hotel-ops/storage`
pub fn default_storage_dir() -> PathBuf {
    dirs_next::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hotel-ops")
        .join("storage")
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key);
        // Write beside the target, then rename over it.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(key, "Snapshot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage() -> FileKeyValueStorage {
        let dir = std::env::temp_dir().join(format!("hotel-ops-test-{}", uuid::Uuid::new_v4()));
        FileKeyValueStorage::open(dir).unwrap()
    }

    #[test]
    fn set_get_remove() {
        let mut kv = temp_storage();
        assert_eq!(kv.get("hotel_branding").unwrap(), None);

        kv.set("hotel_branding", r#"{"hotelName":"Sea View"}"#).unwrap();
        assert_eq!(
            kv.get("hotel_branding").unwrap().as_deref(),
            Some(r#"{"hotelName":"Sea View"}"#)
        );
        assert!(kv.dir().join("hotel_branding.json").exists());

        kv.remove("hotel_branding").unwrap();
        assert_eq!(kv.get("hotel_branding").unwrap(), None);
        kv.remove("hotel_branding").unwrap();

        fs::remove_dir_all(kv.dir()).unwrap();
    }

    #[test]
    fn keys_cannot_escape_the_directory() {
        let kv = temp_storage();
        let path = kv.path_for("../etc/passwd");
        assert_eq!(path.parent(), Some(kv.dir()));
        fs::remove_dir_all(kv.dir()).unwrap();
    }

    #[test]
    fn default_dir_is_namespaced() {
        assert!(default_storage_dir().ends_with("hotel-ops/storage"));
    }
}
