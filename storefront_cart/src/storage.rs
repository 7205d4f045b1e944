use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// The fixed name the serialized cart is stored under.
pub const CART_STORAGE_KEY: &str = "storefront_cart";

#[derive(Debug, Error)]
pub enum CartStorageError {
    #[error("Could not access cart storage. {0}")]
    IOError(#[from] std::io::Error),
}

/// A keyed string store for the serialized cart, mirroring the browser's local storage.
pub trait CartStorage {
    /// Persist `payload` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, payload: &str) -> Result<(), CartStorageError>;

    /// Load the payload stored under `key`, or `None` if nothing has been stored yet.
    fn load(&self, key: &str) -> Result<Option<String>, CartStorageError>;
}

//--------------------------------------  FileCartStorage  -----------------------------------------------------------
/// Cart storage backed by a `<key>.json` file in the given directory.
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    dir: PathBuf,
}

impl FileCartStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStorage for FileCartStorage {
    fn save(&mut self, key: &str, payload: &str) -> Result<(), CartStorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), payload)?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, CartStorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

//-------------------------------------- MemoryCartStorage -----------------------------------------------------------
/// Volatile cart storage for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStorage {
    entries: HashMap<String, String>,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. to simulate a previous session or corrupt data.
    pub fn with_entry<K: Into<String>, V: Into<String>>(key: K, payload: V) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.into(), payload.into());
        storage
    }
}

impl CartStorage for MemoryCartStorage {
    fn save(&mut self, key: &str, payload: &str) -> Result<(), CartStorageError> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, CartStorageError> {
        Ok(self.entries.get(key).cloned())
    }
}
