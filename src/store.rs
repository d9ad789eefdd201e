//! RecordStore - a typed collection cached in memory and mirrored to one JSON file.
//!
//! The whole collection is loaded when the store is opened, reads are served
//! from memory, and every mutation rewrites the entire backing file before it
//! returns. Each store serializes its operations behind one `RwLock`, so a
//! mutation's read-modify-write cycle never interleaves with another one on
//! the same entity type.
//!
//! ## Example
//!
//! ```ignore
//! use recordstore::{entities::Product, RecordStore};
//!
//! let store = RecordStore::<Product>::open("./data")?;
//! let pen = store.create(Product::new("Pen", 1.5, "Stationery"))?;
//! assert_eq!(pen.id, 1);
//! assert!(store.get(pen.id)?.is_some());
//! ```

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockWriteGuard};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::record::{Record, RecordId};

/// How identifiers are assigned on create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Collection length + 1 at insertion time. Identifiers come back after
    /// deletions: with ids [1, 2], deleting 2 and creating yields 2 again.
    #[default]
    SizePlusOne,
    /// A counter stored next to the backing file in `<file>.next_id`.
    /// Identifiers are never handed out twice.
    Monotonic,
}

/// Options shared by every store opened from the same settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    pub id_policy: IdPolicy,
    /// Re-read the backing file at the start of every operation instead of
    /// trusting the cache loaded at open.
    pub reload_each_operation: bool,
}

struct Collection<T> {
    records: Vec<T>,
    /// Next identifier under `IdPolicy::Monotonic`; unused otherwise.
    /// Wider than `RecordId` so the counter can sit one past `RecordId::MAX`.
    next_id: i128,
}

/// File-backed record store for one entity type.
pub struct RecordStore<T: Record> {
    path: PathBuf,
    counter_path: PathBuf,
    options: StoreOptions,
    state: RwLock<Collection<T>>,
}

impl<T: Record> std::fmt::Debug for RecordStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("entity", &T::NAME)
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}

impl<T: Record> RecordStore<T> {
    /// Open `T::FILE` inside `data_dir` with default options.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with(data_dir, StoreOptions::default())
    }

    /// Open `T::FILE` inside `data_dir`.
    pub fn open_with(data_dir: impl AsRef<Path>, options: StoreOptions) -> Result<Self, StoreError> {
        Self::open_file(data_dir.as_ref().join(T::FILE), options)
    }

    /// Open an explicit backing file.
    ///
    /// A missing file is created holding an empty collection. A file that
    /// cannot be parsed opens as an empty collection. Any other read failure
    /// is returned.
    pub fn open_file(path: impl Into<PathBuf>, options: StoreOptions) -> Result<Self, StoreError> {
        let path = path.into();
        let counter_path = counter_path_for(&path);
        let mut store = RecordStore {
            path,
            counter_path,
            options,
            state: RwLock::new(Collection {
                records: Vec::new(),
                next_id: 1,
            }),
        };
        let loaded = store.load()?;
        debug!(
            entity = T::NAME,
            path = %store.path.display(),
            records = loaded.records.len(),
            "record store opened"
        );
        store.state = RwLock::new(loaded);
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Snapshot of the current collection in insertion order.
    pub fn list(&self) -> Result<Vec<T>, StoreError> {
        self.read("list", |collection| collection.records.clone())
    }

    /// First record whose identifier is `id`.
    pub fn get(&self, id: RecordId) -> Result<Option<T>, StoreError> {
        self.read("get", |collection| {
            collection
                .records
                .iter()
                .find(|record| record.id() == id)
                .cloned()
        })
    }

    /// Assign an identifier, append, and persist. The incoming identifier is ignored.
    pub fn create(&self, mut record: T) -> Result<T, StoreError> {
        let mut collection = self.write("create")?;

        let id = self.assign_id(&mut collection)?;
        record.set_id(id);
        collection.records.push(record.clone());

        self.persist(&collection)?;
        Ok(record)
    }

    /// Overwrite every non-identifier field of record `id` with `patch`, then persist.
    ///
    /// Returns `None` without touching the file when no record matches.
    pub fn update(&self, id: RecordId, patch: T) -> Result<Option<T>, StoreError> {
        let mut collection = self.write("update")?;

        let Some(existing) = collection.records.iter_mut().find(|record| record.id() == id) else {
            return Ok(None);
        };
        existing.apply(patch);
        let updated = existing.clone();

        self.persist(&collection)?;
        Ok(Some(updated))
    }

    /// Remove record `id`, persist, and return the remaining collection.
    ///
    /// Returns `None` without touching the file when no record matches.
    pub fn delete(&self, id: RecordId) -> Result<Option<Vec<T>>, StoreError> {
        let mut collection = self.write("delete")?;

        let Some(index) = collection.records.iter().position(|record| record.id() == id) else {
            return Ok(None);
        };
        collection.records.remove(index);

        self.persist(&collection)?;
        Ok(Some(collection.records.clone()))
    }

    fn read<R>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&Collection<T>) -> R,
    ) -> Result<R, StoreError> {
        if self.options.reload_each_operation {
            // Refreshing the cache needs exclusive access.
            let collection = self.write(operation)?;
            return Ok(f(&collection));
        }
        let collection = self
            .state
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))?;
        Ok(f(&collection))
    }

    fn write(&self, operation: &'static str) -> Result<RwLockWriteGuard<'_, Collection<T>>, StoreError> {
        let mut collection = self
            .state
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))?;
        if self.options.reload_each_operation {
            *collection = self.load()?;
        }
        Ok(collection)
    }

    fn assign_id(&self, collection: &mut Collection<T>) -> Result<RecordId, StoreError> {
        match self.options.id_policy {
            IdPolicy::SizePlusOne => Ok(collection.records.len() as RecordId + 1),
            IdPolicy::Monotonic => {
                let id = RecordId::try_from(collection.next_id)
                    .map_err(|_| StoreError::IdentifiersExhausted(T::NAME))?;
                collection.next_id += 1;
                Ok(id)
            }
        }
    }

    fn load(&self) -> Result<Collection<T>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    entity = T::NAME,
                    path = %self.path.display(),
                    "backing file missing, creating an empty collection"
                );
                if let Some(parent) = self.path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
                    }
                }
                let collection = Collection {
                    records: Vec::new(),
                    next_id: self.load_counter(&[])?,
                };
                self.persist(&collection)?;
                return Ok(collection);
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        let records = parse_records::<T>(&self.path, &text);
        let next_id = self.load_counter(&records)?;
        Ok(Collection { records, next_id })
    }

    fn load_counter(&self, records: &[T]) -> Result<i128, StoreError> {
        if self.options.id_policy != IdPolicy::Monotonic {
            return Ok(1);
        }

        let stored = match fs::read_to_string(&self.counter_path) {
            Ok(text) => match text.trim().parse::<i128>() {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(
                        path = %self.counter_path.display(),
                        error = %err,
                        "identifier counter is malformed, deriving it from live records"
                    );
                    None
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => return Err(StoreError::io(&self.counter_path, err)),
        };

        let after_live = records
            .iter()
            .map(|record| i128::from(record.id()))
            .max()
            .unwrap_or(0)
            + 1;
        Ok(stored.unwrap_or(1).max(after_live))
    }

    fn persist(&self, collection: &Collection<T>) -> Result<(), StoreError> {
        let data = serde_json::to_string(&collection.records)?;
        fs::write(&self.path, data).map_err(|e| StoreError::io(&self.path, e))?;

        if self.options.id_policy == IdPolicy::Monotonic {
            fs::write(&self.counter_path, collection.next_id.to_string())
                .map_err(|e| StoreError::io(&self.counter_path, e))?;
        }

        debug!(
            entity = T::NAME,
            path = %self.path.display(),
            records = collection.records.len(),
            "collection persisted"
        );
        Ok(())
    }
}

fn parse_records<T: Record>(path: &Path, text: &str) -> Vec<T> {
    match serde_json::from_str::<Option<Vec<T>>>(text) {
        Ok(Some(records)) => records,
        Ok(None) => {
            warn!(
                entity = T::NAME,
                path = %path.display(),
                "backing file holds null, starting with an empty collection"
            );
            Vec::new()
        }
        Err(err) => {
            warn!(
                entity = T::NAME,
                path = %path.display(),
                error = %err,
                "backing file is malformed, starting with an empty collection"
            );
            Vec::new()
        }
    }
}

fn counter_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".next_id");
    PathBuf::from(name)
}
