//! Completed task records and their on-disk store
//!
//! Records are kept in insertion order and persisted wholesale as a JSON
//! array of `{ "task": ..., "duration": "HH:MM:SS" }` objects.

use crate::{TimekeepError, TimekeepResult};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Records file name used when no other path is configured
pub const DEFAULT_RECORDS_FILE: &str = "time_records.json";

/// Suffix given to a records file that failed to parse
pub const CORRUPT_SUFFIX: &str = ".corrupt";

/// One completed timing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    task: String,
    duration: String,
}

impl Record {
    pub fn new(task: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            duration: duration.into(),
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }
}

/// Ordered collection of records bound to a file path
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Record>,
    dirty: bool,
    /// Set when a file at `path` could not be read or moved aside; saves
    /// then refuse to replace it
    protected: bool,
}

impl RecordStore {
    /// Create an empty store that will save to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
            dirty: false,
            protected: false,
        }
    }

    /// Load the store at `path`
    ///
    /// A missing file is a first run and yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> TimekeepResult<Self> {
        let path = path.into();

        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No records file at {:?}, starting empty", path);
                return Ok(Self::new(path));
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<Record> = serde_json::from_slice(&data)
            .map_err(|source| TimekeepError::MalformedStore {
                path: path.clone(),
                source,
            })?;

        info!("Loaded {} records from {:?}", records.len(), path);
        Ok(Self {
            path,
            records,
            dirty: false,
            protected: false,
        })
    }

    /// Load the store at `path`, degrading to an empty store on failure
    ///
    /// A malformed file is renamed with [`CORRUPT_SUFFIX`] so the next save
    /// cannot overwrite it. A file that cannot be read or moved aside stays
    /// put and the store refuses to save over it. The load error is handed
    /// back for display.
    pub fn open_or_recover(path: impl Into<PathBuf>) -> (Self, Option<TimekeepError>) {
        let path = path.into();
        match Self::load(&path) {
            Ok(store) => (store, None),
            Err(e) => {
                warn!("Failed to load records: {}", e);
                let mut store = Self::new(path);
                store.protected = match e {
                    TimekeepError::MalformedStore { .. } => !store.quarantine(),
                    _ => true,
                };
                if store.protected {
                    warn!("Saves to {:?} are blocked for this session", store.path);
                }
                (store, Some(e))
            }
        }
    }

    /// Move the file at the store path aside. Returns whether it moved.
    fn quarantine(&self) -> bool {
        let aside = corrupt_path(&self.path);
        match std::fs::rename(&self.path, &aside) {
            Ok(()) => {
                warn!("Moved malformed records file to {:?}", aside);
                true
            }
            Err(e) => {
                warn!("Could not move malformed records file: {}", e);
                false
            }
        }
    }

    /// Append a record to the end of the collection, returning a copy of it
    pub fn append(&mut self, task: impl Into<String>, duration: impl Into<String>) -> Record {
        let record = Record::new(task, duration);
        debug!("Appended record {:?}", record);
        self.records.push(record.clone());
        self.dirty = true;
        record
    }

    /// Write the whole collection to the store path, replacing its contents
    ///
    /// Data goes to a sibling temp file first and is renamed into place.
    pub fn save(&mut self) -> TimekeepResult<()> {
        if self.protected && self.path.exists() {
            return Err(TimekeepError::SaveBlocked {
                path: self.path.clone(),
            });
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = to_json(&self.records)?;
        let tmp = sibling_path(&self.path, ".tmp");
        if let Err(e) = std::fs::write(&tmp, &data).and_then(|()| std::fs::rename(&tmp, &self.path))
        {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }

        self.dirty = false;
        info!("Saved {} records to {:?}", self.records.len(), self.path);
        Ok(())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether saving is blocked to protect an unreadable file
    pub fn is_protected(&self) -> bool {
        self.protected
    }

    /// Whether records were appended since the last load or save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Path a malformed records file is moved to
pub fn corrupt_path(path: &Path) -> PathBuf {
    sibling_path(path, CORRUPT_SUFFIX)
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Pretty JSON with four-space indentation
fn to_json(records: &[Record]) -> TimekeepResult<Vec<u8>> {
    let mut data = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
    records.serialize(&mut serializer)?;
    Ok(data)
}
