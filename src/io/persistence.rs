//! Named pattern records in a keyed store
//!
//! Records are keyed by their trimmed name and a save under an existing name
//! replaces the old record. Two backends share the `PatternStore` trait: an
//! in-memory map and a JSON file holding a single name-to-record object.

use crate::geometry::parameters::PatternParameters;
use crate::io::error::{
    EngineError, PersistenceFailure, Result, file_system_error, persistence_error,
};
use crate::scene::{CanvasSelection, Scene};
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// A saved pattern: everything needed to show it again
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPatternRecord {
    /// Unique key, trimmed
    pub name: String,
    /// Parameter snapshot, seed included
    pub parameters: PatternParameters,
    /// Canvas selector inputs
    pub canvas: CanvasSelection,
    /// Scene as it was displayed when saved
    pub scene: Scene,
    /// Save time
    pub created_at: DateTime<Utc>,
}

impl SavedPatternRecord {
    /// Build a record under a trimmed, non-empty name
    ///
    /// # Errors
    ///
    /// Returns `Persistence` with `EmptyName` if the name is blank
    pub fn new(
        name: &str,
        parameters: PatternParameters,
        canvas: CanvasSelection,
        scene: Scene,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        Ok(Self {
            name: record_key(name)?.to_string(),
            parameters,
            canvas,
            scene,
            created_at,
        })
    }
}

/// Trimmed record key
///
/// # Errors
///
/// Returns `Persistence` with `EmptyName` if nothing is left after trimming
pub fn record_key(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(persistence_error(name, PersistenceFailure::EmptyName));
    }
    Ok(trimmed)
}

/// Keyed storage of saved patterns
pub trait PatternStore {
    /// Insert or replace a record under its name
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn insert(&mut self, record: SavedPatternRecord) -> Result<()>;

    /// Record stored under `name`
    ///
    /// # Errors
    ///
    /// Returns `Persistence` with `EmptyName` or `NotFound`, or a backend error
    fn load(&self, name: &str) -> Result<SavedPatternRecord>;

    /// Remove the record under `name`; absent names are ignored
    ///
    /// # Errors
    ///
    /// Returns `Persistence` with `EmptyName`, or a backend error
    fn delete(&mut self, name: &str) -> Result<()>;

    /// Every stored name in ascending order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn list_names(&self) -> Result<Vec<String>>;

    /// Snapshot the current pattern under `name`, timestamped now
    ///
    /// # Errors
    ///
    /// Returns `Persistence` with `EmptyName`, or a backend error
    fn save(
        &mut self,
        name: &str,
        parameters: &PatternParameters,
        canvas: CanvasSelection,
        scene: &Scene,
    ) -> Result<()> {
        let record = SavedPatternRecord::new(name, *parameters, canvas, scene.clone(), Utc::now())?;
        info!(name = %record.name, kind = %record.parameters.kind, "Saved pattern");
        self.insert(record)
    }

    /// A uniformly chosen record, `None` when the store is empty
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn load_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<SavedPatternRecord>>
    where
        Self: Sized,
    {
        let names = self.list_names()?;
        names.choose(rng).map(|name| self.load(name)).transpose()
    }
}

/// Store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, SavedPatternRecord>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatternStore for MemoryStore {
    fn insert(&mut self, record: SavedPatternRecord) -> Result<()> {
        self.records.insert(record.name.clone(), record);
        Ok(())
    }

    fn load(&self, name: &str) -> Result<SavedPatternRecord> {
        let key = record_key(name)?;
        self.records
            .get(key)
            .cloned()
            .ok_or_else(|| persistence_error(key, PersistenceFailure::NotFound))
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let key = record_key(name)?;
        if self.records.remove(key).is_none() {
            debug!(name = key, "Delete ignored, no such pattern");
        }
        Ok(())
    }

    fn list_names(&self) -> Result<Vec<String>> {
        Ok(self.records.keys().cloned().collect())
    }
}

/// Store persisted as one JSON object in a file
///
/// Every operation rereads the file, so concurrent edits by other processes
/// are seen but not merged.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`; the file is created on the first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, SavedPatternRecord>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = std::fs::read_to_string(&self.path)
            .map_err(file_system_error(&self.path, "read pattern store"))?;
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&text).map_err(|err| self.malformed(&err))
    }

    // The store is written beside itself and renamed over, so a failed write
    // leaves the previous file intact
    fn write_all(&self, records: &BTreeMap<String, SavedPatternRecord>) -> Result<()> {
        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(directory)
            .map_err(file_system_error(directory, "create store directory"))?;

        let text = serde_json::to_string_pretty(records).map_err(|err| self.malformed(&err))?;
        let mut staged = NamedTempFile::new_in(directory)
            .map_err(file_system_error(directory, "create staging file"))?;
        staged
            .write_all(text.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(file_system_error(staged.path(), "write pattern store"))?;
        staged
            .persist(&self.path)
            .map_err(|err| file_system_error(&self.path, "replace pattern store")(err.error))?;
        debug!(path = %self.path.display(), records = records.len(), "Pattern store written");
        Ok(())
    }

    fn malformed(&self, err: &serde_json::Error) -> EngineError {
        persistence_error(
            &self.path.display().to_string(),
            PersistenceFailure::Malformed {
                reason: err.to_string(),
            },
        )
    }
}

impl PatternStore for JsonFileStore {
    fn insert(&mut self, record: SavedPatternRecord) -> Result<()> {
        let mut records = self.read_all()?;
        records.insert(record.name.clone(), record);
        self.write_all(&records)
    }

    fn load(&self, name: &str) -> Result<SavedPatternRecord> {
        let key = record_key(name)?;
        self.read_all()?
            .remove(key)
            .ok_or_else(|| persistence_error(key, PersistenceFailure::NotFound))
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let key = record_key(name)?;
        let mut records = self.read_all()?;
        if records.remove(key).is_none() {
            debug!(name = key, "Delete ignored, no such pattern");
            return Ok(());
        }
        info!(name = key, "Deleted pattern");
        self.write_all(&records)
    }

    fn list_names(&self) -> Result<Vec<String>> {
        Ok(self.read_all()?.into_keys().collect())
    }
}
