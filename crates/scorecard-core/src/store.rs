use crate::error::{Result, ScorecardError};
use crate::io;
use crate::snapshot::Snapshot;
use std::path::{Path, PathBuf};

/// Local key-value persistence for the single round record.
pub trait SnapshotStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Snapshot>>;
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// Snapshot stored as pretty-printed JSON in one file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&self.path)
            .map_err(|e| ScorecardError::PersistenceRead(e.to_string()))?;
        if data.trim().is_empty() {
            return Ok(None);
        }
        Snapshot::from_json(&data).map(Some)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        let data = snapshot.to_json()?;
        io::atomic_write(&self.path, data.as_bytes())
            .map_err(|e| ScorecardError::PersistenceWrite(e.to_string()))
    }

    fn clear(&mut self) -> Result<()> {
        io::remove_if_exists(&self.path)
            .map(|_| ())
            .map_err(|e| ScorecardError::PersistenceWrite(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store, with switches to simulate a broken storage layer.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(crate) data: Option<String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw record, as if written by an earlier session.
    pub fn with_raw(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            ..Self::default()
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        if self.fail_reads {
            return Err(ScorecardError::PersistenceRead("storage unavailable".to_string()));
        }
        self.data.as_deref().map(Snapshot::from_json).transpose()
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        if self.fail_writes {
            return Err(ScorecardError::PersistenceWrite("storage unavailable".to_string()));
        }
        self.data = Some(snapshot.to_json()?);
        self.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.fail_writes {
            return Err(ScorecardError::PersistenceWrite("storage unavailable".to_string()));
        }
        self.data = None;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundState;
    use tempfile::TempDir;

    #[test]
    fn file_store_missing_file_loads_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("round.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_roundtrip_and_clear() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join(".scorecard/round.json"));
        let mut state = RoundState::default();
        state.current_stroke = 3;
        store.save(&Snapshot::capture(&state)).unwrap();

        let loaded = store.load().unwrap().unwrap().into_state().unwrap();
        assert_eq!(loaded, state);

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_corrupt_record_is_invalid_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("round.json");
        std::fs::write(&path, "{ broken").unwrap();
        let store = FileStore::new(path);
        assert!(matches!(
            store.load(),
            Err(ScorecardError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn memory_store_failing_writes() {
        let mut store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };
        let snap = Snapshot::capture(&RoundState::default());
        assert!(matches!(
            store.save(&snap),
            Err(ScorecardError::PersistenceWrite(_))
        ));
        assert!(store.raw().is_none());
        assert_eq!(store.writes, 0);
    }
}
