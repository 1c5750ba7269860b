//! Best-effort persistence of the save record.
//!
//! Stores move raw JSON text; `save`, `load` and `clear` own serialization and
//! the error policy: write and remove failures are logged and swallowed, a
//! corrupt record loads as "nothing saved".

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, warn};

use crate::state::SaveRecord;

pub trait SaveStore {
    /// Returns `Ok(None)` when no record exists.
    fn read(&mut self) -> io::Result<Option<String>>;
    fn write(&mut self, json: &str) -> io::Result<()>;
    fn remove(&mut self) -> io::Result<()>;
}

/// JSON file written via a sibling temp file and rename, so a crash mid-write
/// leaves the previous record intact.
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

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl SaveStore for FileStore {
    fn read(&mut self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, json: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn remove(&mut self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// In-memory slot. Clones share the same slot, so a test can keep a handle
/// after handing the store to a `Game`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(json: &str) -> Self {
        let store = Self::default();
        *store.slot.borrow_mut() = Some(json.to_string());
        store
    }

    /// A store whose writes always fail, for exercising the swallow path.
    pub fn failing() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SaveStore for MemoryStore {
    fn read(&mut self) -> io::Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&mut self, json: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::other("write refused"));
        }
        *self.slot.borrow_mut() = Some(json.to_string());
        Ok(())
    }

    fn remove(&mut self) -> io::Result<()> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

/// Serializes and writes the record. Failures are logged; the session carries on in memory.
pub fn save(store: &mut dyn SaveStore, record: &SaveRecord) {
    let json = match serde_json::to_string_pretty(record) {
        Ok(json) => json,
        Err(e) => {
            warn!("could not serialize save record: {e}");
            return;
        }
    };
    if let Err(e) = store.write(&json) {
        warn!("auto-save failed, continuing without it: {e}");
    }
}

/// Reads the record if one exists. Unreadable or corrupt records count as absent.
pub fn load(store: &mut dyn SaveStore) -> Option<SaveRecord> {
    let json = match store.read() {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(e) => {
            warn!("could not read save record, starting fresh: {e}");
            return None;
        }
    };
    match serde_json::from_str(&json) {
        Ok(record) => {
            debug!("loaded save record");
            Some(record)
        }
        Err(e) => {
            warn!("discarding corrupt save record: {e}");
            None
        }
    }
}

pub fn clear(store: &mut dyn SaveStore) {
    if let Err(e) = store.remove() {
        warn!("could not remove save record: {e}");
    }
}
