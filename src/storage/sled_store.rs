use std::path::Path;

use log::debug;

use super::StateStore;
use crate::errors::StoreError;

const TREE_SESSIONS: &str = "sessions";

/// Sled-backed persistence for session state.
///
/// All keys live in a single tree; every write is flushed before returning so a crash
/// between commands never loses a move that was already reported to the room.
#[derive(Clone)]
pub struct SledStore {
    _db: sled::Db,
    sessions: sled::Tree,
}

impl SledStore {
    /// Open (or create) the store rooted at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path_ref = path.as_ref();
        std::fs::create_dir_all(path_ref)?;
        let db = sled::open(path_ref)?;
        let sessions = db.open_tree(TREE_SESSIONS)?;
        debug!("opened session store at {}", path_ref.display());
        Ok(Self {
            _db: db,
            sessions,
        })
    }

    /// List every stored key that belongs to `session_id`.
    pub fn session_keys(&self, session_id: &str) -> Result<Vec<String>, StoreError> {
        let prefix = format!("{}:", session_id);
        let mut keys = Vec::new();
        for entry in self.sessions.scan_prefix(prefix.as_bytes()) {
            let (key, _) = entry?;
            keys.push(String::from_utf8_lossy(&key).into_owned());
        }
        Ok(keys)
    }
}

impl StateStore for SledStore {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.sessions.get(key.as_bytes())?.map(|v| v.to_vec()))
    }

    fn set_raw(&self, key: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        self.sessions.insert(key.as_bytes(), bytes)?;
        self.sessions.flush()?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.sessions.remove(key.as_bytes())?;
        self.sessions.flush()?;
        Ok(())
    }
}
