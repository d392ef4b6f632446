//! Entry point for transports: validates input and runs one command per session at a time.
//!
//! [`Game`] itself does a read-modify-write against the store with no locking, so two
//! commands for the same room arriving together could lose a move. `GameService` keeps a
//! mutex per session id and holds it for the whole command. Different sessions never
//! wait on each other. An entry is dropped once no command for its session is running or
//! waiting, so the lock table only holds sessions with work in flight.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use log::warn;
use thiserror::Error;

use crate::config::GameConfig;
use crate::errors::StoreError;
use crate::game::{Game, GameResponse, SessionId};
use crate::storage::StateStore;
use crate::validation::{validate_identity, validate_session_id, InputError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}

pub type SharedStore = Arc<dyn StateStore + Send + Sync>;

pub struct GameService {
    store: SharedStore,
    config: GameConfig,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl GameService {
    pub fn new(store: SharedStore, config: GameConfig) -> Self {
        Self {
            store,
            config,
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn lock_table(&self) -> Result<MutexGuard<'_, HashMap<String, Arc<Mutex<()>>>>, StoreError> {
        self.locks
            .lock()
            .map_err(|_| StoreError::Poisoned("session lock table".to_string()))
    }

    /// Run `op` while holding the lock for `session_id`.
    fn with_session<T>(
        &self,
        session_id: &str,
        op: impl FnOnce() -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        let lock = self
            .lock_table()?
            .entry(session_id.to_string())
            .or_default()
            .clone();
        let result = {
            // A poisoned session lock only means an earlier command panicked; the stored
            // state is still whatever that command last flushed.
            let _held = lock.lock().unwrap_or_else(|poisoned| {
                warn!("session {} lock was poisoned; continuing", session_id);
                poisoned.into_inner()
            });
            op()
        };
        // Handles are cloned and dropped only under the table lock, so a count of one
        // left after ours is gone means nobody else is running or waiting.
        let mut table = self.lock_table()?;
        drop(lock);
        if table
            .get(session_id)
            .map_or(false, |l| Arc::strong_count(l) == 1)
        {
            table.remove(session_id);
        }
        result
    }

    /// Process `command` from `identity` in `session_id`.
    pub fn handle(
        &self,
        session_id: &str,
        identity: &str,
        command: Option<&str>,
    ) -> Result<GameResponse, ServiceError> {
        let session_id = validate_session_id(session_id)?;
        let identity = validate_identity(identity)?;
        self.with_session(session_id, || {
            let session = SessionId::new(session_id);
            let mut game = Game::load(&session, &*self.store, &self.config)?;
            Ok(game.process_command(identity, command)?)
        })
    }

    /// Clear every trace of the game in `session_id`.
    pub fn reset(&self, session_id: &str) -> Result<(), ServiceError> {
        let session_id = validate_session_id(session_id)?;
        self.with_session(session_id, || {
            let session = SessionId::new(session_id);
            let mut game = Game::load(&session, &*self.store, &self.config)?;
            game.reset_game()?;
            Ok(())
        })
    }
}
