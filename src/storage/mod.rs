//! # Storage Module - Session State Persistence
//!
//! Game components never hold state across requests. Each command rehydrates the board
//! and the players from a [`StateStore`] and writes every mutation straight back, so the
//! store is the only place a game lives between commands.
//!
//! ## Key Layout
//!
//! Keys are plain strings scoped by the session id (see [`crate::game::session`]):
//!
//! ```text
//! C024BE91L:board        ← {"1":"x","5":"o"}
//! C024BE91L:p1           ← "alice"
//! C024BE91L:p2           ← "bob"
//! C024BE91L:playerTurn   ← 2
//! ```
//!
//! Values are JSON-encoded with `serde_json`, which keeps sparse integer-keyed maps
//! intact across a round-trip.
//!
//! ## Backends
//!
//! - [`MemoryStore`] - process-local map, used by tests and embedders
//! - [`SledStore`] - embedded sled database, used by the CLI
//!
//! ## Usage
//!
//! ```rust
//! use roomtactoe::storage::{MemoryStore, StateStoreExt};
//!
//! let store = MemoryStore::new();
//! store.set("room:playerTurn", &2u8).unwrap();
//! let turn: u8 = store.get_or("room:playerTurn", 1).unwrap();
//! assert_eq!(turn, 2);
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StoreError;

pub mod memory;
pub mod sled_store;

pub use memory::MemoryStore;
pub use sled_store::SledStore;

/// Raw key-value contract every backend implements.
pub trait StateStore {
    /// Fetch the bytes stored under `key`, or `None` when the key is absent.
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `bytes` under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, bytes: Vec<u8>) -> Result<(), StoreError>;

    /// Remove `key`. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Typed helpers layered over [`StateStore`].
pub trait StateStoreExt: StateStore {
    /// Decode the value under `key`, falling back to `default` when the key is absent.
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, StoreError> {
        match self.get_raw(key)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(default),
        }
    }

    /// Encode `value` as JSON and store it under `key`.
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, bytes)
    }
}

impl<S: StateStore + ?Sized> StateStoreExt for S {}
