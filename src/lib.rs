//! # Roomtactoe - Tic-Tac-Toe for Chat Rooms
//!
//! Roomtactoe runs a two-player tic-tac-toe game through slash-style chat commands. Each
//! command is handled statelessly: the game for a room is loaded from a key-value store,
//! the command is applied, every change is written straight back, and a reply is returned
//! for the transport to post.
//!
//! ## Features
//!
//! - **Command Driven**: `/ctt`, `/ctt challenge @user`, `/ctt status`, `/ctt 5`.
//! - **Room Scoped**: one independent game per session id (channel).
//! - **Visibility Aware**: every reply carries a broadcast flag so transports can post
//!   game progress to the room and keep mistakes private.
//! - **Pluggable Storage**: in-memory store for tests, sled for the CLI.
//! - **Per-Session Locking**: [`service::GameService`] serializes commands per room.
//!
//! ## Quick Start
//!
//! ```rust
//! use roomtactoe::config::GameConfig;
//! use roomtactoe::game::{Game, Outcome, SessionId};
//! use roomtactoe::storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let config = GameConfig::default();
//! let session = SessionId::new("C024BE91L");
//!
//! let mut game = Game::load(&session, &store, &config).unwrap();
//! let reply = game.process_command("alice", Some("challenge @bob")).unwrap();
//! assert_eq!(reply.outcome, Outcome::NewGameStarted);
//! assert!(reply.broadcast);
//! assert!(reply.text.contains("alice vs bob"));
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - board, players, command handling and replies
//! - [`storage`] - the key-value seam and its backends
//! - [`service`] - validated, per-session serialized entry point
//! - [`config`] - TOML configuration
//! - [`errors`] - storage error type
//! - [`validation`] - session id and identity checks
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Transport     │ ← CLI here; HTTP/chat adapters elsewhere
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   GameService   │ ← validation, per-session lock
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Game Engine   │ ← Board, PlayerRegistry, Game
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   StateStore    │ ← memory / sled
//! └─────────────────┘
//! ```

pub mod config;
pub mod errors;
pub mod game;
pub mod service;
pub mod storage;
pub mod validation;
