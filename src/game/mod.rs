//! # Game Engine
//!
//! Everything that decides how a command changes a game lives here.
//!
//! ## Components
//!
//! - [`board`] - the 3×3 grid, win and draw detection, rendering
//! - [`players`] - the two participants and whose turn it is
//! - [`controller`] - command dispatch, turn legality, replies
//! - [`command`] - parsing the text after the slash command
//! - [`response`] - outcomes and reply composition
//! - [`session`] - session ids and the storage keys derived from them
//!
//! ## Flow
//!
//! ```text
//! (identity, text) ──► Game::process_command
//!                         │  CommandParser
//!                         │  PlayerRegistry  ← turn legality
//!                         │  Board           ← mark, win, full
//!                         ▼
//!                      compose() ──► GameResponse { text, broadcast }
//!                         │
//!                         └─ reset after a win or draw
//! ```
//!
//! Board and players are rebuilt from the [`crate::storage::StateStore`] for every command
//! and write each change straight back.

pub mod board;
pub mod command;
pub mod controller;
pub mod player;
pub mod players;
pub mod response;
pub mod session;
pub mod square;

pub use board::Board;
pub use command::{CommandParser, GameCommand};
pub use controller::Game;
pub use player::{Marker, Player};
pub use players::PlayerRegistry;
pub use response::{GameResponse, Outcome};
pub use session::SessionId;
pub use square::Square;
