//! Session identifiers and the storage keys derived from them.
//!
//! A session is one independent game, usually one chat channel. Every stored value is
//! addressed as `<session>:<suffix>`.

use std::fmt;

const SUFFIX_BOARD: &str = "board";
const SUFFIX_PLAYER_ONE: &str = "p1";
const SUFFIX_PLAYER_TWO: &str = "p2";
const SUFFIX_TURN: &str = "playerTurn";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        SessionId(id.into())
    }

    fn key(&self, suffix: &str) -> String {
        format!("{}:{}", self.0, suffix)
    }

    pub fn board_key(&self) -> String {
        self.key(SUFFIX_BOARD)
    }

    pub fn player_one_key(&self) -> String {
        self.key(SUFFIX_PLAYER_ONE)
    }

    pub fn player_two_key(&self) -> String {
        self.key(SUFFIX_PLAYER_TWO)
    }

    pub fn turn_key(&self) -> String {
        self.key(SUFFIX_TURN)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
