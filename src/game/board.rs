//! The 3×3 grid for one session.
//!
//! The board is a sparse map from square number to [`Marker`]; an absent square is empty.
//! It is loaded from the store when a command arrives and every successful mark is
//! written back immediately.

use std::collections::BTreeMap;

use log::trace;

use super::player::{Marker, Player};
use super::session::SessionId;
use super::square::{Square, SIZE, SQUARES};
use crate::config::SymbolConfig;
use crate::errors::StoreError;
use crate::storage::{StateStore, StateStoreExt};

/// The eight lines that win: rows and columns interleaved by index, then both diagonals.
fn winning_lines() -> impl Iterator<Item = [Square; 3]> {
    let straight = (0..SIZE).flat_map(|i| {
        [
            [Square::at(i, 0), Square::at(i, 1), Square::at(i, 2)],
            [Square::at(0, i), Square::at(1, i), Square::at(2, i)],
        ]
    });
    let diagonals = [
        [Square::at(0, 0), Square::at(1, 1), Square::at(2, 2)],
        [Square::at(0, 2), Square::at(1, 1), Square::at(2, 0)],
    ];
    straight.chain(diagonals)
}

pub struct Board<'a> {
    squares: BTreeMap<u8, Marker>,
    key: String,
    store: &'a dyn StateStore,
}

impl<'a> Board<'a> {
    /// Rehydrate the board for `session`; a session with nothing stored starts empty.
    ///
    /// A stored board with a square outside 1..=9 is rejected as corrupt.
    pub fn load(session: &SessionId, store: &'a dyn StateStore) -> Result<Self, StoreError> {
        let key = session.board_key();
        let squares: BTreeMap<u8, Marker> = store.get_or(&key, BTreeMap::new())?;
        if let Some(bad) = squares.keys().find(|n| Square::new(i64::from(**n)).is_none()) {
            return Err(StoreError::Corrupt(format!(
                "{} holds square {} outside 1..={}",
                key, bad, SQUARES
            )));
        }
        Ok(Self {
            squares,
            key,
            store,
        })
    }

    /// Draw the grid as three newline-terminated rows.
    ///
    /// With `show_labels` the grid ignores game state and shows the square numbers, with
    /// an example move on square 4.
    pub fn render(&self, symbols: &SymbolConfig, show_labels: bool) -> String {
        let mut out = String::new();
        for square in Square::all() {
            if show_labels {
                out.push_str(symbols.label(square.number()));
            } else {
                match self.marker_at(square) {
                    Some(marker) => out.push_str(symbols.marker(marker.owner())),
                    None => out.push_str(&symbols.empty),
                }
            }
            if square.number() % SIZE == 0 {
                out.push('\n');
            }
        }
        out
    }

    /// Claim `square` for `player`. Returns `Ok(false)` without touching anything when
    /// the square is already taken.
    pub fn mark_square(&mut self, player: Player, square: Square) -> Result<bool, StoreError> {
        if self.is_square_marked(square) {
            trace!("square {} already marked in {}", square, self.key);
            return Ok(false);
        }
        self.squares.insert(square.number(), player.marker());
        self.store.set(&self.key, &self.squares)?;
        Ok(true)
    }

    /// Parse a raw move token and mark it. Tokens that are not a clean `1`-`9` are an
    /// ordinary negative result, same as an occupied square.
    pub fn mark_token(&mut self, player: Player, token: &str) -> Result<bool, StoreError> {
        match Square::parse(token) {
            Some(square) => self.mark_square(player, square),
            None => Ok(false),
        }
    }

    pub fn is_square_marked(&self, square: Square) -> bool {
        self.squares.contains_key(&square.number())
    }

    pub fn marker_at(&self, square: Square) -> Option<Marker> {
        self.squares.get(&square.number()).copied()
    }

    pub fn marked_count(&self) -> usize {
        self.squares.len()
    }

    pub fn is_full(&self) -> bool {
        self.squares.len() == usize::from(SQUARES)
    }

    /// Whether any row, column or diagonal is filled with `player`'s marker.
    pub fn has_winning_line(&self, player: Player) -> bool {
        let marker = player.marker();
        winning_lines().any(|line| line.iter().all(|sq| self.marker_at(*sq) == Some(marker)))
    }

    /// Empty the grid and drop its stored state.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.squares.clear();
        self.store.delete(&self.key)
    }
}
