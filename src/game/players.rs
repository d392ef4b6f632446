//! The two participants of a session and whose turn it is.

use log::debug;

use super::player::Player;
use super::session::SessionId;
use crate::errors::StoreError;
use crate::storage::{StateStore, StateStoreExt};

/// Strip any leading `@` mention sigils from a chat handle.
pub fn strip_mention(name: &str) -> &str {
    name.trim_start_matches('@')
}

pub struct PlayerRegistry<'a> {
    player_one: Option<String>,
    player_two: Option<String>,
    turn: Player,
    session: SessionId,
    store: &'a dyn StateStore,
}

impl<'a> PlayerRegistry<'a> {
    /// Rehydrate the registry for `session`. Missing identities load as unset and a
    /// missing turn defaults to player one.
    pub fn load(session: &SessionId, store: &'a dyn StateStore) -> Result<Self, StoreError> {
        let player_one: Option<String> = store.get_or(&session.player_one_key(), None)?;
        let player_two: Option<String> = store.get_or(&session.player_two_key(), None)?;
        let turn: Player = store.get_or(&session.turn_key(), Player::One)?;
        Ok(Self {
            player_one,
            player_two,
            turn,
            session: session.clone(),
            store,
        })
    }

    /// Record `initiator` as player one and `challenged` as player two.
    pub fn start_challenge(&mut self, initiator: &str, challenged: &str) -> Result<(), StoreError> {
        let one = strip_mention(initiator).to_string();
        let two = strip_mention(challenged).to_string();
        self.store.set(&self.session.player_one_key(), &one)?;
        self.store.set(&self.session.player_two_key(), &two)?;
        debug!("{}: {} challenged {}", self.session, one, two);
        self.player_one = Some(one);
        self.player_two = Some(two);
        Ok(())
    }

    pub fn identity(&self, player: Player) -> Option<&str> {
        match player {
            Player::One => self.player_one.as_deref(),
            Player::Two => self.player_two.as_deref(),
        }
    }

    /// Which seat `identity` occupies, if any. Player one is checked first.
    pub fn resolve_player(&self, identity: &str) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|p| self.identity(*p) == Some(identity))
    }

    /// True only for the participant whose turn it is.
    pub fn is_allowed_to_move(&self, identity: &str) -> bool {
        self.resolve_player(identity) == Some(self.turn)
    }

    pub fn toggle_turn(&mut self) -> Result<(), StoreError> {
        self.turn = self.turn.opponent();
        self.store.set(&self.session.turn_key(), &self.turn)
    }

    pub fn reset_turn(&mut self) -> Result<(), StoreError> {
        self.turn = Player::One;
        self.store.set(&self.session.turn_key(), &self.turn)
    }

    pub fn current_turn(&self) -> Player {
        self.turn
    }

    pub fn current_turn_identity(&self) -> Option<&str> {
        self.identity(self.turn)
    }

    pub fn has_players(&self) -> bool {
        self.player_one.is_some() && self.player_two.is_some()
    }

    /// Forget both participants. The turn is left alone; callers resetting a game also
    /// call [`PlayerRegistry::reset_turn`].
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.player_one = None;
        self.store.delete(&self.session.player_one_key())?;
        self.player_two = None;
        self.store.delete(&self.session.player_two_key())?;
        Ok(())
    }
}
