//! Turns one incoming command into a state transition and a reply.

use log::{debug, info};

use super::board::Board;
use super::command::{CommandParser, GameCommand};
use super::player::Player;
use super::players::PlayerRegistry;
use super::response::{compose, GameResponse, Outcome};
use super::session::SessionId;
use crate::config::GameConfig;
use crate::errors::StoreError;
use crate::storage::StateStore;

/// One session's game, rebuilt from the store for a single command.
pub struct Game<'a> {
    session: SessionId,
    board: Board<'a>,
    players: PlayerRegistry<'a>,
    config: &'a GameConfig,
}

impl<'a> Game<'a> {
    pub fn load(
        session: &SessionId,
        store: &'a dyn StateStore,
        config: &'a GameConfig,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            session: session.clone(),
            board: Board::load(session, store)?,
            players: PlayerRegistry::load(session, store)?,
            config,
        })
    }

    pub fn board(&self) -> &Board<'a> {
        &self.board
    }

    pub fn players(&self) -> &PlayerRegistry<'a> {
        &self.players
    }

    /// Apply `command` sent by `identity` and return the reply.
    ///
    /// The reply is built from the state as it stands after the move; when the move
    /// ended the game the session is wiped only after that.
    pub fn process_command(
        &mut self,
        identity: &str,
        command: Option<&str>,
    ) -> Result<GameResponse, StoreError> {
        let parsed = CommandParser::new(self.config).parse(command);
        debug!("{}: {} sent {:?}", self.session, identity, parsed);

        let outcome = match parsed {
            GameCommand::Help => Outcome::ShowInstructions,
            GameCommand::Challenge(opponent) => self.start_new_game(identity, &opponent)?,
            _ if !self.players.has_players() => Outcome::AwaitingChallenge,
            GameCommand::Status => Outcome::PlayersTurn,
            GameCommand::Move(token) => self.player_move(identity, &token)?,
        };

        let response = compose(outcome, &self.board, &self.players, self.config);

        if outcome.ends_game() {
            match outcome {
                Outcome::PlayerWins => info!(
                    "{}: {} won",
                    self.session,
                    self.players.current_turn_identity().unwrap_or("?")
                ),
                _ => info!("{}: game drawn", self.session),
            }
            self.reset_game()?;
        }

        Ok(response)
    }

    /// Wipe the board and both players and hand the first move back to player one.
    pub fn reset_game(&mut self) -> Result<(), StoreError> {
        self.players.clear()?;
        self.players.reset_turn()?;
        self.board.clear()
    }

    fn start_new_game(&mut self, initiator: &str, opponent: &str) -> Result<Outcome, StoreError> {
        self.reset_game()?;
        self.players.start_challenge(initiator, opponent)?;
        info!(
            "{}: new game {} vs {}",
            self.session,
            self.players.identity(Player::One).unwrap_or("?"),
            self.players.identity(Player::Two).unwrap_or("?")
        );
        Ok(Outcome::NewGameStarted)
    }

    fn player_move(&mut self, identity: &str, token: &str) -> Result<Outcome, StoreError> {
        if !self.players.is_allowed_to_move(identity) {
            return Ok(Outcome::WrongTurn);
        }
        let mover = self.players.current_turn();
        if !self.board.mark_token(mover, token)? {
            return Ok(Outcome::InvalidMove);
        }
        if self.board.has_winning_line(mover) {
            Ok(Outcome::PlayerWins)
        } else if self.board.is_full() {
            Ok(Outcome::DrawGame)
        } else {
            self.players.toggle_turn()?;
            Ok(Outcome::PlayersTurn)
        }
    }
}
