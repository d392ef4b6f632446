//! Per-command outcomes and the reply text built from them.

use serde::Serialize;

use super::board::Board;
use super::player::Player;
use super::players::PlayerRegistry;
use crate::config::GameConfig;

/// What a single command did. Exactly one outcome is produced per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    AwaitingChallenge,
    ShowInstructions,
    NewGameStarted,
    PlayersTurn,
    WrongTurn,
    InvalidMove,
    PlayerWins,
    DrawGame,
}

impl Outcome {
    /// Whether the reply belongs in the room rather than only in front of the sender.
    pub fn is_broadcast(self) -> bool {
        matches!(
            self,
            Outcome::NewGameStarted | Outcome::PlayersTurn | Outcome::PlayerWins | Outcome::DrawGame
        )
    }

    /// Whether the game is over and its state must be wiped after replying.
    pub fn ends_game(self) -> bool {
        matches!(self, Outcome::PlayerWins | Outcome::DrawGame)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::AwaitingChallenge => "awaiting_challenge",
            Outcome::ShowInstructions => "show_instructions",
            Outcome::NewGameStarted => "new_game_started",
            Outcome::PlayersTurn => "players_turn",
            Outcome::WrongTurn => "wrong_turn",
            Outcome::InvalidMove => "invalid_move",
            Outcome::PlayerWins => "player_wins",
            Outcome::DrawGame => "draw_game",
        }
    }
}

/// Reply handed back to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResponse {
    pub text: String,
    pub broadcast: bool,
    pub outcome: Outcome,
}

impl GameResponse {
    /// Slack slash-command visibility for this reply.
    pub fn response_type(&self) -> &'static str {
        if self.broadcast {
            "in_channel"
        } else {
            "ephemeral"
        }
    }

    /// Slash-command style JSON body: `{"response_type": ..., "text": ...}`.
    pub fn to_slack_json(&self) -> serde_json::Value {
        serde_json::json!({
            "response_type": self.response_type(),
            "text": self.text,
        })
    }
}

/// Build the reply for `outcome` from the current (pre-reset) board and players.
pub fn compose(
    outcome: Outcome,
    board: &Board<'_>,
    players: &PlayerRegistry<'_>,
    config: &GameConfig,
) -> GameResponse {
    let show_instructions = outcome == Outcome::ShowInstructions;
    let title = if players.has_players() && !show_instructions {
        title_line(players)
    } else {
        String::new()
    };
    let grid = board.render(&config.symbols, show_instructions);
    let message = status_message(outcome, players, config);
    GameResponse {
        text: format!("{}\n{}\n{}", title, grid, message),
        broadcast: outcome.is_broadcast(),
        outcome,
    }
}

fn title_line(players: &PlayerRegistry<'_>) -> String {
    format!(
        "*{} vs {}*",
        players.identity(Player::One).unwrap_or_default(),
        players.identity(Player::Two).unwrap_or_default()
    )
}

fn status_message(outcome: Outcome, players: &PlayerRegistry<'_>, config: &GameConfig) -> String {
    let turn_holder = players.current_turn_identity().unwrap_or("someone");
    let cmd = &config.command_name;
    let mut message = match outcome {
        Outcome::AwaitingChallenge => format!(
            "*Challenge someone to begin a game of tic-tac-toe:*\n_{} {} @userName_",
            cmd, config.challenge_keyword
        ),
        Outcome::ShowInstructions => format!(
            "*Help:* _{cmd}_\n*Game Status:* _{cmd} {status}_\n*New Game:* _{cmd} {challenge} @userName_\n*Example Move:* _{cmd} 4 (Places an {example} in the {label} position)_\n*Win Condition:* _3 in a row wins!_",
            cmd = cmd,
            status = config.status_keyword,
            challenge = config.challenge_keyword,
            example = config.symbols.player_one,
            label = config.symbols.labels.get(3).map(String::as_str).unwrap_or("4"),
        ),
        Outcome::NewGameStarted => format!(
            "*Starting a new game... 3 in a row wins.*\n_{}: It's your turn._",
            turn_holder
        ),
        Outcome::PlayersTurn => format!("_{}: It's your turn._", turn_holder),
        Outcome::WrongTurn => "_You are not allowed to take this turn._".to_string(),
        Outcome::InvalidMove => format!("_{}: Invalid Move! Please try again._", turn_holder),
        Outcome::PlayerWins => format!("*{} wins the game!!* :trophy:", turn_holder),
        Outcome::DrawGame => "*This game is a draw!* :handshake:".to_string(),
    };
    message.push('\n');
    message
}
