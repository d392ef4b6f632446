//! Tiny parser for the text that follows the slash command.
//!
//! The text is split on whitespace. Only the first token decides the command; for a
//! challenge the second token is the opponent. Anything else is handed to the board as
//! a move token and validated there.

use log::trace;

use super::players::strip_mention;
use crate::config::GameConfig;
use crate::validation::validate_identity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// No text at all: show how to play.
    Help,
    /// `challenge <opponent>`, with mention sigils already stripped.
    Challenge(String),
    /// `status`
    Status,
    /// Anything else; the first token is the attempted square.
    Move(String),
}

/// Recognizes game commands using the configured keywords.
pub struct CommandParser {
    challenge_keyword: String,
    status_keyword: String,
}

impl CommandParser {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            challenge_keyword: config.challenge_keyword.clone(),
            status_keyword: config.status_keyword.clone(),
        }
    }

    pub fn parse(&self, raw: Option<&str>) -> GameCommand {
        let mut tokens = raw.unwrap_or("").split_whitespace();
        let Some(first) = tokens.next() else {
            trace!("Parsed HELP from {:?}", raw);
            return GameCommand::Help;
        };
        if first.eq_ignore_ascii_case(&self.challenge_keyword) {
            // A target that is only sigils or fails identity checks counts as no target.
            match tokens.next().map(|t| validate_identity(strip_mention(t))) {
                Some(Ok(target)) => {
                    trace!("Parsed CHALLENGE '{}' from {:?}", target, raw);
                    return GameCommand::Challenge(target.to_string());
                }
                Some(Err(e)) => trace!("Ignoring challenge target in {:?}: {}", raw, e),
                None => {}
            }
        }
        if first.eq_ignore_ascii_case(&self.status_keyword) {
            trace!("Parsed STATUS from {:?}", raw);
            return GameCommand::Status;
        }
        trace!("Parsed MOVE '{}' from {:?}", first, raw);
        GameCommand::Move(first.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> CommandParser {
        CommandParser::new(&GameConfig::default())
    }

    #[test]
    fn empty_and_blank_text_is_help() {
        let p = parser();
        assert_eq!(p.parse(None), GameCommand::Help);
        assert_eq!(p.parse(Some("")), GameCommand::Help);
        assert_eq!(p.parse(Some("   ")), GameCommand::Help);
    }

    #[test]
    fn challenge_needs_a_target() {
        let p = parser();
        assert_eq!(
            p.parse(Some("challenge @bob")),
            GameCommand::Challenge("bob".into())
        );
        assert_eq!(
            p.parse(Some("CHALLENGE bob extra words")),
            GameCommand::Challenge("bob".into())
        );
        // A bare keyword falls through and is treated like any other token.
        assert_eq!(
            p.parse(Some("challenge")),
            GameCommand::Move("challenge".into())
        );
    }

    #[test]
    fn unusable_challenge_target_is_no_target() {
        let p = parser();
        assert_eq!(p.parse(Some("challenge @")), GameCommand::Move("challenge".into()));
        assert_eq!(p.parse(Some("challenge @@@")), GameCommand::Move("challenge".into()));
        let long = format!("challenge {}", "b".repeat(81));
        assert_eq!(p.parse(Some(long.as_str())), GameCommand::Move("challenge".into()));
    }

    #[test]
    fn status_and_moves() {
        let p = parser();
        assert_eq!(p.parse(Some("status")), GameCommand::Status);
        assert_eq!(p.parse(Some("Status now")), GameCommand::Status);
        assert_eq!(p.parse(Some("5")), GameCommand::Move("5".into()));
        assert_eq!(p.parse(Some(" 7 please")), GameCommand::Move("7".into()));
    }

    #[test]
    fn custom_keywords() {
        let mut cfg = GameConfig::default();
        cfg.challenge_keyword = "duel".into();
        cfg.status_keyword = "board".into();
        let p = CommandParser::new(&cfg);
        assert_eq!(p.parse(Some("duel carol")), GameCommand::Challenge("carol".into()));
        assert_eq!(p.parse(Some("board")), GameCommand::Status);
        assert_eq!(p.parse(Some("status")), GameCommand::Move("status".into()));
    }
}
