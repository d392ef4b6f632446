//! # Configuration Management Module
//!
//! Roomtactoe reads a small TOML file with three sections:
//!
//! - [`StorageConfig`] - where the sled session database lives
//! - [`LoggingConfig`] - log level and optional log file
//! - [`GameConfig`] - command keywords and the symbols used to draw the board
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roomtactoe::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Challenge with: {} {}", config.game.command_name, config.game.challenge_keyword);
//!     Config::create_default("config.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [storage]
//! data_dir = "./data"
//!
//! [logging]
//! level = "info"
//! file = "roomtactoe.log"
//!
//! [game]
//! command_name = "/ctt"
//! challenge_keyword = "challenge"
//! status_keyword = "status"
//!
//! [game.symbols]
//! player_one = ":x:"
//! player_two = ":o:"
//! empty = ":white_large_square:"
//! labels = [":one:", ":two:", ":three:", ":four:", ":five:", ":six:", ":seven:", ":eight:", ":nine:"]
//! ```
//!
//! Every section has defaults, so a file only needs the values it changes.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

use crate::game::player::Player;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub game: GameConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
    /// Optional override for the sled database path; defaults to `<data_dir>/sessions`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<String>,
}

impl StorageConfig {
    pub fn sessions_path(&self) -> PathBuf {
        match &self.db_path {
            Some(p) => PathBuf::from(p),
            None => PathBuf::from(&self.data_dir).join("sessions"),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            db_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some("roomtactoe.log".to_string()),
        }
    }
}

/// Keywords and presentation for the game itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Slash command shown in help text, e.g. `/ctt`.
    pub command_name: String,
    pub challenge_keyword: String,
    pub status_keyword: String,
    #[serde(default)]
    pub symbols: SymbolConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            command_name: "/ctt".to_string(),
            challenge_keyword: "challenge".to_string(),
            status_keyword: "status".to_string(),
            symbols: SymbolConfig::default(),
        }
    }
}

/// Symbols used when rendering the grid.
///
/// `labels[3]` is never drawn: the instruction board shows player one's marker on
/// square 4 as the worked example move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolConfig {
    pub player_one: String,
    pub player_two: String,
    pub empty: String,
    pub labels: Vec<String>,
}

impl SymbolConfig {
    pub fn marker(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }

    /// Label for `square` (1..=9) on the instruction board.
    pub fn label(&self, square: u8) -> &str {
        if square == 4 {
            return &self.player_one;
        }
        self.labels
            .get(usize::from(square).saturating_sub(1))
            .map(String::as_str)
            .unwrap_or(&self.empty)
    }
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            player_one: ":x:".to_string(),
            player_two: ":o:".to_string(),
            empty: ":white_large_square:".to_string(),
            labels: [
                ":one:", ":two:", ":three:", ":four:", ":five:", ":six:", ":seven:", ":eight:",
                ":nine:",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Reject configurations that would make commands ambiguous or boards unreadable.
    pub fn validate(&self) -> Result<()> {
        let game = &self.game;
        if game.challenge_keyword.trim().is_empty() || game.status_keyword.trim().is_empty() {
            return Err(anyhow!("game keywords must not be empty"));
        }
        if game.challenge_keyword.contains(char::is_whitespace)
            || game.status_keyword.contains(char::is_whitespace)
        {
            return Err(anyhow!("game keywords must be a single word"));
        }
        if game
            .challenge_keyword
            .eq_ignore_ascii_case(&game.status_keyword)
        {
            return Err(anyhow!(
                "challenge and status keywords must differ (both '{}')",
                game.status_keyword
            ));
        }
        let symbols = &game.symbols;
        if symbols.player_one == symbols.player_two {
            return Err(anyhow!("player markers must differ"));
        }
        if symbols.labels.len() != 9 {
            return Err(anyhow!(
                "expected 9 square labels, found {}",
                symbols.labels.len()
            ));
        }
        Ok(())
    }
}
