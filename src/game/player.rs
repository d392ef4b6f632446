//! Player identity within a game and the marker each one places.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two seats at the table. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The player who moves after this one.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn marker(self) -> Marker {
        match self {
            Player::One => Marker::X,
            Player::Two => Marker::O,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(format!("invalid player number {}", other)),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player.number()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// What is stored in a claimed square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    X,
    O,
}

impl Marker {
    pub fn owner(self) -> Player {
        match self {
            Marker::X => Player::One,
            Marker::O => Player::Two,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        for p in Player::ALL {
            assert_eq!(p.opponent().opponent(), p);
            assert_ne!(p.opponent(), p);
        }
    }

    #[test]
    fn player_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Player::Two).unwrap(), "2");
        let p: Player = serde_json::from_str("1").unwrap();
        assert_eq!(p, Player::One);
        assert!(serde_json::from_str::<Player>("0").is_err());
        assert!(serde_json::from_str::<Player>("3").is_err());
    }

    #[test]
    fn markers_map_back_to_owner() {
        for p in Player::ALL {
            assert_eq!(p.marker().owner(), p);
        }
        assert_eq!(serde_json::to_string(&Marker::X).unwrap(), "\"x\"");
    }
}
