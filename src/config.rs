use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::types::Color;

/// Default computer search depth ("medium"; 2 plays easy, 10 plays hard).
pub const DEFAULT_DEPTH: u8 = 6;

/// Who controls one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerKind {
    Human,
    Computer { depth: u8 },
}

/// The three ways a game can be set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GameMode {
    HumanVsComputer { human_plays_black: bool },
    ComputerVsComputer,
    HumanVsHuman,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub black: PlayerKind,
    pub white: PlayerKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_mode(
            GameMode::HumanVsComputer {
                human_plays_black: true,
            },
            DEFAULT_DEPTH,
        )
    }
}

impl GameConfig {
    /// `depth` applies to every computer-controlled side.
    pub fn from_mode(mode: GameMode, depth: u8) -> Self {
        let computer = PlayerKind::Computer { depth };
        match mode {
            GameMode::HumanVsComputer { human_plays_black } => {
                if human_plays_black {
                    Self {
                        black: PlayerKind::Human,
                        white: computer,
                    }
                } else {
                    Self {
                        black: computer,
                        white: PlayerKind::Human,
                    }
                }
            }
            GameMode::ComputerVsComputer => Self {
                black: computer,
                white: computer,
            },
            GameMode::HumanVsHuman => Self {
                black: PlayerKind::Human,
                white: PlayerKind::Human,
            },
        }
    }

    pub fn player(&self, color: Color) -> PlayerKind {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Rejects computer players that would search zero plies.
    pub fn validate(&self) -> Result<(), GameError> {
        for kind in [self.black, self.white] {
            if let PlayerKind::Computer { depth: 0 } = kind {
                return Err(GameError::InvalidDepth(0));
            }
        }
        Ok(())
    }
}
