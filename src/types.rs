use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

pub const PLAYER_NONE: u8 = 0;
pub const PLAYER_BLACK: u8 = 1;
pub const PLAYER_WHITE: u8 = 2;

/// The color of a side. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Wire code used by [`GameState`]: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Color::Black => PLAYER_BLACK,
            Color::White => PLAYER_WHITE,
        }
    }
}

/// Contents of one board cell.
///
/// Internally a cell also reads as a sign (+1 black, -1 white, 0 empty) so the
/// positional heuristic can sum owner-weighted squares directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub(crate) fn sign(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => -1,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Wire code used by [`GameState`]: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => PLAYER_NONE,
            Cell::Black => PLAYER_BLACK,
            Cell::White => PLAYER_WHITE,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A board coordinate, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Converts the 1-indexed coordinates shown to people.
    /// Returns `None` unless both values are in `1..=8`.
    pub fn from_one_based(row: u8, col: u8) -> Option<Self> {
        let valid = 1..=BOARD_SIZE as u8;
        if valid.contains(&row) && valid.contains(&col) {
            Some(Self::new(row - 1, col - 1))
        } else {
            None
        }
    }

    pub fn index(self) -> u8 {
        self.row * BOARD_SIZE as u8 + self.col
    }
}

/// A candidate produced by search: the first-ply placement and its
/// backed-up minimax value (positive favors Black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    pub position: Position,
    pub value: i32,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` when the previous action was a normal move.
    pub is_pass: bool,
    /// Contract:
    /// - Normal move: list of flipped positions (0..=63).
    /// - Pass: must be an empty list.
    pub flipped: Vec<u8>,
    pub last_move: Option<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_conversion_rejects_zero_and_nine() {
        assert_eq!(Position::from_one_based(1, 8), Some(Position::new(0, 7)));
        assert_eq!(Position::from_one_based(0, 3), None);
        assert_eq!(Position::from_one_based(4, 9), None);
    }

    #[test]
    fn cell_sign_matches_owner() {
        assert_eq!(Cell::from(Color::Black).sign(), 1);
        assert_eq!(Cell::from(Color::White).sign(), -1);
        assert_eq!(Cell::Empty.sign(), 0);
        assert_eq!(Color::Black.opponent(), Color::White);
    }
}
