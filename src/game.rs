use serde::Serialize;
use tracing::{debug, info};

use crate::ai::Searcher;
use crate::board::Board;
use crate::config::{GameConfig, PlayerKind};
use crate::error::GameError;
use crate::types::{
    BOARD_SIZE, Color, GameResult, GameState, PLAYER_BLACK, PLAYER_NONE, PLAYER_WHITE, Position,
    ScoredMove,
};

/// Outcome of one [`Game::advance`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "turn", rename_all = "snake_case")]
pub enum Turn {
    Placed { color: Color, chosen: ScoredMove },
    Passed { color: Color },
    AwaitingHuman { color: Color },
}

/// Drives a game from the initial position, alternating sides and applying
/// forced passes.
///
/// The side to move is always the opponent of the board's last player, so
/// the initial `last_player = White` hands the first turn to Black.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    config: GameConfig,
    is_pass: bool,
    flipped: Vec<u8>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(),
            config,
            is_pass: false,
            flipped: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.board.last_player().opponent()
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_full()
            || (!self.board.can_play(Color::Black) && !self.board.can_play(Color::White))
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.can_play(self.current_player())
    }

    /// Places a disc for the human side to move. Coordinates are 0-indexed.
    pub fn play(&mut self, row: u8, col: u8) -> Result<(), GameError> {
        let color = self.human_to_move()?;

        if row >= BOARD_SIZE as u8 || col >= BOARD_SIZE as u8 {
            return Err(GameError::OutOfBounds { row, col });
        }
        if !self.board.is_legal(row, col, color) {
            return Err(GameError::IllegalMove { row, col });
        }

        self.apply_move(Position::new(row, col), color);
        Ok(())
    }

    /// Lets the computer side to move search and play its move.
    pub fn play_computer(&mut self) -> Result<ScoredMove, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let color = self.current_player();
        let depth = match self.config.player(color) {
            PlayerKind::Computer { depth } => depth,
            PlayerKind::Human => return Err(GameError::HumanToMove(color)),
        };

        let chosen = Searcher::new(color, depth)?.choose_move(&self.board)?;
        self.apply_move(chosen.position, color);
        Ok(chosen)
    }

    /// Skips the turn of a side that has no legal move.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let color = self.current_player();
        if self.board.can_play(color) {
            return Err(GameError::PassNotAllowed(color));
        }

        self.board.pass_turn(color);
        self.is_pass = true;
        self.flipped.clear();
        debug!(?color, "no legal move, turn skipped");
        Ok(())
    }

    /// Runs one automatic step: a forced pass, a computer move, or nothing
    /// when a human has to answer.
    pub fn advance(&mut self) -> Result<Turn, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let color = self.current_player();
        if !self.board.can_play(color) {
            self.pass()?;
            return Ok(Turn::Passed { color });
        }

        match self.config.player(color) {
            PlayerKind::Computer { .. } => {
                let chosen = self.play_computer()?;
                Ok(Turn::Placed { color, chosen })
            }
            PlayerKind::Human => Ok(Turn::AwaitingHuman { color }),
        }
    }

    /// Legal moves of the side to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.current_player())
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player().code(),
            black_count,
            white_count,
            is_game_over: self.is_game_over(),
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
            last_move: self.board.last_move(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            winner: if black_count > white_count {
                PLAYER_BLACK
            } else if white_count > black_count {
                PLAYER_WHITE
            } else {
                PLAYER_NONE
            },
            black_count,
            white_count,
        }
    }

    fn human_to_move(&self) -> Result<Color, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let color = self.current_player();
        match self.config.player(color) {
            PlayerKind::Human => Ok(color),
            PlayerKind::Computer { .. } => Err(GameError::ComputerToMove(color)),
        }
    }

    fn apply_move(&mut self, pos: Position, color: Color) {
        let before = self.board.to_array();
        self.board.apply_move(pos.row, pos.col, color);
        let after = self.board.to_array();

        self.is_pass = false;
        self.flipped = (0..before.len() as u8)
            .filter(|&idx| idx != pos.index() && before[idx as usize] != after[idx as usize])
            .collect();

        info!(
            ?color,
            row = pos.row,
            col = pos.col,
            flipped = self.flipped.len(),
            "disc placed"
        );

        if self.is_game_over() {
            let (black, white) = self.board.count();
            info!(black, white, "game over");
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board) {
        self.board = board;
        self.is_pass = false;
        self.flipped.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameMode;

    fn human_vs_human() -> Game {
        Game::new(GameConfig::from_mode(GameMode::HumanVsHuman, 0)).unwrap()
    }

    fn board(diagram: &str) -> Board {
        diagram.parse().expect("diagram must parse")
    }

    // Black owns (0,1), White everything else but the (0,0) corner.
    fn black_blocked_board() -> Board {
        board(&format!(".B{}", "W".repeat(62)))
    }

    #[test]
    fn initial_state_is_correct() {
        let game = Game::new(GameConfig::default()).unwrap();
        let state = game.to_game_state();

        assert_eq!(state.current_player, PLAYER_BLACK);
        assert_eq!(state.black_count, 2);
        assert_eq!(state.white_count, 2);
        assert!(!state.is_game_over);
        assert!(!state.is_pass);
        assert!(state.flipped.is_empty());
        assert_eq!(state.last_move, None);
        assert_eq!(game.legal_moves().len(), 4);
    }

    #[test]
    fn new_rejects_zero_depth_computer() {
        let config = GameConfig::from_mode(GameMode::ComputerVsComputer, 0);

        assert_eq!(Game::new(config).unwrap_err(), GameError::InvalidDepth(0));
    }

    #[test]
    fn human_move_records_flips_and_hands_turn_over() {
        let mut game = human_vs_human();

        game.play(2, 3).unwrap();
        let state = game.to_game_state();

        assert_eq!(state.current_player, PLAYER_WHITE);
        assert_eq!(state.flipped, vec![Position::new(3, 3).index()]);
        assert_eq!(state.last_move, Some(Position::new(2, 3)));
        assert_eq!((state.black_count, state.white_count), (4, 1));
    }

    #[test]
    fn illegal_player_move_returns_error() {
        let mut game = human_vs_human();

        assert_eq!(
            game.play(0, 0).unwrap_err(),
            GameError::IllegalMove { row: 0, col: 0 }
        );
        assert_eq!(
            game.play(8, 2).unwrap_err(),
            GameError::OutOfBounds { row: 8, col: 2 }
        );
        assert_eq!(game.current_player(), Color::Black);
    }

    #[test]
    fn wrong_kind_of_player_is_rejected() {
        let mut game = Game::new(GameConfig::default()).unwrap();

        assert_eq!(
            game.play_computer().unwrap_err(),
            GameError::HumanToMove(Color::Black)
        );
        game.play(2, 3).unwrap();
        assert_eq!(
            game.play(2, 2).unwrap_err(),
            GameError::ComputerToMove(Color::White)
        );
    }

    #[test]
    fn advance_waits_for_human_then_plays_computer() {
        let config = GameConfig::from_mode(
            GameMode::HumanVsComputer {
                human_plays_black: true,
            },
            2,
        );
        let mut game = Game::new(config).unwrap();

        assert_eq!(
            game.advance().unwrap(),
            Turn::AwaitingHuman {
                color: Color::Black
            }
        );
        game.play(2, 3).unwrap();

        let before = *game.board();
        match game.advance().unwrap() {
            Turn::Placed { color, chosen } => {
                assert_eq!(color, Color::White);
                assert!(before.is_legal(chosen.position.row, chosen.position.col, color));
                assert_eq!(game.board().last_move(), Some(chosen.position));
            }
            other => panic!("expected a computer move, got {other:?}"),
        }
        assert_eq!(game.current_player(), Color::Black);
    }

    #[test]
    fn forced_pass_switches_turn() {
        let mut game = human_vs_human();
        game.set_board_for_test(black_blocked_board());

        assert_eq!(game.current_player(), Color::Black);
        assert!(!game.has_legal_moves_for_current());
        assert!(!game.is_game_over());

        game.pass().unwrap();

        assert_eq!(game.current_player(), Color::White);
        assert!(game.to_game_state().is_pass);
        assert!(game.to_game_state().flipped.is_empty());
        assert!(game.has_legal_moves_for_current());
    }

    #[test]
    fn pass_is_refused_while_a_move_exists() {
        let mut game = human_vs_human();

        assert_eq!(
            game.pass().unwrap_err(),
            GameError::PassNotAllowed(Color::Black)
        );
    }

    #[test]
    fn advance_passes_automatically() {
        let mut game = human_vs_human();
        game.set_board_for_test(black_blocked_board());

        assert_eq!(
            game.advance().unwrap(),
            Turn::Passed {
                color: Color::Black
            }
        );
        assert_eq!(game.current_player(), Color::White);
    }

    #[test]
    fn neither_side_moving_ends_game() {
        let mut game = human_vs_human();
        game.set_board_for_test(board(&format!(".{}", "B".repeat(63))));

        assert!(game.is_game_over());
        assert_eq!(game.pass().unwrap_err(), GameError::GameOver);
        assert_eq!(game.advance().unwrap_err(), GameError::GameOver);
        assert_eq!(
            game.to_game_result(),
            GameResult {
                winner: PLAYER_BLACK,
                black_count: 63,
                white_count: 0,
            }
        );
    }

    #[test]
    fn full_board_after_move_sets_game_over() {
        let config = GameConfig::from_mode(
            GameMode::HumanVsComputer {
                human_plays_black: true,
            },
            1,
        );
        let mut game = Game::new(config).unwrap();
        let mut board = board(&format!(".B{}", "W".repeat(62)));
        board.pass_turn(Color::Black);
        game.set_board_for_test(board);

        let chosen = game.play_computer().unwrap();
        let state = game.to_game_state();

        assert_eq!(chosen.position, Position::new(0, 0));
        assert!(state.is_game_over);
        assert_eq!(state.black_count, 0);
        assert_eq!(state.white_count, 64);
        assert_eq!(state.flipped, vec![1]);
        assert_eq!(game.to_game_result().winner, PLAYER_WHITE);
    }
}
