use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::GameError;
use crate::types::{BOARD_SIZE, Cell, Color, NUM_SQUARES, Position};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returned when neither side can move and one side holds more discs.
pub const WIN_SCORE: i32 = 10_000;
const IMMOBILITY_SCORE: i32 = 1_000;
const CORNER_WEIGHT: i32 = 50;
const X_SQUARE_WEIGHT: i32 = -20;
const C_SQUARE_WEIGHT: i32 = -20;
const EDGE_WEIGHT: i32 = 3;
const MAJORITY_SCORE: i32 = 25;

const LAST: usize = BOARD_SIZE - 1;
const CORNERS: [(usize, usize); 4] = [(0, 0), (0, LAST), (LAST, 0), (LAST, LAST)];
// Diagonal neighbours of the corners, not the (0,1)/(0,2)-type edge cells.
const X_SQUARES: [(usize, usize); 4] = [
    (1, 1),
    (1, LAST - 1),
    (LAST - 1, 1),
    (LAST - 1, LAST - 1),
];
// Orthogonal neighbours of the corners.
const C_SQUARES: [(usize, usize); 8] = [
    (0, 1),
    (1, 0),
    (0, LAST - 1),
    (1, LAST),
    (LAST - 1, 0),
    (LAST, 1),
    (LAST - 1, LAST),
    (LAST, LAST - 1),
];

/// Othello position on an 8x8 grid.
///
/// Every search node owns its own copy: successors are produced by copying
/// the parent and applying exactly one move to the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    black_count: u8,
    white_count: u8,
    last_move: Option<Position>,
    last_player: Color,
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=white, (3,4)=black, (4,3)=black, (4,4)=white.
    ///
    /// The last player starts as White so that Black takes the first turn.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = Cell::White;
        cells[4][4] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;

        Self {
            cells,
            black_count: 2,
            white_count: 2,
            last_move: None,
            last_player: Color::White,
        }
    }

    /// Builds a board from raw cells, recomputing disc counts.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE], last_player: Color) -> Self {
        let mut board = Self {
            cells,
            black_count: 0,
            white_count: 0,
            last_move: None,
            last_player,
        };
        for cell in cells.iter().flatten() {
            match cell {
                Cell::Black => board.black_count += 1,
                Cell::White => board.white_count += 1,
                Cell::Empty => {}
            }
        }
        board
    }

    pub fn get(&self, row: u8, col: u8) -> Option<Cell> {
        self.cells
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn last_player(&self) -> Color {
        self.last_player
    }

    /// Records that `color` gave up its turn without placing a disc.
    pub fn pass_turn(&mut self, color: Color) {
        self.last_player = color;
    }

    /// Returns `true` when placing `color` at `(row, col)` brackets at least
    /// one run of opponent discs. Out-of-range or occupied cells are never legal.
    pub fn is_legal(&self, row: u8, col: u8, color: Color) -> bool {
        match self.get(row, col) {
            Some(Cell::Empty) => {}
            _ => return false,
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.bracketed_run(row, col, dr, dc, color) > 0)
    }

    /// Returns `true` when `color` has at least one legal move.
    pub fn can_play(&self, color: Color) -> bool {
        all_positions().any(|pos| self.is_legal(pos.row, pos.col, color))
    }

    /// Lists legal moves for `color` in row-major order.
    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        all_positions()
            .filter(|pos| self.is_legal(pos.row, pos.col, color))
            .collect()
    }

    /// Places a disc and flips every bracketed run.
    ///
    /// Caller contract: `(row, col)` must be a legal move for `color`.
    /// Legality is not re-checked here; an illegal placement corrupts the
    /// disc counts.
    pub fn apply_move(&mut self, row: u8, col: u8, color: Color) {
        debug_assert!(
            self.get(row, col) == Some(Cell::Empty),
            "apply_move() requires an empty in-range cell, got ({row}, {col})"
        );

        self.cells[row as usize][col as usize] = color.into();
        self.last_move = Some(Position::new(row, col));
        self.last_player = color;
        self.add_discs(color, 1);

        for (dr, dc) in DIRECTIONS {
            let run = self.bracketed_run(row, col, dr, dc, color);
            for step in 1..=run as i32 {
                let r = (row as i32 + dr * step) as usize;
                let c = (col as i32 + dc * step) as usize;
                self.cells[r][c] = color.into();
            }
            self.add_discs(color, run as i32);
            self.add_discs(color.opponent(), -(run as i32));
        }
    }

    pub fn is_full(&self) -> bool {
        self.black_count as usize + self.white_count as usize >= NUM_SQUARES
    }

    /// Static evaluation: positive favors Black, negative favors White.
    pub fn evaluate(&self) -> i32 {
        let black_can_play = self.can_play(Color::Black);
        let white_can_play = self.can_play(Color::White);

        if !black_can_play && !white_can_play {
            return match self.black_count.cmp(&self.white_count) {
                Ordering::Greater => WIN_SCORE,
                Ordering::Less => -WIN_SCORE,
                Ordering::Equal => 0,
            };
        }

        let mut score = 0;
        if !white_can_play {
            score += IMMOBILITY_SCORE;
        }
        if !black_can_play {
            score -= IMMOBILITY_SCORE;
        }

        score += CORNER_WEIGHT * self.sign_sum(&CORNERS);
        score += X_SQUARE_WEIGHT * self.sign_sum(&X_SQUARES);
        score += C_SQUARE_WEIGHT * self.sign_sum(&C_SQUARES);

        for i in 1..LAST {
            let edges = [(i, 0), (i, LAST), (0, i), (LAST, i)];
            score += EDGE_WEIGHT * self.sign_sum(&edges);
        }

        let black = self.black_count as i32;
        let white = self.white_count as i32;
        // Integer form of "more than 1.5 times the other side".
        if 2 * white > 3 * black {
            score -= MAJORITY_SCORE;
        }
        if 2 * black > 3 * white {
            score += MAJORITY_SCORE;
        }

        score
    }

    /// Every successor reachable by one `color` move, in row-major order.
    pub fn children(&self, color: Color) -> Vec<Board> {
        all_positions()
            .filter(|pos| self.is_legal(pos.row, pos.col, color))
            .map(|pos| {
                let mut child = *self;
                child.apply_move(pos.row, pos.col, color);
                child
            })
            .collect()
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black_count, self.white_count)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - self.black_count - self.white_count
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (slot, cell) in board.iter_mut().zip(self.cells.iter().flatten()) {
            *slot = cell.code();
        }
        board
    }

    /// Length of the opponent run starting next to `(row, col)` in direction
    /// `(dr, dc)` that is closed by a `color` disc, or 0 when the run hits an
    /// empty cell or the edge first.
    fn bracketed_run(&self, row: u8, col: u8, dr: i32, dc: i32, color: Color) -> u8 {
        let own: Cell = color.into();
        let opp: Cell = color.opponent().into();
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        let mut run = 0u8;

        while in_bounds(r, c) {
            let cell = self.cells[r as usize][c as usize];
            if cell == opp {
                run += 1;
            } else if cell == own {
                return run;
            } else {
                return 0;
            }

            r += dr;
            c += dc;
        }

        0
    }

    fn add_discs(&mut self, color: Color, delta: i32) {
        let counter = match color {
            Color::Black => &mut self.black_count,
            Color::White => &mut self.white_count,
        };
        *counter = (*counter as i32 + delta) as u8;
    }

    fn sign_sum(&self, squares: &[(usize, usize)]) -> i32 {
        squares
            .iter()
            .map(|&(r, c)| self.cells[r][c].sign())
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a diagram of 64 cells, `B` black, `W` white, `.` empty, in
/// row-major order. Whitespace is ignored. The parsed board has no last
/// move and White as its last player.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mut count = 0usize;

        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            if count >= NUM_SQUARES {
                return Err(GameError::InvalidDiagram(format!(
                    "more than {NUM_SQUARES} cells"
                )));
            }
            cells[count / BOARD_SIZE][count % BOARD_SIZE] = match ch {
                'B' | 'b' => Cell::Black,
                'W' | 'w' => Cell::White,
                '.' => Cell::Empty,
                other => {
                    return Err(GameError::InvalidDiagram(format!(
                        "unexpected character {other:?}"
                    )));
                }
            };
            count += 1;
        }

        if count != NUM_SQUARES {
            return Err(GameError::InvalidDiagram(format!(
                "expected {NUM_SQUARES} cells, got {count}"
            )));
        }

        Ok(Self::from_cells(cells, Color::White))
    }
}

fn all_positions() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE as u8)
        .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position::new(row, col)))
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
