use tracing::{debug, instrument};
use web_time::Instant;

use crate::board::Board;
use crate::error::GameError;
use crate::types::{Color, Position, ScoredMove};

const MIN_SCORE: i32 = i32::MIN;
const MAX_SCORE: i32 = i32::MAX;

/// Backed-up value of a search node and the coordinate attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    position: Option<Position>,
    value: i32,
}

impl Node {
    fn leaf(board: &Board) -> Self {
        Self {
            position: board.last_move(),
            value: board.evaluate(),
        }
    }
}

/// Result of one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub chosen: ScoredMove,
    /// Nodes visited, leaves and forced passes included.
    pub nodes: u64,
}

/// Depth-limited alpha-beta minimax for one side.
///
/// Black is always the maximizing role and White the minimizing role; the
/// searcher for a color starts in that color's role. A side with no legal
/// move passes: the other role is searched on the same board one ply deeper.
#[derive(Debug, Clone, Copy)]
pub struct Searcher {
    color: Color,
    max_depth: u8,
}

impl Searcher {
    pub fn new(color: Color, max_depth: u8) -> Result<Self, GameError> {
        if max_depth == 0 {
            return Err(GameError::InvalidDepth(max_depth));
        }
        Ok(Self { color, max_depth })
    }

    /// Searches the best move for this searcher's color.
    ///
    /// Ties keep the first move in row-major order.
    pub fn choose_move(&self, board: &Board) -> Result<ScoredMove, GameError> {
        self.search(board).map(|report| report.chosen)
    }

    /// Like [`Searcher::choose_move`], also reporting how many nodes were visited.
    #[instrument(
        level = "debug",
        skip(self, board),
        fields(color = ?self.color, depth = self.max_depth)
    )]
    pub fn search(&self, board: &Board) -> Result<SearchReport, GameError> {
        if !board.can_play(self.color) {
            return Err(GameError::NoLegalMove(self.color));
        }

        let start = Instant::now();
        let mut nodes = 0;

        let node = match self.color {
            Color::Black => self.max_value(board, 0, MIN_SCORE, MAX_SCORE, &mut nodes),
            Color::White => self.min_value(board, 0, MIN_SCORE, MAX_SCORE, &mut nodes),
        };
        // The root has a legal move and depth >= 1, so it always branches.
        let position = node.position.ok_or(GameError::NoLegalMove(self.color))?;

        debug!(
            row = position.row,
            col = position.col,
            value = node.value,
            nodes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );

        Ok(SearchReport {
            chosen: ScoredMove {
                position,
                value: node.value,
            },
            nodes,
        })
    }

    fn max_value(
        &self,
        board: &Board,
        depth: u8,
        alpha: i32,
        beta: i32,
        nodes: &mut u64,
    ) -> Node {
        *nodes += 1;

        if board.is_full() || depth == self.max_depth {
            return Node::leaf(board);
        }
        if !board.can_play(Color::Black) {
            return self.min_value(board, depth + 1, alpha, beta, nodes);
        }

        let mut alpha = alpha;
        let mut best = Node {
            position: None,
            value: MIN_SCORE,
        };

        for child in board.children(Color::Black) {
            let reply = self.min_value(&child, depth + 1, alpha, beta, nodes);
            if reply.value > best.value {
                best = Node {
                    position: child.last_move(),
                    value: reply.value,
                };
            }
            if best.value >= beta {
                break;
            }
            alpha = alpha.max(best.value);
        }

        best
    }

    fn min_value(
        &self,
        board: &Board,
        depth: u8,
        alpha: i32,
        beta: i32,
        nodes: &mut u64,
    ) -> Node {
        *nodes += 1;

        if board.is_full() || depth == self.max_depth {
            return Node::leaf(board);
        }
        if !board.can_play(Color::White) {
            return self.max_value(board, depth + 1, alpha, beta, nodes);
        }

        let mut beta = beta;
        let mut best = Node {
            position: None,
            value: MAX_SCORE,
        };

        for child in board.children(Color::White) {
            let reply = self.max_value(&child, depth + 1, alpha, beta, nodes);
            if reply.value < best.value {
                best = Node {
                    position: child.last_move(),
                    value: reply.value,
                };
            }
            if best.value <= alpha {
                break;
            }
            beta = beta.min(best.value);
        }

        best
    }
}
