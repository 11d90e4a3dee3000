//! The pruning search must agree with plain minimax on move and value.

use othello::{Board, Color, Position, Searcher};

/// Unpruned minimax with the same leaf, pass and tie rules as [`Searcher`].
fn minimax(board: &Board, maximizing: bool, depth: u8, max_depth: u8) -> (Option<Position>, i32) {
    if board.is_full() || depth == max_depth {
        return (board.last_move(), board.evaluate());
    }

    let color = if maximizing { Color::Black } else { Color::White };
    if !board.can_play(color) {
        return minimax(board, !maximizing, depth + 1, max_depth);
    }

    let mut best: Option<(Option<Position>, i32)> = None;
    for child in board.children(color) {
        let (_, value) = minimax(&child, !maximizing, depth + 1, max_depth);
        let better = match best {
            None => true,
            Some((_, best_value)) if maximizing => value > best_value,
            Some((_, best_value)) => value < best_value,
        };
        if better {
            best = Some((child.last_move(), value));
        }
    }
    best.expect("a side that can play has children")
}

/// Plays `plies` turns choosing the last legal move, passing when forced.
fn scripted_position(plies: usize) -> Board {
    let mut board = Board::new();
    for _ in 0..plies {
        let color = board.last_player().opponent();
        match board.legal_moves(color).last() {
            Some(mv) => board.apply_move(mv.row, mv.col, color),
            None if board.can_play(color.opponent()) => board.pass_turn(color),
            None => break,
        }
    }
    board
}

fn assert_equivalent(board: &Board, max_depth: u8) {
    for color in [Color::Black, Color::White] {
        if !board.can_play(color) {
            continue;
        }
        let searcher = Searcher::new(color, max_depth).unwrap();
        let chosen = searcher.choose_move(board).unwrap();
        let (position, value) = minimax(board, color == Color::Black, 0, max_depth);

        assert_eq!(
            (Some(chosen.position), chosen.value),
            (position, value),
            "{color:?} at depth {max_depth} on {board:?}"
        );
    }
}

#[test]
fn initial_position_matches_minimax_up_to_depth_four() {
    let board = Board::new();
    for depth in 1..=4 {
        assert_equivalent(&board, depth);
    }
}

#[test]
fn opening_positions_match_minimax() {
    for plies in [1, 3, 6, 9] {
        let board = scripted_position(plies);
        for depth in 2..=4 {
            assert_equivalent(&board, depth);
        }
    }
}

#[test]
fn midgame_positions_match_minimax() {
    for plies in [16, 24, 32] {
        let board = scripted_position(plies);
        for depth in 2..=3 {
            assert_equivalent(&board, depth);
        }
    }
}

#[test]
fn endgame_positions_with_passes_match_minimax() {
    for plies in [50, 54, 58] {
        let board = scripted_position(plies);
        for depth in 1..=5 {
            assert_equivalent(&board, depth);
        }
    }
}

#[test]
fn hand_built_pass_position_matches_minimax() {
    let board: Board = "
        B W . . . . . .
        W W . . . . . .
        . . . . . . . .
        . . . W B . . .
        . . . B W . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . ."
        .parse()
        .unwrap();

    for depth in 1..=4 {
        assert_equivalent(&board, depth);
    }
}
