use super::board::{Board, BOARD_AREA};
use super::types::{SearchResult, Side};
use super::win_detector::check_win;

/// Base score of a won position. It exceeds the deepest possible ply so a win
/// never scores at or below zero, and subtracting the depth makes quicker wins
/// (and slower losses) score better.
pub const WIN_SCORE: i32 = BOARD_AREA as i32 + 1;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

pub fn best_move(board: &Board, side_to_move: Side, maximizing_side: Side) -> SearchResult {
    best_move_with_stats(board, side_to_move, maximizing_side).0
}

pub fn best_move_with_stats(
    board: &Board,
    side_to_move: Side,
    maximizing_side: Side,
) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    let result = alpha_beta(
        board,
        side_to_move,
        maximizing_side,
        0,
        i32::MIN,
        i32::MAX,
        &mut stats,
    );
    (result, stats)
}

pub fn terminal_score(board: &Board, maximizing_side: Side, depth: i32) -> Option<i32> {
    match check_win(board) {
        Some(winner) if winner == maximizing_side => Some(WIN_SCORE - depth),
        Some(_) => Some(depth - WIN_SCORE),
        None if board.is_full() => Some(DRAW_SCORE),
        None => None,
    }
}

fn alpha_beta(
    board: &Board,
    side_to_move: Side,
    maximizing_side: Side,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    if let Some(score) = terminal_score(board, maximizing_side, depth) {
        return SearchResult::terminal(score);
    }

    let is_maximizing = side_to_move == maximizing_side;
    let mut best = SearchResult::new(if is_maximizing { i32::MIN } else { i32::MAX }, None);

    for index in board.legal_moves() {
        let child = board.with_mark(index, side_to_move);
        let score = alpha_beta(
            &child,
            side_to_move.opponent(),
            maximizing_side,
            depth + 1,
            alpha,
            beta,
            stats,
        )
        .score;

        // Strict comparison keeps the lowest index among equal scores.
        if is_maximizing {
            if score > best.score {
                best = SearchResult::new(score, Some(index));
            }
            alpha = alpha.max(best.score);
        } else {
            if score < best.score {
                best = SearchResult::new(score, Some(index));
            }
            beta = beta.min(best.score);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}
