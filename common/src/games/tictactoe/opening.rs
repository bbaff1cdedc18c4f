use super::board::{Board, CENTER};

/// Center-first opening shortcut. It only answers positions where the center
/// scores the same as the best move full search would find, so it never turns
/// a draw into a loss; it just skips the most expensive searches.
pub fn opening_move(board: &Board) -> Option<usize> {
    let center_free = board.cell(CENTER).is_some_and(|cell| cell.is_empty());
    match board.mark_count() {
        0 | 1 if center_free => Some(CENTER),
        _ => None,
    }
}
