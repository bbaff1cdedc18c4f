use super::board::{Board, BOARD_SIDE};
use super::types::Side;

pub type WinLine = [usize; BOARD_SIDE];

pub const LINE_COUNT: usize = 2 * BOARD_SIDE + 2;

/// Rows, then columns, then the two diagonals.
pub const WIN_LINES: [WinLine; LINE_COUNT] = build_win_lines();

const fn build_win_lines() -> [WinLine; LINE_COUNT] {
    let mut lines = [[0; BOARD_SIDE]; LINE_COUNT];
    let mut i = 0;
    while i < BOARD_SIDE {
        let mut j = 0;
        while j < BOARD_SIDE {
            lines[i][j] = i * BOARD_SIDE + j;
            lines[BOARD_SIDE + i][j] = j * BOARD_SIDE + i;
            j += 1;
        }
        lines[2 * BOARD_SIDE][i] = i * BOARD_SIDE + i;
        lines[2 * BOARD_SIDE + 1][i] = i * BOARD_SIDE + (BOARD_SIDE - 1 - i);
        i += 1;
    }
    lines
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub side: Side,
    pub line: WinLine,
}

impl WinningLine {
    pub fn new(side: Side, line: WinLine) -> Self {
        Self { side, line }
    }
}

fn line_owner(board: &Board, line: &WinLine) -> Option<Side> {
    let first = board.cell(line[0])?.side()?;
    line[1..]
        .iter()
        .all(|&index| board.cell(index).and_then(|cell| cell.side()) == Some(first))
        .then_some(first)
}

/// First completed line in table order. Boards where both sides own a line are
/// rejected upstream, so the order only matters for which line gets reported.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WIN_LINES
        .iter()
        .find_map(|line| line_owner(board, line).map(|side| WinningLine::new(side, *line)))
}

pub fn check_win(board: &Board) -> Option<Side> {
    check_win_with_line(board).map(|winning| winning.side)
}

pub fn has_line(board: &Board, side: Side) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line_owner(board, line) == Some(side))
}
