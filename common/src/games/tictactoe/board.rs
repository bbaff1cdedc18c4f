use super::errors::{IllegalMoveError, InvalidBoardError};
use super::types::{Cell, GameOutcome, Side};
use super::win_detector::check_win;

pub const BOARD_SIDE: usize = 3;
pub const BOARD_AREA: usize = BOARD_SIDE * BOARD_SIDE;
pub const CENTER: usize = BOARD_AREA / 2;

/// A 3x3 board stored row by row. Boards are plain values: every move produces
/// a new board and the original stays untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_AREA],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_AREA]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; BOARD_AREA] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Empty cells in ascending index order. Search relies on this order for
    /// tie-breaking.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn apply(&self, index: usize, side: Side) -> Result<Board, IllegalMoveError> {
        match self.cells.get(index) {
            None => Err(IllegalMoveError::OutOfBounds { index }),
            Some(cell) if !cell.is_empty() => Err(IllegalMoveError::Occupied { index }),
            Some(_) => Ok(self.with_mark(index, side)),
        }
    }

    // Caller guarantees `index` came from `legal_moves`.
    pub(crate) fn with_mark(&self, index: usize, side: Side) -> Board {
        let mut next = *self;
        next.cells[index] = side.mark();
        next
    }

    pub fn count(&self, side: Side) -> usize {
        let mark = side.mark();
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whose turn it is, inferred from mark counts: equal counts mean `A` moves,
    /// one extra `A` mark means `B` moves. Anything else cannot come from
    /// alternating play.
    pub fn side_to_move(&self) -> Result<Side, InvalidBoardError> {
        let side_a = self.count(Side::A);
        let side_b = self.count(Side::B);
        if side_a == side_b {
            Ok(Side::A)
        } else if side_a == side_b + 1 {
            Ok(Side::B)
        } else {
            Err(InvalidBoardError::TurnOrder { side_a, side_b })
        }
    }

    pub fn winner(&self) -> Option<Side> {
        check_win(self)
    }

    pub fn outcome(&self) -> GameOutcome {
        if let Some(side) = self.winner() {
            GameOutcome::Win(side)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}

#[cfg(test)]
pub(crate) fn board_from(layout: &str) -> Board {
    // "XO.\n..." style, whitespace ignored: X is side A, O is side B.
    let mut cells = [Cell::Empty; BOARD_AREA];
    let symbols: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(symbols.len(), BOARD_AREA, "layout must describe every cell");
    for (cell, symbol) in cells.iter_mut().zip(symbols) {
        *cell = match symbol {
            'X' => Cell::MarkA,
            'O' => Cell::MarkB,
            '.' => Cell::Empty,
            other => panic!("unexpected symbol {other}"),
        };
    }
    Board::from_cells(cells)
}
