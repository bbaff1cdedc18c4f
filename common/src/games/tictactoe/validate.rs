use super::board::{Board, BOARD_AREA};
use super::errors::InvalidBoardError;
use super::types::{Cell, Side};
use super::win_detector::has_line;

/// Caller-facing names of the two sides, e.g. "X" and "O". The first label
/// always belongs to the side that moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideLabels<'a> {
    side_a: &'a str,
    side_b: &'a str,
}

impl<'a> SideLabels<'a> {
    pub fn new(side_a: &'a str, side_b: &'a str) -> Result<Self, InvalidBoardError> {
        if side_a.is_empty() || side_b.is_empty() || side_a == side_b {
            return Err(InvalidBoardError::Labels);
        }
        Ok(Self { side_a, side_b })
    }

    pub fn label(&self, side: Side) -> &'a str {
        match side {
            Side::A => self.side_a,
            Side::B => self.side_b,
        }
    }

    pub fn cell_for(&self, token: &str) -> Cell {
        if token == self.side_a {
            Cell::MarkA
        } else if token == self.side_b {
            Cell::MarkB
        } else {
            Cell::Empty
        }
    }

    pub fn token_for(&self, cell: Cell) -> &'a str {
        cell.side().map_or("", |side| self.label(side))
    }
}

/// Turns caller tokens into a board. Unknown tokens become empty cells.
pub fn normalize_board<S: AsRef<str>>(
    raw_board: &[S],
    labels: &SideLabels<'_>,
) -> Result<Board, InvalidBoardError> {
    if raw_board.len() != BOARD_AREA {
        return Err(InvalidBoardError::Length {
            expected: BOARD_AREA,
            actual: raw_board.len(),
        });
    }

    let mut cells = [Cell::Empty; BOARD_AREA];
    for (cell, token) in cells.iter_mut().zip(raw_board) {
        *cell = labels.cell_for(token.as_ref());
    }
    Ok(Board::from_cells(cells))
}

/// Rejects positions alternating play cannot produce.
pub fn validate_board(board: &Board) -> Result<(), InvalidBoardError> {
    if has_line(board, Side::A) && has_line(board, Side::B) {
        return Err(InvalidBoardError::BothSidesWin);
    }
    board.side_to_move()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> SideLabels<'static> {
        SideLabels::new("X", "O").unwrap()
    }

    #[test]
    fn test_labels_must_be_distinct_and_non_empty() {
        assert_eq!(SideLabels::new("X", "X"), Err(InvalidBoardError::Labels));
        assert_eq!(SideLabels::new("", "O"), Err(InvalidBoardError::Labels));
        assert_eq!(SideLabels::new("X", ""), Err(InvalidBoardError::Labels));
        assert!(SideLabels::new("cat", "dog").is_ok());
    }

    #[test]
    fn test_normalize_maps_foreign_tokens_to_empty() {
        let raw = ["X", "x", "O", " ", "?", "O ", "", "null", "X"];
        let board = normalize_board(&raw, &labels()).unwrap();

        assert_eq!(board.cell(0), Some(Cell::MarkA));
        assert_eq!(board.cell(1), Some(Cell::Empty));
        assert_eq!(board.cell(2), Some(Cell::MarkB));
        assert_eq!(board.legal_moves(), vec![1, 3, 4, 5, 6, 7]);
        assert_eq!(board.cell(8), Some(Cell::MarkA));
    }

    #[test]
    fn test_normalize_rejects_wrong_length() {
        let raw = vec![String::new(); 8];

        assert_eq!(
            normalize_board(&raw, &labels()),
            Err(InvalidBoardError::Length { expected: 9, actual: 8 })
        );
    }

    #[test]
    fn test_token_round_trip_uses_labels() {
        let labels = labels();

        assert_eq!(labels.token_for(Cell::MarkA), "X");
        assert_eq!(labels.token_for(Cell::MarkB), "O");
        assert_eq!(labels.token_for(Cell::Empty), "");
    }

    #[test]
    fn test_validate_rejects_two_winners() {
        let raw = ["X", "X", "X", "O", "O", "O", "", "", ""];
        let board = normalize_board(&raw, &labels()).unwrap();

        assert_eq!(validate_board(&board), Err(InvalidBoardError::BothSidesWin));
    }

    #[test]
    fn test_validate_rejects_broken_turn_order() {
        let raw = ["O", "O", "", "", "X", "", "", "", ""];
        let board = normalize_board(&raw, &labels()).unwrap();

        assert_eq!(
            validate_board(&board),
            Err(InvalidBoardError::TurnOrder { side_a: 1, side_b: 2 })
        );
    }

    #[test]
    fn test_validate_accepts_reachable_board() {
        let raw = ["X", "O", "", "", "X", "", "", "", ""];
        let board = normalize_board(&raw, &labels()).unwrap();

        assert_eq!(validate_board(&board), Ok(()));
    }
}
