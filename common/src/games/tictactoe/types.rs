/// One of the two players. `A` moves first, so it is to move whenever both
/// sides have placed the same number of marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn mark(&self) -> Cell {
        match self {
            Side::A => Cell::MarkA,
            Side::B => Cell::MarkB,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    MarkA,
    MarkB,
}

impl Cell {
    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::MarkA => Some(Side::A),
            Cell::MarkB => Some(Side::B),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Side),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::Win(side) => Some(*side),
            _ => None,
        }
    }
}

/// Score is seen from the maximizing side. A missing move means the board was
/// already terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<usize>,
}

impl SearchResult {
    pub fn new(score: i32, best_move: Option<usize>) -> Self {
        Self { score, best_move }
    }

    pub fn terminal(score: i32) -> Self {
        Self { score, best_move: None }
    }
}
