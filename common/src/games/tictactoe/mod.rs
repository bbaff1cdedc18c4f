mod board;
mod errors;
mod minimax;
mod move_service;
mod opening;
mod settings;
mod types;
mod validate;
mod win_detector;

pub use board::{Board, BOARD_AREA, BOARD_SIDE, CENTER};
pub use errors::{IllegalMoveError, InvalidBoardError, MoveServiceError};
pub use minimax::{best_move, best_move_with_stats, terminal_score, SearchStats, DRAW_SCORE, WIN_SCORE};
pub use move_service::{MoveResponse, MoveService};
pub use opening::opening_move;
pub use settings::MoveServiceConfig;
pub use types::{Cell, GameOutcome, SearchResult, Side};
pub use validate::{normalize_board, validate_board, SideLabels};
pub use win_detector::{check_win, check_win_with_line, has_line, WinLine, WinningLine, LINE_COUNT, WIN_LINES};
