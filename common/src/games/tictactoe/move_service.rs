use serde::Serialize;

use crate::{log, log_verbose};
use super::board::Board;
use super::errors::MoveServiceError;
use super::minimax::best_move_with_stats;
use super::opening::opening_move;
use super::settings::MoveServiceConfig;
use super::types::{GameOutcome, Side};
use super::validate::{normalize_board, validate_board, SideLabels};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub move_index: Option<usize>,
    pub board: Vec<String>,
    pub winner: Option<String>,
    pub draw: bool,
    pub next_player: Option<String>,
}

/// Stateless front door of the engine: takes a raw board from a caller,
/// plays the best move for whoever is to move and reports the result.
#[derive(Debug, Clone, Default)]
pub struct MoveService {
    config: MoveServiceConfig,
}

impl MoveService {
    pub fn new(config: MoveServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MoveServiceConfig {
        &self.config
    }

    pub fn compute_move<S: AsRef<str>>(
        &self,
        raw_board: &[S],
        side_a_label: &str,
        side_b_label: &str,
    ) -> Result<MoveResponse, MoveServiceError> {
        let labels = SideLabels::new(side_a_label, side_b_label)?;
        let board = normalize_board(raw_board, &labels)?;
        validate_board(&board)?;

        let outcome = board.outcome();
        if outcome.is_terminal() {
            log_verbose!("Board already finished ({:?}), nothing to play", outcome);
            return Ok(build_response(None, &board, outcome, &labels));
        }

        let side = board.side_to_move()?;
        let Some(index) = self.choose_move(&board, side) else {
            return Ok(build_response(None, &board, outcome, &labels));
        };

        let next_board = board.apply(index, side)?;
        let next_outcome = next_board.outcome();
        log!(
            "{} plays {} -> {:?}",
            labels.label(side),
            index,
            next_outcome
        );

        Ok(build_response(Some(index), &next_board, next_outcome, &labels))
    }

    fn choose_move(&self, board: &Board, side: Side) -> Option<usize> {
        if self.config.opening_heuristic {
            if let Some(index) = opening_move(board) {
                log_verbose!("Opening shortcut picks {}", index);
                return Some(index);
            }
        }

        let (result, stats) = best_move_with_stats(board, side, side);
        log_verbose!(
            "Search picked {:?} with score {} ({} nodes, {} cutoffs)",
            result.best_move,
            result.score,
            stats.nodes,
            stats.cutoffs
        );
        result.best_move
    }
}

fn build_response(
    move_index: Option<usize>,
    board: &Board,
    outcome: GameOutcome,
    labels: &SideLabels<'_>,
) -> MoveResponse {
    let next_player = if outcome.is_terminal() {
        None
    } else {
        board.side_to_move().ok().map(|side| labels.label(side).to_string())
    };

    MoveResponse {
        move_index,
        board: board
            .cells()
            .iter()
            .map(|&cell| labels.token_for(cell).to_string())
            .collect(),
        winner: outcome.winner().map(|side| labels.label(side).to_string()),
        draw: outcome == GameOutcome::Draw,
        next_player,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::errors::InvalidBoardError;

    fn service() -> MoveService {
        MoveService::default()
    }

    fn searching_service() -> MoveService {
        MoveService::new(MoveServiceConfig {
            opening_heuristic: false,
            ..MoveServiceConfig::default()
        })
    }

    fn tokens(layout: &str) -> Vec<String> {
        layout
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == '.' { String::new() } else { c.to_string() })
            .collect()
    }

    #[test]
    fn test_empty_board_takes_center() {
        let response = service().compute_move(&tokens("... ... ..."), "X", "O").unwrap();

        assert_eq!(response.move_index, Some(4));
        assert_eq!(response.board, tokens("... .X. ..."));
        assert_eq!(response.winner, None);
        assert!(!response.draw);
        assert_eq!(response.next_player.as_deref(), Some("O"));
    }

    #[test]
    fn test_empty_board_without_shortcut_uses_lowest_index_tie_break() {
        let response = searching_service()
            .compute_move(&tokens("... ... ..."), "X", "O")
            .unwrap();

        assert_eq!(response.move_index, Some(0));
    }

    #[test]
    fn test_completes_winning_line() {
        let response = service().compute_move(&tokens("XX. OO. ..."), "X", "O").unwrap();

        assert_eq!(response.move_index, Some(2));
        assert_eq!(response.winner.as_deref(), Some("X"));
        assert!(!response.draw);
        assert_eq!(response.next_player, None);
    }

    #[test]
    fn test_second_side_blocks() {
        let response = service().compute_move(&tokens("XX. .O. ..."), "X", "O").unwrap();

        assert_eq!(response.move_index, Some(2));
        assert_eq!(response.board, tokens("XXO .O. ..."));
        assert_eq!(response.next_player.as_deref(), Some("X"));
    }

    #[test]
    fn test_last_cell_ends_in_draw() {
        let response = service().compute_move(&tokens("XOX XOO OX."), "X", "O").unwrap();

        assert_eq!(response.move_index, Some(8));
        assert!(response.draw);
        assert_eq!(response.winner, None);
        assert_eq!(response.next_player, None);
    }

    #[test]
    fn test_full_board_returns_without_move() {
        let response = service().compute_move(&tokens("XOX XOO OXX"), "X", "O").unwrap();

        assert_eq!(response.move_index, None);
        assert!(response.draw);
        assert_eq!(response.board, tokens("XOX XOO OXX"));
        assert_eq!(response.next_player, None);
    }

    #[test]
    fn test_won_board_returns_without_move() {
        let response = service().compute_move(&tokens("OOO XX. X.X"), "X", "O").unwrap();

        assert_eq!(response.move_index, None);
        assert_eq!(response.winner.as_deref(), Some("O"));
        assert!(!response.draw);
    }

    #[test]
    fn test_custom_labels_and_foreign_tokens() {
        let raw = ["cat", "cat", "?", "dog", "dog", "", "-", "X", "O"];
        let response = service().compute_move(&raw, "cat", "dog").unwrap();

        assert_eq!(response.move_index, Some(2));
        assert_eq!(response.winner.as_deref(), Some("cat"));
        assert_eq!(
            response.board,
            vec!["cat", "cat", "cat", "dog", "dog", "", "", "", ""]
        );
    }

    #[test]
    fn test_rejects_wrong_length() {
        let error = service().compute_move(&tokens("... ..."), "X", "O").unwrap_err();

        assert_eq!(
            error,
            MoveServiceError::InvalidBoard(InvalidBoardError::Length { expected: 9, actual: 6 })
        );
    }

    #[test]
    fn test_rejects_two_winners() {
        let error = service().compute_move(&tokens("XXX OOO ..."), "X", "O").unwrap_err();

        assert_eq!(error, MoveServiceError::InvalidBoard(InvalidBoardError::BothSidesWin));
    }

    #[test]
    fn test_rejects_impossible_turn_order() {
        let error = service().compute_move(&tokens("XXX ... ..."), "X", "O").unwrap_err();

        assert_eq!(
            error,
            MoveServiceError::InvalidBoard(InvalidBoardError::TurnOrder { side_a: 3, side_b: 0 })
        );
    }

    #[test]
    fn test_rejects_identical_labels() {
        let error = service().compute_move(&tokens("... ... ..."), "X", "X").unwrap_err();

        assert_eq!(error, MoveServiceError::InvalidBoard(InvalidBoardError::Labels));
    }

    #[test]
    fn test_service_games_always_draw() {
        let service = service();
        let mut board = tokens("... ... ...");
        loop {
            let response = service.compute_move(&board, "X", "O").unwrap();
            board = response.board;
            if response.next_player.is_none() {
                assert!(response.draw);
                assert_eq!(response.winner, None);
                break;
            }
        }
    }

    #[test]
    fn test_response_serializes_with_move_field() {
        let response = service().compute_move(&tokens("XOX XOO OXX"), "X", "O").unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["move"], serde_json::Value::Null);
        assert_eq!(json["draw"], serde_json::Value::Bool(true));
        assert_eq!(json["winner"], serde_json::Value::Null);
        assert_eq!(json["next_player"], serde_json::Value::Null);
        assert_eq!(json["board"][0], "X");
    }
}
