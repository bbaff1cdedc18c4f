use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::validate::SideLabels;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveServiceConfig {
    /// Label of the side that moves first, used when a request names none.
    pub default_side_a_label: String,
    pub default_side_b_label: String,
    /// Answer the first two plies with the center instead of searching.
    pub opening_heuristic: bool,
    /// Log node and cutoff counts for every search.
    pub log_search_stats: bool,
}

impl Default for MoveServiceConfig {
    fn default() -> Self {
        Self {
            default_side_a_label: "X".to_string(),
            default_side_b_label: "O".to_string(),
            opening_heuristic: true,
            log_search_stats: false,
        }
    }
}

impl Validate for MoveServiceConfig {
    fn validate(&self) -> Result<(), String> {
        SideLabels::new(&self.default_side_a_label, &self.default_side_b_label)
            .map(|_| ())
            .map_err(|e| format!("default labels: {}", e))
    }
}
