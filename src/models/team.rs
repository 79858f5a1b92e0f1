//! Team assignment output models.

use serde::{Deserialize, Serialize};

/// One participant's placement in a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAssignmentRow {
    /// 1-based team number
    pub team_index: usize,
    pub name: String,
    pub adjusted_score: f64,
    /// Total of the whole team, repeated on every row of that team
    pub team_total: f64,
}

/// Imbalance summary of one partition. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamMetrics {
    pub diff_sum: f64,
    pub diff_avg: f64,
    pub diff_top2: f64,
    pub diff_bottom2: f64,
    pub variance_of_sums: f64,
    pub score: f64,
}

/// Rows plus metrics for one "make teams" request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamResult {
    pub rows: Vec<TeamAssignmentRow>,
    pub metrics: TeamMetrics,
}

impl TeamResult {
    /// The result returned when fewer than two participants resolve.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct teams present in the rows.
    pub fn team_count(&self) -> usize {
        self.rows.iter().map(|r| r.team_index).max().unwrap_or(0)
    }

    /// Rows belonging to one team (1-based).
    pub fn team(&self, team_index: usize) -> impl Iterator<Item = &TeamAssignmentRow> {
        self.rows.iter().filter(move |r| r.team_index == team_index)
    }
}
