//! Roster participant model.

use serde::{Deserialize, Serialize};

use crate::calculate::adjusted_score;

/// Historical game record of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub games: u32,
    pub wins: u32,
}

impl Record {
    pub fn new(games: u32, wins: u32) -> Self {
        Self { games, wins }
    }
}

/// A rated roster participant.
///
/// The adjusted score is derived once from the base score and record and
/// never recomputed afterwards. Only [`Participant::new`] builds one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    /// Display name, also the lookup key
    pub name: String,

    /// Rating assigned in the roster table
    pub base_score: f64,

    /// Games played
    pub games: u32,

    /// Games won
    pub wins: u32,

    /// `round1(base_score + win_rate_adjustment(games, wins))`
    pub adjusted_score: f64,
}

impl Participant {
    pub fn new(name: impl Into<String>, base_score: f64, record: Record) -> Self {
        Self {
            name: name.into(),
            base_score,
            games: record.games,
            wins: record.wins,
            adjusted_score: adjusted_score(base_score, record.games, record.wins),
        }
    }

    pub fn record(&self) -> Record {
        Record::new(self.games, self.wins)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.1}->{:.1})",
            self.name, self.base_score, self.adjusted_score
        )
    }
}
