//! Roster store.
//!
//! The roster is two tables joined by name: players with a base score, and
//! game records. A player without a record is treated as `(0, 0)`. The
//! default roster is compiled in from `data/roster.toml`.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Participant, Record, TeamResult};
use crate::partition::{self, TieBreaker};

/// Roster table shipped with the binary.
pub const BUILTIN_ROSTER: &str = include_str!("../../data/roster.toml");

/// Errors that can occur while loading a roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse roster: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid roster entry: {0}")]
    InvalidEntry(String),
}

/// One row of the players table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    pub base_score: f64,
}

/// Raw roster file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterTable {
    #[serde(default)]
    pub players: Vec<PlayerEntry>,

    /// Game records keyed by player name
    #[serde(default)]
    pub records: HashMap<String, Record>,
}

impl RosterTable {
    pub fn from_toml_str(contents: &str) -> Result<Self, RosterError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        for entry in &self.players {
            if entry.name.trim().is_empty() {
                return Err(RosterError::InvalidEntry(
                    "player name must not be empty".to_string(),
                ));
            }
            if !entry.base_score.is_finite() {
                return Err(RosterError::InvalidEntry(format!(
                    "base score of {} is not a finite number",
                    entry.name
                )));
            }
        }
        Ok(())
    }
}

/// Immutable set of participants with derived scores.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    participants: Vec<Participant>,
    by_name: HashMap<String, usize>,
}

impl RosterStore {
    /// Build a store from already-scored participants, keeping their order.
    ///
    /// Names are not checked for duplicates; lookup resolves to the last one.
    pub fn new(participants: Vec<Participant>) -> Self {
        let by_name = participants
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.name.clone(), idx))
            .collect();
        Self {
            participants,
            by_name,
        }
    }

    /// Join players with records and derive every adjusted score.
    pub fn from_table(table: &RosterTable) -> Result<Self, RosterError> {
        table.validate()?;

        for (name, record) in &table.records {
            if !table.players.iter().any(|p| &p.name == name) {
                tracing::warn!("Ignoring record for unknown player {}", name);
            } else if record.wins > record.games {
                tracing::debug!(
                    "Record for {} has more wins ({}) than games ({})",
                    name,
                    record.wins,
                    record.games
                );
            }
        }

        let participants = table
            .players
            .iter()
            .map(|entry| {
                let record = table.records.get(&entry.name).copied().unwrap_or_default();
                Participant::new(entry.name.clone(), entry.base_score, record)
            })
            .collect();

        Ok(Self::new(participants))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, RosterError> {
        Self::from_table(&RosterTable::from_toml_str(contents)?)
    }

    /// Load a roster table from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, RosterError> {
        let contents = std::fs::read_to_string(path)?;
        let store = Self::from_toml_str(&contents)?;
        tracing::info!(
            "Loaded {} participants from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// The compiled-in roster.
    pub fn builtin() -> Result<Self, RosterError> {
        let store = Self::from_toml_str(BUILTIN_ROSTER)?;
        tracing::info!("Loaded {} built-in participants", store.len());
        Ok(store)
    }

    /// Roster file when given, built-in roster otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, RosterError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Self::builtin(),
        }
    }

    /// Every participant in roster order.
    pub fn all_participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn lookup(&self, name: &str) -> Option<&Participant> {
        self.by_name.get(name).map(|&idx| &self.participants[idx])
    }

    /// Participants whose name passes [`crate::matches_filter`].
    pub fn filter<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a Participant> + 'a {
        self.participants
            .iter()
            .filter(move |p| crate::matches_filter(&p.name, keyword))
    }

    /// Distinct selection: explicit names in first-occurrence order, then
    /// every participant matching `keyword` that is not already selected.
    pub fn select<I, S>(&self, names: I, keyword: Option<&str>) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selected: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !selected.contains(&name) {
                selected.push(name);
            }
        }

        if let Some(keyword) = keyword {
            for p in self.filter(keyword) {
                if !selected.contains(&p.name) {
                    selected.push(p.name.clone());
                }
            }
        }

        selected
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// See [`partition::make_teams`].
    pub fn make_teams<S, T>(&self, selected: &[S], tie_breaker: &mut T) -> TeamResult
    where
        S: AsRef<str>,
        T: TieBreaker,
    {
        partition::make_teams(self, selected, tie_breaker)
    }
}
