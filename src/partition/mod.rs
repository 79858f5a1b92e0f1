//! Greedy team partitioning.
//!
//! Participants are placed one at a time, strongest first, onto whichever
//! team keeps the spread between the largest and smallest team total
//! lowest. Equally good teams are resolved through a [`TieBreaker`].

mod tie_break;

pub use tie_break::*;

use std::cmp::Ordering;

use crate::calculate::round1;
use crate::metrics::calculate_metrics;
use crate::models::{Participant, TeamAssignmentRow, TeamResult};
use crate::roster::RosterStore;

/// Selections of this size or larger are split into three teams.
pub const THREE_TEAM_THRESHOLD: usize = 9;

/// Trial imbalances closer than this are treated as equal.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Number of teams for a selection of `selected` participants.
pub fn decide_team_count(selected: usize) -> usize {
    if selected >= THREE_TEAM_THRESHOLD {
        3
    } else {
        2
    }
}

/// Teams and their running totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    teams: Vec<Vec<Participant>>,
    sums: Vec<f64>,
}

impl Partition {
    pub fn new(team_count: usize) -> Self {
        Self {
            teams: vec![Vec::new(); team_count],
            sums: vec![0.0; team_count],
        }
    }

    pub fn teams(&self) -> &[Vec<Participant>] {
        &self.teams
    }

    /// Unrounded team totals, in team order.
    pub fn sums(&self) -> &[f64] {
        &self.sums
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    fn place(&mut self, team: usize, participant: Participant) {
        self.sums[team] += participant.adjusted_score;
        self.teams[team].push(participant);
    }

    /// Output rows, ordered by team and then by descending score.
    pub fn to_rows(&self) -> Vec<TeamAssignmentRow> {
        let mut rows: Vec<TeamAssignmentRow> = self
            .teams
            .iter()
            .zip(&self.sums)
            .enumerate()
            .flat_map(|(idx, (team, sum))| {
                let team_total = round1(*sum);
                team.iter().map(move |p| TeamAssignmentRow {
                    team_index: idx + 1,
                    name: p.name.clone(),
                    adjusted_score: round1(p.adjusted_score),
                    team_total,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            a.team_index
                .cmp(&b.team_index)
                .then_with(|| b.adjusted_score.total_cmp(&a.adjusted_score))
        });
        rows
    }
}

/// Max team total minus min team total.
pub fn spread(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    max - min
}

/// Teams on which adding `score` gives the lowest resulting spread.
///
/// Every index within [`TIE_TOLERANCE`] of the best spread is returned,
/// in ascending team order.
pub fn best_teams(sums: &[f64], score: f64) -> Vec<usize> {
    let mut best = f64::MAX;
    let mut candidates = Vec::new();
    let mut trial = sums.to_vec();

    for team in 0..sums.len() {
        trial[team] += score;
        let imbalance = spread(&trial);
        trial[team] = sums[team];

        if imbalance + TIE_TOLERANCE < best {
            best = imbalance;
            candidates.clear();
            candidates.push(team);
        } else if (imbalance - best).abs() < TIE_TOLERANCE {
            candidates.push(team);
        }
    }

    candidates
}

/// Strongest first; equal scores by ascending name.
pub fn sort_for_assignment(participants: &mut [Participant]) {
    participants.sort_by(|a, b| {
        match b.adjusted_score.total_cmp(&a.adjusted_score) {
            Ordering::Equal => a.name.cmp(&b.name),
            other => other,
        }
    });
}

/// Greedily distribute `participants` over `team_count` teams.
pub fn assign<T: TieBreaker>(
    mut participants: Vec<Participant>,
    team_count: usize,
    tie_breaker: &mut T,
) -> Partition {
    let mut partition = Partition::new(team_count);
    if team_count == 0 {
        return partition;
    }

    sort_for_assignment(&mut participants);

    for participant in participants {
        let candidates = best_teams(&partition.sums, participant.adjusted_score);
        let team = match candidates.len() {
            0 => 0,
            1 => candidates[0],
            n => {
                let picked = candidates[tie_breaker.pick(n).min(n - 1)];
                tracing::debug!(
                    "Tie between teams {:?} for {}, picked {}",
                    candidates.iter().map(|t| t + 1).collect::<Vec<_>>(),
                    participant.name,
                    picked + 1
                );
                picked
            }
        };

        tracing::trace!(
            "Placing {} ({:.1}) on team {}",
            participant.name,
            participant.adjusted_score,
            team + 1
        );
        partition.place(team, participant);
    }

    partition
}

/// Resolve `selected` against the roster and split them into balanced teams.
///
/// Unknown names are dropped. Fewer than two resolved participants give
/// [`TeamResult::empty`].
pub fn make_teams<S, T>(roster: &RosterStore, selected: &[S], tie_breaker: &mut T) -> TeamResult
where
    S: AsRef<str>,
    T: TieBreaker,
{
    let resolved: Vec<Participant> = selected
        .iter()
        .filter_map(|name| roster.lookup(name.as_ref()).cloned())
        .collect();

    if resolved.len() < selected.len() {
        tracing::debug!(
            "Dropped {} unknown name(s) from selection",
            selected.len() - resolved.len()
        );
    }

    if resolved.len() < 2 {
        return TeamResult::empty();
    }

    let team_count = decide_team_count(resolved.len());
    let partition = assign(resolved, team_count, tie_breaker);
    let metrics = calculate_metrics(&partition);

    tracing::debug!(
        "Formed {} teams, totals {:?}, score {:.1}",
        partition.team_count(),
        partition.sums().iter().map(|s| round1(*s)).collect::<Vec<_>>(),
        metrics.score
    );

    TeamResult {
        rows: partition.to_rows(),
        metrics,
    }
}
