//! Imbalance metrics for a finished partition.
//!
//! Every measure is a max-minus-min spread across teams (or a variance)
//! rounded to one decimal; `score` adds them up into a single number
//! where lower means better balanced.

use crate::calculate::round1;
use crate::models::{Participant, TeamMetrics};
use crate::partition::{spread, Partition};

/// Team total divided by team size, 0 for an empty team.
pub fn team_average(team: &[Participant], total: f64) -> f64 {
    if team.is_empty() {
        0.0
    } else {
        total / team.len() as f64
    }
}

/// Sum of the two highest scores in a team (fewer if the team is smaller).
pub fn top2_sum(team: &[Participant]) -> f64 {
    sorted_scores(team).iter().rev().take(2).sum()
}

/// Sum of the two lowest scores in a team (fewer if the team is smaller).
pub fn bottom2_sum(team: &[Participant]) -> f64 {
    sorted_scores(team).iter().take(2).sum()
}

fn sorted_scores(team: &[Participant]) -> Vec<f64> {
    let mut scores: Vec<f64> = team.iter().map(|p| p.adjusted_score).collect();
    scores.sort_by(f64::total_cmp);
    scores
}

/// Population variance (mean squared deviation from the mean).
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// Compute all imbalance measures for `partition`.
pub fn calculate_metrics(partition: &Partition) -> TeamMetrics {
    let sums = partition.sums();
    if sums.is_empty() {
        return TeamMetrics::default();
    }

    let teams = partition.teams();
    let averages: Vec<f64> = teams
        .iter()
        .zip(sums)
        .map(|(team, total)| team_average(team, *total))
        .collect();
    let top2: Vec<f64> = teams.iter().map(|t| top2_sum(t)).collect();
    let bottom2: Vec<f64> = teams.iter().map(|t| bottom2_sum(t)).collect();

    let diff_sum = round1(spread(sums));
    let diff_avg = round1(spread(&averages));
    let diff_top2 = round1(spread(&top2));
    let diff_bottom2 = round1(spread(&bottom2));
    let variance_of_sums = round1(population_variance(sums));

    TeamMetrics {
        diff_sum,
        diff_avg,
        diff_top2,
        diff_bottom2,
        variance_of_sums,
        score: round1(diff_sum + diff_avg + diff_top2 + diff_bottom2 + variance_of_sums),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use crate::partition::{assign, FirstCandidate};

    fn team(scores: &[f64]) -> Vec<Participant> {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| Participant::new(format!("p{}", i), *s, Record::default()))
            .collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_team_average() {
        assert_eq!(team_average(&team(&[4.0, 2.0]), 6.0), 3.0);
        assert_eq!(team_average(&[], 0.0), 0.0);
    }

    #[test]
    fn test_top_and_bottom_two() {
        let t = team(&[3.0, 6.0, 4.5, 2.0]);
        assert_eq!(top2_sum(&t), 10.5);
        assert_eq!(bottom2_sum(&t), 5.0);

        let single = team(&[3.5]);
        assert_eq!(top2_sum(&single), 3.5);
        assert_eq!(bottom2_sum(&single), 3.5);

        assert_eq!(top2_sum(&[]), 0.0);
    }

    #[test]
    fn test_population_variance() {
        assert!(close(population_variance(&[4.4, 3.0]), 0.49));
        assert_eq!(population_variance(&[5.0, 5.0, 5.0]), 0.0);
        assert_eq!(population_variance(&[]), 0.0);
    }

    #[test]
    fn test_metrics_empty_partition() {
        assert_eq!(calculate_metrics(&Partition::default()), TeamMetrics::default());
    }

    #[test]
    fn test_metrics_two_singletons() {
        let partition = assign(team(&[4.4, 3.0]), 2, &mut FirstCandidate);
        let m = calculate_metrics(&partition);

        assert!(close(m.diff_sum, 1.4));
        assert!(close(m.diff_avg, 1.4));
        assert!(close(m.diff_top2, 1.4));
        assert!(close(m.diff_bottom2, 1.4));
        assert!(close(m.variance_of_sums, 0.5));
        assert!(close(m.score, 6.1));
    }

    #[test]
    fn test_metrics_uneven_team_sizes() {
        // 6.0 | 3.0 + 2.0 + 1.0
        let partition = assign(team(&[6.0, 3.0, 2.0, 1.0]), 2, &mut FirstCandidate);
        assert_eq!(partition.sums(), &[6.0, 6.0]);

        let m = calculate_metrics(&partition);
        assert_eq!(m.diff_sum, 0.0);
        assert_eq!(m.diff_avg, 4.0);
        assert_eq!(m.diff_top2, 1.0);
        assert_eq!(m.diff_bottom2, 3.0);
        assert_eq!(m.variance_of_sums, 0.0);
        assert_eq!(m.score, 8.0);
    }

    #[test]
    fn test_metrics_with_empty_team() {
        let partition = assign(team(&[5.0]), 2, &mut FirstCandidate);
        let m = calculate_metrics(&partition);

        assert_eq!(m.diff_sum, 5.0);
        assert_eq!(m.diff_avg, 5.0);
        assert!(m.score.is_finite());
    }
}
