//! Plain-text rendering of participants and team results.

use std::fmt::Write;

use crate::models::{Participant, TeamMetrics, TeamResult};

/// One `name (base->adjusted)` line per participant.
pub fn render_participants<'a, I>(participants: I) -> String
where
    I: IntoIterator<Item = &'a Participant>,
{
    let mut out = String::new();
    for p in participants {
        let _ = writeln!(out, "{}", p);
    }
    out
}

/// Assignment table, one row per participant.
pub fn render_table(result: &TeamResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6} {:<16} {:>6} {:>10}", "Team", "Name", "Score", "Team Sum");
    for row in &result.rows {
        let _ = writeln!(
            out,
            "{:<6} {:<16} {:>6.1} {:>10.1}",
            row.team_index, row.name, row.adjusted_score, row.team_total
        );
    }
    out
}

/// Metrics log, one `key: value` line per measure.
pub fn render_metrics(metrics: &TeamMetrics) -> String {
    format!(
        "diff_sum: {:.1}\ndiff_avg: {:.1}\ndiff_top2: {:.1}\ndiff_bottom2: {:.1}\nvar_sum: {:.1}\nscore: {:.1}\n",
        metrics.diff_sum,
        metrics.diff_avg,
        metrics.diff_top2,
        metrics.diff_bottom2,
        metrics.variance_of_sums,
        metrics.score
    )
}

/// Table followed by the metrics log.
pub fn render_result(result: &TeamResult) -> String {
    if result.is_empty() {
        return "No teams formed\n".to_string();
    }
    format!("{}\n{}", render_table(result), render_metrics(&result.metrics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Record, TeamAssignmentRow};
    use pretty_assertions::assert_eq;

    fn sample() -> TeamResult {
        TeamResult {
            rows: vec![
                TeamAssignmentRow {
                    team_index: 1,
                    name: "a".to_string(),
                    adjusted_score: 4.4,
                    team_total: 4.4,
                },
                TeamAssignmentRow {
                    team_index: 2,
                    name: "b".to_string(),
                    adjusted_score: 3.0,
                    team_total: 3.0,
                },
            ],
            metrics: TeamMetrics {
                diff_sum: 1.4,
                diff_avg: 1.4,
                diff_top2: 1.4,
                diff_bottom2: 1.4,
                variance_of_sums: 0.5,
                score: 6.1,
            },
        }
    }

    #[test]
    fn test_render_participants() {
        let players = vec![
            Participant::new("고한솔", 5.0, Record::new(12, 3)),
            Participant::new("조재경", 2.0, Record::default()),
        ];
        assert_eq!(
            render_participants(&players),
            "고한솔 (5.0->4.4)\n조재경 (2.0->2.0)\n"
        );
    }

    #[test]
    fn test_render_metrics() {
        assert_eq!(
            render_metrics(&sample().metrics),
            "diff_sum: 1.4\ndiff_avg: 1.4\ndiff_top2: 1.4\ndiff_bottom2: 1.4\nvar_sum: 0.5\nscore: 6.1\n"
        );
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Team"));
        assert!(lines[1].starts_with("1"));
        assert!(lines[1].contains("4.4"));
        assert!(lines[2].starts_with("2"));
        assert!(lines[2].ends_with("3.0"));
    }

    #[test]
    fn test_render_empty_result() {
        assert_eq!(render_result(&TeamResult::empty()), "No teams formed\n");
    }

    #[test]
    fn test_render_result_contains_both_sections() {
        let out = render_result(&sample());
        assert!(out.contains("Team Sum"));
        assert!(out.contains("score: 6.1"));
    }
}
