//! Score adjustment.
//!
//! Turns a win/loss record into a coarse score delta and combines it with
//! a participant's base score:
//! - Win rate from games/wins
//! - Seven-bucket win rate adjustment
//! - One-decimal rounding shared by every derived number in the crate

/// Calculate win rate from games/wins.
pub fn calculate_win_rate(games: u32, wins: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        wins as f64 / games as f64
    }
}

/// Score delta for a win/loss record.
///
/// Buckets are evaluated top-down and the first match wins. A participant
/// without games gets no adjustment.
pub fn win_rate_adjustment(games: u32, wins: u32) -> f64 {
    if games == 0 {
        return 0.0;
    }

    let win_rate = calculate_win_rate(games, wins);
    if win_rate >= 0.80 {
        1.0
    } else if win_rate >= 0.65 {
        0.6
    } else if win_rate >= 0.55 {
        0.3
    } else if win_rate >= 0.45 {
        0.0
    } else if win_rate >= 0.35 {
        -0.3
    } else if win_rate >= 0.20 {
        -0.6
    } else {
        -1.0
    }
}

/// Round to one decimal place, ties away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `round1(base_score + win_rate_adjustment(games, wins))`.
pub fn adjusted_score(base_score: f64, games: u32, wins: u32) -> f64 {
    round1(base_score + win_rate_adjustment(games, wins))
}
