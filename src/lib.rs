//! # Team Balancer
//!
//! Splits a selection of rated participants into two or three teams with
//! totals as even as possible.
//!
//! ## Architecture
//!
//! - **models**: Participants, assignment rows and metrics
//! - **calculate**: Win-rate score adjustment and rounding
//! - **roster**: Roster loading and lookup
//! - **partition**: Greedy team assignment with injectable tie-breaking
//! - **metrics**: Imbalance measures for a finished partition
//! - **report**: Plain-text rendering of participants and results
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod metrics;
pub mod models;
pub mod partition;
pub mod report;
pub mod roster;

pub use models::*;

/// Case-insensitive substring match used to filter participant names.
///
/// The keyword is trimmed first; an empty keyword matches every name.
pub fn matches_filter(name: &str, keyword: &str) -> bool {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&keyword.to_lowercase())
}
