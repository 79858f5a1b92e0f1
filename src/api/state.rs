use std::sync::Arc;

use crate::partition::RandomTieBreaker;
use crate::roster::RosterStore;

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterStore>,
    /// Tie-break seed applied when a request does not carry its own
    pub seed: Option<u64>,
}

impl AppState {
    pub fn new(roster: Arc<RosterStore>, seed: Option<u64>) -> Self {
        Self { roster, seed }
    }

    /// A fresh tie-breaker for one request.
    pub fn tie_breaker(&self, request_seed: Option<u64>) -> RandomTieBreaker {
        RandomTieBreaker::new(request_seed.or(self.seed))
    }
}
