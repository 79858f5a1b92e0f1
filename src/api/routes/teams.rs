use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::TeamResult;

/// Minimum number of names a request must carry.
pub const MIN_SELECTION: usize = 2;

#[derive(Debug, Deserialize, Serialize)]
pub struct MakeTeamsRequest {
    pub names: Vec<String>,

    /// Overrides the configured tie-break seed
    #[serde(default)]
    pub seed: Option<u64>,
}

pub async fn make_teams(
    State(state): State<AppState>,
    Json(request): Json<MakeTeamsRequest>,
) -> Result<Json<TeamResult>, ApiError> {
    let names = state.roster.select(request.names, None);
    if names.len() < MIN_SELECTION {
        return Err(ApiError::BadRequest(format!(
            "Select at least {} participants",
            MIN_SELECTION
        )));
    }

    let mut tie_breaker = state.tie_breaker(request.seed);
    let result = state.roster.make_teams(&names, &mut tie_breaker);

    tracing::info!(
        "Made {} teams from {} selected names (score {:.1})",
        result.team_count(),
        names.len(),
        result.metrics.score
    );

    Ok(Json(result))
}
