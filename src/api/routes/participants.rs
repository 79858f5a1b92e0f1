use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::Participant;

#[derive(Debug, Deserialize)]
pub struct ParticipantsQuery {
    /// Case-insensitive name filter
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParticipantsResponse {
    pub participants: Vec<Participant>,
    pub total: usize,
}

pub async fn list_participants(
    State(state): State<AppState>,
    Query(query): Query<ParticipantsQuery>,
) -> Json<ParticipantsResponse> {
    let keyword = query.q.unwrap_or_default();
    let participants: Vec<Participant> = state.roster.filter(&keyword).cloned().collect();

    Json(ParticipantsResponse {
        total: participants.len(),
        participants,
    })
}

pub async fn get_participant(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Participant>, ApiError> {
    state
        .roster
        .lookup(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("participant {}", name)))
}
