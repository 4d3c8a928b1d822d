use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use campus_auth_types::identity::IdentityHeaders;

use crate::error::PlatformError;
use crate::handlers::caller;
use crate::state::AppState;
use crate::usecase::engagement::{AddInterestUseCase, RateCommentUseCase, RemoveInterestUseCase};

// ── PUT /events/{id}/interest ────────────────────────────────────────────────

pub async fn add_interest(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = AddInterestUseCase {
        repo: state.engagement_repo(),
    };
    usecase.execute(&actor, event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /events/{id}/interest ─────────────────────────────────────────────

pub async fn remove_interest(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = RemoveInterestUseCase {
        repo: state.engagement_repo(),
    };
    usecase.execute(&actor, event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PUT /comments/{id}/rate ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RateCommentRequest {
    pub rate: i16,
}

pub async fn rate_comment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(comment_id): Path<Uuid>,
    Json(body): Json<RateCommentRequest>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = RateCommentUseCase {
        repo: state.engagement_repo(),
    };
    usecase.execute(&actor, comment_id, body.rate).await?;
    Ok(StatusCode::NO_CONTENT)
}
