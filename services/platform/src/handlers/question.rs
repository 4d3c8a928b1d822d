use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_auth_types::identity::IdentityHeaders;
use campus_domain::pagination::PageRequest;

use crate::domain::types::{Question, Tag};
use crate::error::PlatformError;
use crate::handlers::caller;
use crate::state::AppState;
use crate::usecase::question::{
    AttachQuestionTagUseCase, CreateQuestionInput, CreateQuestionUseCase, DeleteQuestionUseCase,
    DetachQuestionTagUseCase, GetQuestionUseCase, ListQuestionsUseCase, UpdateQuestionInput,
    UpdateQuestionUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct TagResponse {
    pub id: String,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name,
        }
    }
}

#[derive(Serialize)]
pub struct QuestionResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagResponse>>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.to_string(),
            user_id: question.user_id.to_string(),
            title: question.title,
            body: question.body,
            tags: None,
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}

// ── GET /questions ───────────────────────────────────────────────────────────

pub async fn list_questions(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<QuestionResponse>>, PlatformError> {
    let page: PageRequest = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| PlatformError::MissingData)?
        .unwrap_or_default();
    let actor = caller(&state, &identity).await?;
    let usecase = ListQuestionsUseCase {
        repo: state.question_repo(),
    };
    let questions = usecase.execute(&actor, page).await?;
    Ok(Json(questions.into_iter().map(Into::into).collect()))
}

// ── POST /questions ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub body: String,
}

pub async fn create_question(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<QuestionResponse>), PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = CreateQuestionUseCase {
        repo: state.question_repo(),
    };
    let question = usecase
        .execute(
            &actor,
            CreateQuestionInput {
                title: body.title,
                body: body.body,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(question.into())))
}

// ── GET /questions/{id} ──────────────────────────────────────────────────────

pub async fn get_question(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(question_id): Path<Uuid>,
) -> Result<Json<QuestionResponse>, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = GetQuestionUseCase {
        repo: state.question_repo(),
    };
    let details = usecase.execute(&actor, question_id).await?;
    let mut response = QuestionResponse::from(details.question);
    response.tags = Some(details.tags.into_iter().map(Into::into).collect());
    Ok(Json(response))
}

// ── PATCH /questions/{id} ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateQuestionRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

pub async fn update_question(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(question_id): Path<Uuid>,
    Json(body): Json<UpdateQuestionRequest>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = UpdateQuestionUseCase {
        repo: state.question_repo(),
    };
    usecase
        .execute(
            &actor,
            question_id,
            UpdateQuestionInput {
                title: body.title,
                body: body.body,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /questions/{id} ───────────────────────────────────────────────────

pub async fn delete_question(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(question_id): Path<Uuid>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = DeleteQuestionUseCase {
        repo: state.question_repo(),
    };
    usecase.execute(&actor, question_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PUT /questions/{id}/tags/{tag_id} ────────────────────────────────────────

pub async fn attach_question_tag(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((question_id, tag_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = AttachQuestionTagUseCase {
        repo: state.question_repo(),
    };
    usecase.execute(&actor, question_id, tag_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /questions/{id}/tags/{tag_id} ─────────────────────────────────────

pub async fn detach_question_tag(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((question_id, tag_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = DetachQuestionTagUseCase {
        repo: state.question_repo(),
    };
    usecase.execute(&actor, question_id, tag_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
