use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_auth_types::identity::IdentityHeaders;
use campus_core::origin::RequestOrigin;

use crate::domain::types::{NewProfile, Profile, User, UserChanges};
use crate::error::PlatformError;
use crate::handlers::caller;
use crate::state::AppState;
use crate::usecase::delete_user::DeleteUserUseCase;
use crate::usecase::profile::GetProfileUseCase;
use crate::usecase::user::{
    ChangePasswordInput, ChangePasswordUseCase, GetUserUseCase, RegisterUserInput,
    RegisterUserUseCase, UpdateMeUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileResponse {
    Student {
        id: String,
        faculty_id: String,
        academic_year: i16,
        #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
        created_at: DateTime<Utc>,
        #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
        updated_at: DateTime<Utc>,
    },
    Moderator {
        id: String,
        faculty_id: String,
        #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
        created_at: DateTime<Utc>,
        #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
        updated_at: DateTime<Utc>,
    },
    Admin {
        id: String,
        #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
        created_at: DateTime<Utc>,
        #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
        updated_at: DateTime<Utc>,
    },
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Student(p) => ProfileResponse::Student {
                id: p.id.0.to_string(),
                faculty_id: p.faculty_id.to_string(),
                academic_year: p.academic_year,
                created_at: p.created_at,
                updated_at: p.updated_at,
            },
            Profile::Moderator(p) => ProfileResponse::Moderator {
                id: p.id.0.to_string(),
                faculty_id: p.faculty_id.to_string(),
                created_at: p.created_at,
                updated_at: p.updated_at,
            },
            Profile::Admin(p) => ProfileResponse::Admin {
                id: p.id.0.to_string(),
                created_at: p.created_at,
                updated_at: p.updated_at,
            },
        }
    }
}

/// Public view of a user. The password hash and the raw profile pair stay inside.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms_opt")]
    pub email_verified_at: Option<DateTime<Utc>>,
    pub gender: i16,
    pub gender_label: Option<&'static str>,
    pub blocked: bool,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub avatar: Option<String>,
    #[serde(rename = "type")]
    pub type_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileResponse>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn new(user: User, profile: Option<Profile>, origin: &RequestOrigin) -> Self {
        Self {
            avatar: user.avatar_url(&origin.base_url()),
            gender_label: user.gender_label(),
            type_label: user.type_label(),
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            email_verified_at: user.email_verified_at,
            gender: user.gender,
            blocked: user.blocked,
            address: user.address,
            mobile: user.mobile,
            profile: profile.map(ProfileResponse::from),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileRequest {
    Student {
        faculty_id: Uuid,
        #[serde(default = "first_year")]
        academic_year: i16,
    },
    Moderator {
        faculty_id: Uuid,
    },
    Admin,
}

fn first_year() -> i16 {
    1
}

impl From<ProfileRequest> for NewProfile {
    fn from(request: ProfileRequest) -> Self {
        match request {
            ProfileRequest::Student {
                faculty_id,
                academic_year,
            } => NewProfile::Student {
                faculty_id,
                academic_year,
            },
            ProfileRequest::Moderator { faculty_id } => NewProfile::Moderator { faculty_id },
            ProfileRequest::Admin => NewProfile::Admin,
        }
    }
}

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: i16,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub profile: Option<ProfileRequest>,
}

/// Open to anonymous callers; staff profiles need an identified admin.
pub async fn register_user(
    identity: Option<IdentityHeaders>,
    origin: RequestOrigin,
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), PlatformError> {
    let registrar = match identity {
        Some(identity) => Some(caller(&state, &identity).await?),
        None => None,
    };
    let usecase = RegisterUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(RegisterUserInput {
            name: body.name,
            email: body.email,
            password: body.password,
            gender: body.gender,
            address: body.address,
            mobile: body.mobile,
            profile: body.profile.map(NewProfile::from),
            registrar,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(UserResponse::new(user, None, &origin)),
    ))
}

// ── GET /users/@me ───────────────────────────────────────────────────────────

pub async fn get_me(
    identity: IdentityHeaders,
    origin: RequestOrigin,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, PlatformError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
        profiles: state.profile_repo(),
    };
    let details = usecase.execute(identity.user_id).await?;
    Ok(Json(UserResponse::new(
        details.user,
        details.profile,
        &origin,
    )))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    identity: IdentityHeaders,
    origin: RequestOrigin,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, PlatformError> {
    caller(&state, &identity).await?;
    let usecase = GetUserUseCase {
        users: state.user_repo(),
        profiles: state.profile_repo(),
    };
    let details = usecase.execute(user_id).await?;
    Ok(Json(UserResponse::new(
        details.user,
        details.profile,
        &origin,
    )))
}

// ── GET /users/{id}/profile ──────────────────────────────────────────────────

pub async fn get_profile(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, PlatformError> {
    caller(&state, &identity).await?;
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
        profiles: state.profile_repo(),
    };
    let profile = usecase.execute(user_id).await?;
    Ok(Json(profile.into()))
}

// ── PATCH /users/@me ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMeRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub gender: Option<i16>,
    pub avatar: Option<String>,
}

pub async fn update_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<UpdateMeRequest>,
) -> Result<StatusCode, PlatformError> {
    let usecase = UpdateMeUseCase {
        repo: state.user_repo(),
        storage: state.storage(),
    };
    usecase
        .execute(
            identity.user_id,
            UserChanges {
                name: body.name,
                address: body.address,
                mobile: body.mobile,
                gender: body.gender,
                avatar: body.avatar,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PUT /users/@me/password ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

pub async fn change_password(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<StatusCode, PlatformError> {
    let usecase = ChangePasswordUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(
            identity.user_id,
            ChangePasswordInput {
                current_password: body.current_password,
                new_password: body.new_password,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /users/{id} ───────────────────────────────────────────────────────

pub async fn delete_user(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = DeleteUserUseCase {
        graph: state.user_graph_repo(),
        storage: state.storage(),
    };
    usecase.execute(&actor, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
