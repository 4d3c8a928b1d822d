use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use campus_auth_types::identity::IdentityHeaders;

use crate::domain::types::{CourseDepartmentFaculty, Department, ModeratorProfile};
use crate::error::PlatformError;
use crate::handlers::caller;
use crate::state::AppState;
use crate::usecase::faculty::{
    AttachDepartmentUseCase, GetFacultyUseCase, ListFacultyCourseDepartmentFacultiesUseCase,
    ListFacultyModeratorsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id.to_string(),
            name: department.name,
        }
    }
}

#[derive(Serialize)]
pub struct FacultyResponse {
    pub id: String,
    pub name: String,
    pub university_id: String,
    pub departments: Vec<DepartmentResponse>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ModeratorResponse {
    pub id: String,
    pub faculty_id: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<ModeratorProfile> for ModeratorResponse {
    fn from(profile: ModeratorProfile) -> Self {
        Self {
            id: profile.id.0.to_string(),
            faculty_id: profile.faculty_id.to_string(),
            created_at: profile.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct CourseDepartmentFacultyResponse {
    pub id: String,
    pub course_id: String,
    pub department_faculty_id: String,
}

impl From<CourseDepartmentFaculty> for CourseDepartmentFacultyResponse {
    fn from(offering: CourseDepartmentFaculty) -> Self {
        Self {
            id: offering.id.to_string(),
            course_id: offering.course_id.to_string(),
            department_faculty_id: offering.department_faculty_id.to_string(),
        }
    }
}

// ── GET /faculties/{id} ──────────────────────────────────────────────────────

pub async fn get_faculty(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(faculty_id): Path<Uuid>,
) -> Result<Json<FacultyResponse>, PlatformError> {
    let usecase = GetFacultyUseCase {
        repo: state.faculty_repo(),
    };
    let details = usecase.execute(faculty_id).await?;
    Ok(Json(FacultyResponse {
        id: details.faculty.id.to_string(),
        name: details.faculty.name,
        university_id: details.faculty.university_id.to_string(),
        departments: details.departments.into_iter().map(Into::into).collect(),
        created_at: details.faculty.created_at,
        updated_at: details.faculty.updated_at,
    }))
}

// ── GET /faculties/{id}/moderators ───────────────────────────────────────────

pub async fn list_faculty_moderators(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(faculty_id): Path<Uuid>,
) -> Result<Json<Vec<ModeratorResponse>>, PlatformError> {
    let usecase = ListFacultyModeratorsUseCase {
        repo: state.faculty_repo(),
    };
    let moderators = usecase.execute(faculty_id).await?;
    Ok(Json(moderators.into_iter().map(Into::into).collect()))
}

// ── GET /faculties/{id}/course-department-faculties ──────────────────────────

pub async fn list_faculty_course_department_faculties(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(faculty_id): Path<Uuid>,
) -> Result<Json<Vec<CourseDepartmentFacultyResponse>>, PlatformError> {
    let usecase = ListFacultyCourseDepartmentFacultiesUseCase {
        repo: state.faculty_repo(),
    };
    let offerings = usecase.execute(faculty_id).await?;
    Ok(Json(offerings.into_iter().map(Into::into).collect()))
}

// ── PUT /faculties/{id}/departments/{department_id} ──────────────────────────

pub async fn attach_department(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((faculty_id, department_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = AttachDepartmentUseCase {
        repo: state.faculty_repo(),
    };
    usecase.execute(&actor, faculty_id, department_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
