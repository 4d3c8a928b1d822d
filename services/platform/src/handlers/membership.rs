use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use campus_auth_types::identity::IdentityHeaders;

use crate::error::PlatformError;
use crate::handlers::caller;
use crate::state::AppState;
use crate::usecase::membership::{
    JoinCourseDepartmentFacultyUseCase, JoinDepartmentFacultyUseCase,
    LeaveCourseDepartmentFacultyUseCase, LeaveDepartmentFacultyUseCase,
};

// ── PUT /users/@me/department-faculties/{id} ─────────────────────────────────

pub async fn join_department_faculty(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(department_faculty_id): Path<Uuid>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = JoinDepartmentFacultyUseCase {
        repo: state.membership_repo(),
    };
    usecase.execute(&actor, department_faculty_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /users/@me/department-faculties/{id} ──────────────────────────────

pub async fn leave_department_faculty(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(department_faculty_id): Path<Uuid>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = LeaveDepartmentFacultyUseCase {
        repo: state.membership_repo(),
    };
    usecase.execute(&actor, department_faculty_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PUT /users/@me/course-department-faculties/{id} ──────────────────────────

pub async fn join_course_department_faculty(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(course_department_faculty_id): Path<Uuid>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = JoinCourseDepartmentFacultyUseCase {
        repo: state.membership_repo(),
    };
    usecase.execute(&actor, course_department_faculty_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /users/@me/course-department-faculties/{id} ───────────────────────

pub async fn leave_course_department_faculty(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(course_department_faculty_id): Path<Uuid>,
) -> Result<StatusCode, PlatformError> {
    let actor = caller(&state, &identity).await?;
    let usecase = LeaveCourseDepartmentFacultyUseCase {
        repo: state.membership_repo(),
    };
    usecase.execute(&actor, course_department_faculty_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
