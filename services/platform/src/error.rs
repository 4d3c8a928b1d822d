use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Platform service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("user not found")]
    UserNotFound,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("question not found")]
    QuestionNotFound,
    #[error("tag not found")]
    TagNotFound,
    #[error("question tag not found")]
    QuestionTagNotFound,
    #[error("faculty not found")]
    FacultyNotFound,
    #[error("department not found")]
    DepartmentNotFound,
    #[error("department faculty not found")]
    DepartmentFacultyNotFound,
    #[error("course department faculty not found")]
    CourseDepartmentFacultyNotFound,
    #[error("membership not found")]
    MembershipNotFound,
    #[error("event not found")]
    EventNotFound,
    #[error("interest not found")]
    InterestNotFound,
    #[error("comment not found")]
    CommentNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("tag already attached")]
    TagAlreadyAttached,
    #[error("department already attached")]
    DepartmentAlreadyAttached,
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid gender")]
    InvalidGender,
    #[error("invalid rate")]
    InvalidRate,
    #[error("invalid avatar path")]
    InvalidAvatar,
    #[error("invalid password")]
    InvalidPassword,
    #[error("missing data")]
    MissingData,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl PlatformError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::QuestionNotFound => "QUESTION_NOT_FOUND",
            Self::TagNotFound => "TAG_NOT_FOUND",
            Self::QuestionTagNotFound => "QUESTION_TAG_NOT_FOUND",
            Self::FacultyNotFound => "FACULTY_NOT_FOUND",
            Self::DepartmentNotFound => "DEPARTMENT_NOT_FOUND",
            Self::DepartmentFacultyNotFound => "DEPARTMENT_FACULTY_NOT_FOUND",
            Self::CourseDepartmentFacultyNotFound => "COURSE_DEPARTMENT_FACULTY_NOT_FOUND",
            Self::MembershipNotFound => "MEMBERSHIP_NOT_FOUND",
            Self::EventNotFound => "EVENT_NOT_FOUND",
            Self::InterestNotFound => "INTEREST_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::TagAlreadyAttached => "TAG_ALREADY_ATTACHED",
            Self::DepartmentAlreadyAttached => "DEPARTMENT_ALREADY_ATTACHED",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidGender => "INVALID_GENDER",
            Self::InvalidRate => "INVALID_RATE",
            Self::InvalidAvatar => "INVALID_AVATAR",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::MissingData => "MISSING_DATA",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for PlatformError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound
            | Self::ProfileNotFound
            | Self::QuestionNotFound
            | Self::TagNotFound
            | Self::QuestionTagNotFound
            | Self::FacultyNotFound
            | Self::DepartmentNotFound
            | Self::DepartmentFacultyNotFound
            | Self::CourseDepartmentFacultyNotFound
            | Self::MembershipNotFound
            | Self::EventNotFound
            | Self::InterestNotFound
            | Self::CommentNotFound => StatusCode::NOT_FOUND,
            Self::UserAlreadyExists | Self::TagAlreadyAttached | Self::DepartmentAlreadyAttached => {
                StatusCode::CONFLICT
            }
            Self::InvalidEmail
            | Self::InvalidGender
            | Self::InvalidRate
            | Self::InvalidAvatar
            | Self::InvalidPassword
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

/// Failure reported by a file-storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("path `{0}` escapes the storage root")]
    InvalidPath(String),
    #[error("storage i/o failed")]
    Io(#[from] std::io::Error),
}
