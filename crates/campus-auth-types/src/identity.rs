//! Caller identity forwarded by the gateway.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "x-campus-user-id";

/// The authenticated caller, read from `x-campus-user-id`.
///
/// As a required extractor a missing or malformed header is a 401. As
/// `Option<IdentityHeaders>` a missing header is `None` but a malformed one is
/// still rejected, so anonymous routes never silently drop a bad identity.
/// The caller's role is not carried here; handlers load the user row for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
}

impl IdentityHeaders {
    fn read(parts: &Parts) -> Result<Option<Self>, StatusCode> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(None);
        };
        value
            .to_str()
            .ok()
            .and_then(|s| s.trim().parse::<Uuid>().ok())
            .map(|user_id| Some(Self { user_id }))
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

// Both impls read synchronously and hand back a 'static future; an `async fn`
// body would borrow `parts` across the await.

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = Self::read(parts).and_then(|id| id.ok_or(StatusCode::UNAUTHORIZED));
        async move { identity }
    }
}

impl<S> OptionalFromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        let identity = Self::read(parts);
        async move { identity }
    }
}
