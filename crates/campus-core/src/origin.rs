//! Request scheme and host, used to build absolute URLs for stored files.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::header::HOST;
use http::request::Parts;

/// Scheme and host the client used to reach the service.
///
/// Read from `x-forwarded-proto` / `x-forwarded-host` when a proxy sets them,
/// otherwise from the `Host` header (scheme defaults to `http`). Rejects with
/// 400 when no host can be determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: String,
}

impl RequestOrigin {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// `scheme://host`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    fn from_parts(parts: &Parts) -> Option<Self> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.split(',').next().unwrap_or(s).trim().to_owned())
                .filter(|s| !s.is_empty())
        };
        let scheme = header("x-forwarded-proto")
            .or_else(|| parts.uri.scheme_str().map(str::to_owned))
            .unwrap_or_else(|| "http".to_owned());
        let host = header("x-forwarded-host")
            .or_else(|| header(HOST.as_str()))
            .or_else(|| parts.uri.authority().map(|a| a.to_string()))?;
        Some(Self { scheme, host })
    }
}

impl<S> FromRequestParts<S> for RequestOrigin
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let origin = Self::from_parts(parts);
        async move { origin.ok_or(StatusCode::BAD_REQUEST) }
    }
}
