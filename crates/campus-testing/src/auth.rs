//! Gateway identity for tests.
//!
//! The platform trusts `x-campus-user-id` as set by the gateway. `MockAuth`
//! produces that header so tests can call routes as any user.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use campus_auth_types::identity::USER_ID_HEADER;

/// The user a test request claims to be.
#[derive(Debug, Clone, Copy)]
pub struct MockAuth {
    pub user_id: Uuid,
}

impl MockAuth {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    /// A fresh, unknown caller.
    pub fn random() -> Self {
        Self::new(Uuid::now_v7())
    }

    /// The identity header as a name/value pair.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&self.user_id.to_string())
            .expect("uuid is a valid header value");
        (HeaderName::from_static(USER_ID_HEADER), value)
    }

    /// An identity header the gateway would never send.
    pub fn malformed_header() -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_static("not-a-uuid"),
        )
    }

    pub fn headers(&self) -> HeaderMap {
        let (name, value) = self.header();
        HeaderMap::from_iter([(name, value)])
    }
}
