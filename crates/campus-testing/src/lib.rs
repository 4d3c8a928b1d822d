//! Test utilities for campus services.
//!
//! Provides `MockAuth` identity headers and the `UserFactory` for seeding
//! realistic user attributes. Test-only.

pub mod auth;
pub mod factory;
