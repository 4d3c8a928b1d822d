//! Cross-cutting helpers shared by campus services: tracing setup, request-id
//! middleware, env configuration and request-origin extraction.

pub mod config;
pub mod middleware;
pub mod origin;
pub mod serde;
pub mod tracing;
