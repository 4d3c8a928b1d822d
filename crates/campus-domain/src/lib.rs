//! Domain types shared across campus services.
//!
//! Pure types with no framework or database dependencies.

pub mod gender;
pub mod id;
pub mod pagination;
pub mod policy;
pub mod profile;
