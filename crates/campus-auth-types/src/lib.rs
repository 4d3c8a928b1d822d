//! Auth types shared across campus services.
//!
//! Provides the `IdentityHeaders` extractor for gateway-injected identity.

pub mod identity;
