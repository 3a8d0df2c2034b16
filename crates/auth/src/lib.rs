//! `perkhub-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it models the
//! authenticated principal (the [`Session`]), the closed role enumeration, and
//! deterministic claim/role checks. Token signature verification sits behind
//! the [`JwtValidator`] trait so transports can be swapped in tests.

pub mod authorize;
pub mod claims;
pub mod jwt;
pub mod roles;
pub mod session;

pub use authorize::{AuthzError, authorize};
pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtValidator, TokenError};
pub use roles::Role;
pub use session::Session;
