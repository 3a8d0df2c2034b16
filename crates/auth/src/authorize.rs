use thiserror::Error;

use crate::{Role, Session};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role '{0}' is not permitted for this operation")]
    Forbidden(Role),
}

/// Authorize a session against an explicit role list.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
///
/// The check is strict set membership: an operation names every role it
/// accepts, and `SuperAdmin` is not a superset of `Admin`.
pub fn authorize(session: &Session, allowed: &[Role]) -> Result<(), AuthzError> {
    if allowed.contains(&session.role) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(session.role))
    }
}
