use serde::{Deserialize, Serialize};

use perkhub_core::{TenantId, UserId};

use crate::{JwtClaims, Role};

/// The authenticated principal for the lifetime of a request.
///
/// Absence of a `Session` means "unauthenticated". The session is derived
/// from validated claims and is never stored by this crate; expiry is
/// enforced at claim-validation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub tenant_id: TenantId,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Session {
    pub fn from_claims(claims: &JwtClaims) -> Self {
        Self {
            user_id: claims.sub,
            tenant_id: claims.tenant_id,
            role: claims.role,
            first_name: claims.first_name.clone(),
            last_name: claims.last_name.clone(),
        }
    }

    /// Human-readable name for display surfaces, falling back to the user id.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.user_id.to_string(),
        }
    }
}
