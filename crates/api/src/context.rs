use perkhub_auth::{Role, Session};
use perkhub_core::{TenantId, UserId};

/// Tenant context for a request.
///
/// This is immutable and must be present for all authenticated routes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TenantContext {
    tenant_id: TenantId,
}

impl TenantContext {
    pub fn new(tenant_id: TenantId) -> Self {
        Self { tenant_id }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}

/// Session context for a request (authenticated identity + role).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session: Session,
}

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user_id(&self) -> UserId {
        self.session.user_id
    }

    pub fn role(&self) -> Role {
        self.session.role
    }
}
