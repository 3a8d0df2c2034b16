use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use perkhub_auth::{JwtValidator, Session};

use crate::app::errors::json_error;
use crate::context::{SessionContext, TenantContext};

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtValidator>,
}

/// The resolved session for this request, if a valid bearer token was
/// presented. Attached to every request, public routes included, so the
/// navigation endpoint can decide for anonymous callers.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Session>);

/// Resolve the bearer token (if any) into a [`MaybeSession`] extension.
///
/// A missing, malformed, or expired token makes the request anonymous rather
/// than failing it; authenticated-only routes reject later via
/// [`require_session`].
pub async fn resolve_session(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let session = match extract_bearer(req.headers()) {
        Some(token) => match state.jwt.validate(token, Utc::now()) {
            Ok(claims) => Some(Session::from_claims(&claims)),
            Err(err) => {
                tracing::debug!(error = %err, "invalid bearer token; treating request as anonymous");
                None
            }
        },
        None => None,
    };

    req.extensions_mut().insert(MaybeSession(session));
    next.run(req).await
}

/// Reject anonymous requests and promote the session into tenant/session
/// request contexts.
pub async fn require_session(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let session = req
        .extensions()
        .get::<MaybeSession>()
        .and_then(|m| m.0.clone());

    match session {
        Some(session) => {
            req.extensions_mut()
                .insert(TenantContext::new(session.tenant_id));
            req.extensions_mut().insert(SessionContext::new(session));
            next.run(req).await
        }
        None => json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "authentication required",
        ),
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}
