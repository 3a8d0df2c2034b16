use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::dto::NavigateQuery;
use crate::app::services::AppServices;
use crate::middleware::MaybeSession;

/// GET /navigate?path=X - resolve a navigation to a gate outcome.
///
/// Public on purpose: anonymous callers get redirect-to-login decisions
/// rather than a 401. The outcome travels as JSON; the shell performs the
/// actual navigation.
pub async fn navigate(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(MaybeSession(session)): Extension<MaybeSession>,
    Query(query): Query<NavigateQuery>,
) -> axum::response::Response {
    let outcome = services.decide(&query.path, session.as_ref());

    let mut body = serde_json::json!({
        "path": query.path,
        "outcome": outcome.as_str(),
    });
    if let Some(location) = outcome.location() {
        body["location"] = serde_json::json!(location);
    }

    (StatusCode::OK, Json(body)).into_response()
}
