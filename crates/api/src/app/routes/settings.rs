use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use perkhub_auth::{Role, authorize};

use crate::app::dto::{self, UpdateSettingsRequest};
use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::{SessionContext, TenantContext};

/// GET /settings - the tenant's raw settings record.
pub async fn get_settings(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
) -> axum::response::Response {
    let settings = services.settings_get(tenant.tenant_id());
    (StatusCode::OK, Json(settings)).into_response()
}

/// PUT /settings - replace the tenant's settings and re-derive the theme.
///
/// Write access belongs to the admin surface; users read the derived theme
/// but never this endpoint's write path.
pub async fn put_settings(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<UpdateSettingsRequest>,
) -> axum::response::Response {
    if let Err(e) = authorize(session.session(), &[Role::Admin, Role::SuperAdmin]) {
        return errors::json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string());
    }

    let settings = body.into_settings();
    let (theme, phase) = services.settings_put(tenant.tenant_id(), settings.clone());

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "settings": settings,
            "theme": dto::theme_to_json(&theme, phase),
        })),
    )
        .into_response()
}
