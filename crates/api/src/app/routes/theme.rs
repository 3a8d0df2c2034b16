use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{StatusCode, header},
    response::IntoResponse,
    Json,
};

use crate::app::dto;
use crate::app::services::AppServices;
use crate::context::TenantContext;

/// GET /theme - the derived theme plus its lifecycle phase.
pub async fn get_theme(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
) -> axum::response::Response {
    let (theme, phase) = services.theme_snapshot(tenant.tenant_id());
    (StatusCode::OK, Json(dto::theme_to_json(&theme, phase))).into_response()
}

/// GET /theme.css - the applied variables as a `:root` block, ready to be
/// linked by the shell.
pub async fn get_theme_css(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
) -> axum::response::Response {
    let css = services.theme_css(tenant.tenant_id());
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        css,
    )
        .into_response()
}
