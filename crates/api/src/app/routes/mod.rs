use axum::{Router, routing::get};

pub mod navigate;
pub mod settings;
pub mod system;
pub mod theme;

/// Router for all authenticated (tenant-scoped) endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/stream", get(system::stream))
        .route(
            "/settings",
            get(settings::get_settings).put(settings::put_settings),
        )
        .route("/theme", get(theme::get_theme))
        .route("/theme.css", get(theme::get_theme_css))
}
