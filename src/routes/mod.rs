//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single Axum router serves the server-rendered portfolio page at `/`,
//! the hydration bundle under `/pkg`, a liveness probe at `/healthz`, and
//! falls back to static assets (profile photo, favicon) for everything else.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::StartupError;

/// Routes that need neither Leptos nor the filesystem.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: SSR page, bundle, assets, and HTTP layers.
///
/// # Errors
///
/// Returns [`StartupError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[[workspace.metadata.leptos]]` section or
/// `LEPTOS_*` environment).
pub fn app(config: &ServerConfig) -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let assets_dir = config.assets_dir.clone().unwrap_or_else(|| site_root.clone());
    tracing::info!(site_root = %site_root.display(), assets_dir = %assets_dir.display(), "static directories");

    let router = serve_static(base_routes().merge(leptos_router), &site_root, &assets_dir);
    Ok(with_http_layers(router))
}

/// Mount the compiled bundle at `/pkg` and the asset directory as fallback.
pub fn serve_static(router: Router, site_root: &Path, assets_dir: &Path) -> Router {
    router
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(assets_dir).append_index_html_on_directories(true))
}

pub fn with_http_layers(router: Router) -> Router {
    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
