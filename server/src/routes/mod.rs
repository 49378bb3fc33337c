//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the Leptos SSR page, compiled WASM/CSS assets, static
//! images, and the health probe under a single Axum router, then wraps every
//! response with the site-wide security headers, compression, and request
//! tracing.


use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::http::header::{HeaderName, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS, X_XSS_PROTECTION};
use axum::http::{HeaderValue, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use highfive_client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Headers attached to every response.
pub const SECURITY_HEADERS: [(HeaderName, &str); 3] = [
    (X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (X_FRAME_OPTIONS, "DENY"),
    (X_XSS_PROTECTION, "1; mode=block"),
];

/// Load Leptos options, applying the `SITE_ROOT` override.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` and no `LEPTOS_*` environment).
pub fn leptos_options(config: &ServerConfig) -> Result<LeptosOptions, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    Ok(with_overrides(conf.leptos_options, config))
}

/// Apply `SITE_ROOT` and the bind address to loaded Leptos options.
pub fn with_overrides(mut options: LeptosOptions, config: &ServerConfig) -> LeptosOptions {
    if let Some(root) = &config.site_root {
        options.site_root = Arc::from(root.to_string_lossy().as_ref());
    }
    options.site_addr = config.addr();
    options
}

/// Full application: SSR page plus static routes, with site layers.
pub fn app(options: LeptosOptions, config: &ServerConfig) -> Router {
    let site_root = PathBuf::from(options.site_root.as_ref());
    let routes = generate_route_list(App);

    let leptos_router = Router::<LeptosOptions>::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || shell(opts.clone())
        })
        .with_state(options);

    with_site_layers(static_routes(&site_root).merge(leptos_router), config.compression)
}

/// Health probe and static asset directories under `site_root`.
pub fn static_routes(site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/images", ServeDir::new(site_root.join("images")))
}

/// Security headers, optional gzip, and HTTP tracing.
pub fn with_site_layers(router: Router, compression: bool) -> Router {
    let mut router = SECURITY_HEADERS.into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value)))
    });
    if compression {
        router = router.layer(CompressionLayer::new());
    }
    router.layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    service: &'static str,
}

async fn healthz() -> (StatusCode, Json<Health>) {
    (StatusCode::OK, Json(Health { status: "ok", service: env!("CARGO_PKG_NAME") }))
}
