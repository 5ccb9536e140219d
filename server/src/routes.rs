//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the front end: Leptos SSR for every client route,
//! the compiled `/pkg` bundle, and a health probe. The learning-platform API
//! the browser talks to is a separate service.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::config::LeptosOptions;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Load Leptos options from `cargo leptos` metadata or `LEPTOS_*` variables.
///
/// # Errors
///
/// Returns an error if the configuration is missing or malformed.
pub fn load_options() -> Result<LeptosOptions, ServerError> {
    get_configuration(None).map(|conf| conf.leptos_options).map_err(|e| ServerError::Config(e.to_string()))
}

/// `site_addr` with its port replaced by `port` when that parses.
pub fn listen_addr(site_addr: SocketAddr, port: Option<&str>) -> SocketAddr {
    match port.map(str::trim).filter(|p| !p.is_empty()) {
        None => site_addr,
        Some(raw) => match raw.parse::<u16>() {
            Ok(port) => SocketAddr::new(site_addr.ip(), port),
            Err(e) => {
                tracing::warn!(port = raw, error = %e, "ignoring invalid port override");
                site_addr
            }
        },
    }
}

/// Leptos SSR app, static assets, and `/healthz`.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let pkg_dir = PathBuf::from(options.site_root.as_ref()).join(options.site_pkg_dir.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
