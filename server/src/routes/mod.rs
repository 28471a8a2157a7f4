//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders every view; this router adds static assets, a health
//! probe, and the edge filter that runs ahead of rendering. The posts API
//! itself is remote and never proxied here.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::edge;
use crate::state::AppState;

/// Leptos SSR frontend behind the edge filter.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS produced by cargo-leptos.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(leptos_router
        .layer(middleware::from_fn_with_state(state, edge::edge_filter))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
