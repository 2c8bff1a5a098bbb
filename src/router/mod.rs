//! Routing module for the shopping-list application

use crate::list::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, Router};
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, warn};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        let res = next.run(req).await;
        if res.status().is_success() {
            debug!("{method} {uri} -> {}", res.status());
        } else {
            warn!("{method} {uri} -> {}", res.status());
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    let router = Router::new().nest("/api", crate::list::routes());

    // Serve the built client bundle when present, falling back to
    // index.html so client-side routes resolve.
    let router = match locate_client_dist() {
        Some(dist) => {
            let index = ServeFile::new(dist.join("index.html"));
            router.fallback_service(ServeDir::new(&dist).not_found_service(index))
        }
        None => router,
    };

    router.layer(log_layer).layer(cors_layer).with_state(state)
}

/// Attempts to locate the built client bundle next to the working directory
fn locate_client_dist() -> Option<PathBuf> {
    // Strategy to locate the bundle:
    // 1. ./client/dist
    // 2. ../client/dist (if running from a subdir)
    let current_dir = std::env::current_dir().ok()?;
    let candidates = [
        current_dir.join("client").join("dist"),
        current_dir.join("..").join("client").join("dist"),
    ];

    candidates
        .into_iter()
        .find(|dir| dir.join("index.html").exists())
}
