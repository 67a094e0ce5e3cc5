//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything except `/healthz` is a file under the site directory. There
//! is no index fallback for unknown paths: the client routes through the
//! URL fragment, which never reaches the server, so a missing file is a
//! real 404 and the client renders its error panel for it.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn app(site_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(site_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}
