//! Route modules for the notes server

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod assets;
pub mod health;
pub mod notes;

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.config().server.max_upload_bytes;

    Router::new()
        .merge(health::router())
        .merge(notes::router())
        .merge(assets::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum_test::TestServer;
    use tempfile::TempDir;

    fn server() -> (TempDir, TestServer) {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.assets.dir = temp_dir.path().to_path_buf();
        let state = AppState::new(config).unwrap();
        (temp_dir, TestServer::new(build_router(state)).unwrap())
    }

    #[tokio::test]
    async fn test_liveness() {
        let (_dir, server) = server();

        let response = server.get("/test").await;

        response.assert_status_ok();
        response.assert_text(health::LIVENESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, server) = server();

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "notes-ingest-server");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (_dir, server) = server();

        let response = server.get("/api/v1/books").await;

        response.assert_status(axum::http::StatusCode::NOT_FOUND);
    }
}
