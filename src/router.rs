//! Request routing for the mapping API.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::config::Config;
use crate::handlers;
use crate::pages::PageCalculator;

/// Application state shared between handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub calculator: Arc<PageCalculator>,
}

/// Creates the main router for the service.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Reference table
        .route("/api/surahs", get(handlers::list_surahs))
        .route("/api/surahs/:number", get(handlers::get_surah))
        .route("/api/surahs/by-name/:name", get(handlers::get_surah_by_name))
        // Mapping
        .route("/api/juz", get(handlers::get_juz))
        .route("/api/juz/range", get(handlers::get_juz_range))
        .route("/api/pages", get(handlers::get_pages))
        .route("/api/validate", get(handlers::validate_range))
        .route("/api/enrich", post(handlers::enrich))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn router(strict: bool) -> Router {
        create_router(AppState {
            config: Arc::new(Config {
                strict,
                ..Config::default()
            }),
            calculator: Arc::new(PageCalculator::standard()),
        })
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_get_surah() {
        let (status, body) = get_json(router(false), "/api/surahs/18").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Al-Kahf");
        assert_eq!(body["total_ayahs"], 110);
        assert_eq!(body["juz_boundaries"][1]["start_ayah"], 75);
    }

    #[tokio::test]
    async fn test_unknown_surah_is_not_found() {
        let (status, body) = get_json(router(false), "/api/surahs/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "SurahNotFound");
    }

    #[tokio::test]
    async fn test_malformed_path_is_invalid_input() {
        let (status, body) = get_json(router(false), "/api/surahs/kahf").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "InvalidInput");
    }

    #[tokio::test]
    async fn test_juz_lookup() {
        let (status, body) = get_json(router(false), "/api/juz?surah=18&ayah=75").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["value"], 16);
        assert_eq!(body["provenance"], "exact");
    }

    #[tokio::test]
    async fn test_strict_pages_rejects_bad_range() {
        let uri = "/api/pages?surah=1&start=1&end=8";
        let (status, body) = get_json(router(false), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provenance"], "fallback");

        let (status, body) = get_json(router(true), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "InvalidAyahRange");
    }
}
