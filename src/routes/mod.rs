//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `versions`: 버전 저장/목록 핸들러
//!
//! 잘못된 HTTP 메서드(예: `GET /api/save-version`)는 Axum의 메서드 라우터가
//! `Allow` 헤더와 함께 405로 응답합니다.

pub mod health;
pub mod versions;

pub use health::*;
pub use versions::*;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// `/api` 아래에 붙는 라우트들
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/save-version", post(save_version))
        .route("/versions", get(list_versions))
        .route("/health", get(health_check))
        .with_state(state)
}

/// 전체 애플리케이션 라우터
///
/// `static_dir`이 주어지고 실제로 존재하면, API에 매칭되지 않는 요청은
/// 프론트엔드 정적 파일로 넘깁니다. 찾을 수 없는 경로는 index.html (SPA 라우팅).
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    // 개발 환경 기준으로 모든 출처를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new().nest("/api", api_router(state));

    let router = match static_dir.filter(|dir| dir.exists()) {
        Some(dir) => {
            tracing::info!("Serving frontend static files from {}", dir.display());
            let serve_dir =
                ServeDir::new(dir).not_found_service(ServeFile::new(dir.join("index.html")));
            router.fallback_service(serve_dir)
        }
        None => {
            tracing::warn!("No frontend directory configured, serving API only");
            router
        }
    };

    router.layer(cors).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::VersionStore;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tempfile::tempdir;
    use tower::ServiceExt;

    fn test_app(store: Arc<VersionStore>) -> Router {
        app(AppState { store }, None)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn save_request(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/save-version")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn save_returns_created_version() {
        let store = Arc::new(VersionStore::in_memory());

        let (status, body) = send(
            test_app(store.clone()),
            save_request(r#"{"content":"Hello, world! Hello."}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], json!(true));
        let version = &body["version"];
        assert_eq!(version["content"], json!("Hello, world! Hello."));
        assert_eq!(version["addedWords"], json!(["hello", "world"]));
        assert_eq!(version["removedWords"], json!([]));
        assert_eq!(version["oldLength"], json!(0));
        assert_eq!(version["newLength"], json!(20));
        assert_eq!(version["oldWordCount"], json!(0));
        assert_eq!(version["newWordCount"], json!(3));
        assert!(version["id"].is_string());
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn invalid_content_is_rejected_without_touching_store() {
        let store = Arc::new(VersionStore::in_memory());

        for body in [
            r#"{"content":42}"#,
            r#"{}"#,
            r#"{"content":null}"#,
            r#"not json"#,
            r#"[1, 2, 3]"#,
            r#"["hello"]"#,
            r#""hello""#,
        ] {
            let (status, response) = send(test_app(store.clone()), save_request(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(response["error"]["code"], json!("validation_error"));
        }

        assert_eq!(store.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn missing_content_type_is_a_validation_error() {
        let store = Arc::new(VersionStore::in_memory());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/save-version")
            .body(Body::from(r#"{"content":"x"}"#))
            .unwrap();

        let (status, _) = send(test_app(store.clone()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(store.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn list_is_empty_then_most_recent_first() {
        let store = Arc::new(VersionStore::in_memory());

        let (status, body) = send(test_app(store.clone()), get_request("/api/versions")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "versions": [] }));

        send(test_app(store.clone()), save_request(r#"{"content":"a b c"}"#)).await;
        send(test_app(store.clone()), save_request(r#"{"content":"b c d"}"#)).await;

        let (_, body) = send(test_app(store.clone()), get_request("/api/versions")).await;
        let versions = body["versions"].as_array().unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0]["content"], json!("b c d"));
        assert_eq!(versions[0]["addedWords"], json!(["d"]));
        assert_eq!(versions[0]["removedWords"], json!(["a"]));
        assert_eq!(versions[1]["content"], json!("a b c"));
    }

    #[tokio::test]
    async fn wrong_method_is_not_allowed() {
        let store = Arc::new(VersionStore::in_memory());

        let response = test_app(store.clone())
            .oneshot(get_request("/api/save-version"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.headers().contains_key(header::ALLOW));

        let response = test_app(store)
            .oneshot(save_request_to("/api/versions"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    fn save_request_to(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"content":"x"}"#))
            .unwrap()
    }

    #[tokio::test]
    async fn storage_failure_is_a_server_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("versions.json");
        std::fs::write(&path, "definitely not json").unwrap();
        let store = Arc::new(VersionStore::open(&path));

        let (status, body) = send(test_app(store.clone()), save_request(r#"{"content":"x"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], json!("storage_error"));

        let (status, _) = send(test_app(store), get_request("/api/versions")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_reports_version_count() {
        let dir = tempdir().unwrap();
        let store = Arc::new(VersionStore::open(dir.path().join("versions.json")));
        store.save("one").await.unwrap();

        let (status, body) = send(test_app(store), get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok", "versions": 1 }));
    }
}
