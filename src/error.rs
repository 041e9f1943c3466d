//! # 에러 처리 모듈
//!
//! HTTP 경계에서 다루는 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 검증 에러와 저장소 에러를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환

use axum::{
    extract::rejection::JsonRejection, // Json 추출 실패 (본문 없음, 잘못된 JSON 등)
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StorageError;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
/// 어떤 에러도 자동으로 재시도하지 않습니다. 재시도는 클라이언트의 몫입니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 잘못된 요청 (HTTP 400)
    /// `content`가 없거나 문자열이 아닌 경우. 저장소에는 손대지 않습니다.
    #[error("Validation error: {0}")]
    Validation(String),

    /// 저장소 읽기/쓰기 실패 (HTTP 500)
    /// #[from]: `StorageError`에 `?`를 쓰면 자동으로 `AppError::Storage`로 변환됩니다.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

// 본문이 비었거나, JSON이 아니거나, 객체가 아닌 경우도 검증 에러로 취급합니다.
// 덕분에 핸들러는 `Result<Json<_>, JsonRejection>`을 받아 `?` 한 번으로 처리할 수 있습니다.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 저장소 에러는 실제 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다 (파일 경로 노출 방지).
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(ref msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            AppError::Storage(ref e) => {
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage_error",
                    "Failed to access version history".to_string(),
                )
            }
        };

        // 결과: { "error": { "code": "validation_error", "message": "..." } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
