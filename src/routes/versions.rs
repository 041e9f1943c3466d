//! # 버전(Version) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `POST /api/save-version` → 새 버전 저장 (201 Created)
//! - `GET  /api/versions`     → 전체 버전 목록, 최신순
//!
//! 핸들러는 얇은 연결부일 뿐이고, 실제 작업은 `VersionStore::save`와
//! `VersionStore::list` 두 호출이 전부입니다.
//!
//! ## Axum 핸들러 패턴
//! - `State(state)`: 앱 전역 상태 (여기서는 버전 저장소)
//! - `Json(body)`: 요청 본문을 JSON으로 파싱
//!
//! 반환 타입이 `Result<T, AppError>`이면, Axum이 자동으로:
//! - `Ok(T)` → T를 HTTP 응답으로 변환
//! - `Err(AppError)` → 에러 JSON 응답으로 변환 (error.rs의 `IntoResponse`)

// Arc(Atomically Reference Counted): 여러 스레드가 같은 값을 공유하게 해주는 스마트 포인터.
// clone()해도 값 자체는 복제되지 않고 참조 카운트만 1 늘어납니다.
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State}, // JsonRejection: JSON 추출 실패 사유
    http::StatusCode,                            // HTTP 상태 코드 (200, 201 등)
    Json,                                        // JSON 요청/응답 래퍼
};
use serde_json::{json, Value};

use crate::{error::AppError, models::CreateVersionRequest, store::VersionStore};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// Axum의 State Extractor는 요청마다 AppState를 clone하므로 `Clone`이 필수입니다.
/// `Arc`로 감싸므로 clone해도 저장소 자체는 하나만 존재합니다.
#[derive(Clone)]
pub struct AppState {
    /// 버전 저장소 (모든 요청이 같은 인스턴스를 공유)
    pub store: Arc<VersionStore>,
}

/// `POST /save-version` — 새 버전을 저장합니다.
///
/// 요청: `{ "content": "..." }`
/// 응답: `{ "success": true, "version": { ... } }`
///
/// # Extractor
/// - `payload`: 본문을 구조체가 아닌 `Value`로 받습니다.
///   `Result<Json<_>, JsonRejection>`으로 받으면 Axum이 거부(415/422 등)하는 대신
///   우리가 직접 실패를 처리할 수 있습니다. 본문이 없거나 JSON이 아닌 경우,
///   객체가 아닌 경우 모두 `AppError::Validation`(400)으로 통일됩니다.
pub async fn save_version(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    // `?`: JsonRejection → AppError::Validation (error.rs의 From 구현)
    let Json(body) = payload?;
    // 객체인지, content가 문자열인지 검사. 실패하면 저장소에 손대지 않고 400 반환
    let req = CreateVersionRequest::try_from(body)?;

    // 직전 버전 조회 → 비교 → 추가가 저장소 안에서 한 번에 일어납니다.
    // &req.content: String을 &str로 빌려줍니다 (소유권 이동 없음).
    let version = state.store.save(&req.content).await?;

    // (StatusCode, Json) 튜플도 IntoResponse를 구현하므로 그대로 응답이 됩니다.
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "version": version })),
    ))
}

/// `GET /versions` — 전체 버전 목록을 최신순으로 반환합니다.
///
/// 기록이 비어 있으면 에러가 아니라 빈 배열을 반환합니다.
/// 응답: `{ "versions": [...] }`
pub async fn list_versions(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    // list()는 복사본을 돌려주므로, 응답을 만드는 동안 저장소 잠금을 잡고 있지 않습니다.
    let versions = state.store.list().await?;
    Ok(Json(json!({ "versions": versions })))
}
