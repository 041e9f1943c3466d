//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/health` → `{ "status": "ok", "versions": 3 }`
//!
//! 버전 수를 함께 돌려주므로, 기록 파일을 읽을 수 없는 상태라면
//! 200 대신 저장소 에러(500)가 나갑니다.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::versions::AppState;
use crate::error::AppError;

/// `GET /health` — 서버와 저장소 상태를 확인합니다.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    // 첫 요청이라면 여기서 기록 파일 로딩이 일어납니다.
    let versions = state.store.len().await?;
    Ok(Json(json!({
        "status": "ok",
        "versions": versions
    })))
}
