//! # 버전(Version) 모델 정의
//!
//! 저장 요청 한 번마다 만들어지는 불변(immutable) 버전 레코드와
//! 저장 요청 본문 구조체를 정의합니다.
//!
//! JSON으로 직렬화될 때 필드 이름은 camelCase를 사용합니다.
//! (`added_words` → `"addedWords"`) 기존 `versions.json` 파일과
//! 프론트엔드가 이 이름을 그대로 읽기 때문입니다.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 버전 레코드 — `versions.json` 배열의 원소 하나에 대응합니다.
///
/// 한 번 만들어지면 수정되지 않습니다. 스토어는 레코드를 추가만 하고
/// 고치거나 지우지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// 고유 식별자 (UUIDv4)
    pub id: String,
    /// 생성 시각, 로컬 시간 분 단위 (예: "2026-10-19 09:05")
    pub timestamp: String,
    /// 이 버전의 전체 내용 (차이만이 아니라 스냅샷 전체)
    pub content: String,
    /// 이전 버전에는 없고 이번 버전에 새로 등장한 단어 (정렬, 중복 없음)
    pub added_words: Vec<String>,
    /// 이전 버전에는 있었지만 이번 버전에서 사라진 단어 (정렬, 중복 없음)
    pub removed_words: Vec<String>,
    /// 이전 내용의 길이 (UTF-16 코드 유닛 수)
    pub old_length: usize,
    /// 새 내용의 길이 (UTF-16 코드 유닛 수)
    pub new_length: usize,
    /// 이전 내용의 토큰 수 (중복 포함)
    pub old_word_count: usize,
    /// 새 내용의 토큰 수 (중복 포함)
    pub new_word_count: usize,
}

/// 버전 저장 요청 — `POST /api/save-version`의 요청 본문입니다.
///
/// serde의 `#[derive(Deserialize)]`를 쓰지 않는 이유:
/// 파생된 구조체 역직렬화는 JSON 배열(`["hello"]`)도 필드 순서대로 받아들이기 때문입니다.
/// 그래서 본문을 먼저 `serde_json::Value`로 받은 뒤, `TryFrom`으로 직접 검사합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVersionRequest {
    /// 저장할 전체 내용. 빈 문자열(`""`)도 올바른 입력입니다.
    pub content: String,
}

// TryFrom: 실패할 수 있는 타입 변환을 나타내는 표준 트레이트입니다.
// `CreateVersionRequest::try_from(value)?`처럼 `?`와 함께 사용합니다.
impl TryFrom<Value> for CreateVersionRequest {
    type Error = AppError;

    /// 요청 본문에서 저장할 내용을 꺼냅니다.
    ///
    /// 다음 경우는 모두 `AppError::Validation`입니다:
    /// - 본문이 JSON 객체가 아님 (배열, 숫자, 문자열, null)
    /// - `content` 필드가 없음
    /// - `content`가 문자열이 아님 (숫자, null, 배열 등)
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        // let-else: 패턴이 맞지 않으면 else 블록에서 즉시 반환합니다.
        let Value::Object(mut fields) = body else {
            return Err(invalid_body());
        };

        // .remove(): 맵에서 값을 꺼내면서 소유권을 가져옵니다 (복제 없음).
        match fields.remove("content") {
            Some(Value::String(content)) => Ok(Self { content }),
            _ => Err(invalid_body()),
        }
    }
}

fn invalid_body() -> AppError {
    AppError::Validation("Request body must contain 'content' string".to_string())
}
