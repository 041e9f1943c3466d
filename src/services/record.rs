//! # 버전 레코드 생성
//!
//! 토크나이저와 단어 집합 비교를 조합해 새 `Version` 레코드를 만듭니다.

use chrono::{DateTime, Local};

use super::diff::diff_words;
use crate::models::Version;

/// 타임스탬프 포맷: 로컬 시간, 분 단위, 0으로 채움 (예: "2026-03-07 09:05")
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// 현재 시각으로 새 버전 레코드를 만듭니다.
///
/// `previous_content`가 `None`이면 첫 저장이므로 빈 문자열과 비교합니다.
pub fn build_version(previous_content: Option<&str>, new_content: &str) -> Version {
    build_version_at(previous_content, new_content, Local::now())
}

/// 지정한 시각으로 새 버전 레코드를 만듭니다. (테스트에서 시각을 고정할 때 사용)
pub fn build_version_at(
    previous_content: Option<&str>,
    new_content: &str,
    now: DateTime<Local>,
) -> Version {
    let old_content = previous_content.unwrap_or("");
    let diff = diff_words(old_content, new_content);

    Version {
        id: uuid::Uuid::new_v4().to_string(),
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        content: new_content.to_string(),
        added_words: diff.added_words,
        removed_words: diff.removed_words,
        old_length: utf16_len(old_content),
        new_length: utf16_len(new_content),
        old_word_count: diff.old_word_count,
        new_word_count: diff.new_word_count,
    }
}

/// 문자열 길이를 UTF-16 코드 유닛 단위로 셉니다.
///
/// 정규화 전의 원본 문자열 그대로 셉니다. 브라우저의 `String.length`와
/// 같은 값이므로 프론트엔드가 표시하는 글자 수와 일치합니다.
fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
