//! # 단어 집합 비교(Word Set Diff)
//!
//! 두 스냅샷의 토큰 목록을 **집합**으로 비교해
//! 새로 등장한 단어와 사라진 단어를 계산합니다.
//!
//! 빈도 변화는 추적하지 않습니다. "b"가 한 번에서 두 번으로 늘어나도
//! 추가/삭제 목록에는 나타나지 않고, 토큰 수(`*_word_count`)에만 반영됩니다.

use std::collections::BTreeSet;

use super::tokenizer::tokenize;

/// 두 토큰 목록의 비교 결과
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordDiff {
    /// 새 집합에만 있는 단어 (오름차순)
    pub added_words: Vec<String>,
    /// 이전 집합에만 있는 단어 (오름차순)
    pub removed_words: Vec<String>,
    /// 이전 토큰 목록의 길이 (중복 포함)
    pub old_word_count: usize,
    /// 새 토큰 목록의 길이 (중복 포함)
    pub new_word_count: usize,
}

/// 토큰 목록 두 개를 비교합니다.
///
/// `BTreeSet`은 원소를 정렬된 상태로 유지하므로
/// `difference()` 결과도 사전순으로 나옵니다.
pub fn diff_tokens(old_tokens: &[String], new_tokens: &[String]) -> WordDiff {
    let old_set: BTreeSet<&str> = old_tokens.iter().map(String::as_str).collect();
    let new_set: BTreeSet<&str> = new_tokens.iter().map(String::as_str).collect();

    WordDiff {
        added_words: new_set.difference(&old_set).map(|w| w.to_string()).collect(),
        removed_words: old_set.difference(&new_set).map(|w| w.to_string()).collect(),
        old_word_count: old_tokens.len(),
        new_word_count: new_tokens.len(),
    }
}

/// 원본 텍스트 두 개를 토큰화한 뒤 비교합니다.
pub fn diff_words(old_text: &str, new_text: &str) -> WordDiff {
    diff_tokens(&tokenize(old_text), &tokenize(new_text))
}
