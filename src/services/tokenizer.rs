//! # 토크나이저(Tokenizer)
//!
//! 원본 텍스트를 정규화한 뒤 단어 토큰의 순서열로 나눕니다.
//!
//! ## 처리 단계
//! 1. NFKD 유니코드 분해: "é" → "e" + U+0301(결합 악센트), "ﬁ" → "fi"
//! 2. 결합 분음 부호(U+0300–U+036F) 제거
//! 3. 소문자 변환
//! 4. 단어 경계에서 시작하고 끝나는 `[a-z0-9']` 연속 구간을 토큰으로 추출
//!
//! 토큰은 원래 순서를 유지하며 **중복을 제거하지 않습니다.**
//! 중복 제거는 비교 단계(`diff`)의 몫입니다.

use unicode_normalization::UnicodeNormalization;

/// 결합 분음 부호 블록 (Combining Diacritical Marks)
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// 텍스트를 단어 토큰 목록으로 변환합니다.
///
/// # 예시
/// ```text
/// tokenize("Café naïve!")   → ["cafe", "naive"]
/// tokenize("Don't stop")    → ["don't", "stop"]
/// tokenize("")              → []
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let normalized: Vec<char> = text
        .nfkd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect::<String>()
        .to_lowercase()
        .chars()
        .collect();

    let mut tokens = Vec::new();
    let mut start = 0;

    while start < normalized.len() {
        if !is_token_char(normalized[start]) || !is_boundary(&normalized, start) {
            start += 1;
            continue;
        }

        // 토큰 문자로 이어지는 가장 긴 구간을 찾습니다.
        let mut run_end = start;
        while run_end < normalized.len() && is_token_char(normalized[run_end]) {
            run_end += 1;
        }

        // 끝이 단어 경계에 놓일 때까지 오른쪽에서 줄여 나갑니다.
        // 예: "end'" → "end" (따옴표 뒤는 경계가 아님)
        match (start + 1..=run_end)
            .rev()
            .find(|&end| is_boundary(&normalized, end))
        {
            Some(end) => {
                tokens.push(normalized[start..end].iter().collect());
                start = end;
            }
            None => start += 1,
        }
    }

    tokens
}

/// 토큰을 구성할 수 있는 문자: ASCII 소문자, 숫자, 아포스트로피
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '\''
}

/// 단어 경계 판정에 쓰이는 "단어 문자": ASCII 영숫자와 밑줄
///
/// 한글이나 "ß" 같은 비ASCII 문자는 단어 문자가 아니므로
/// 그 앞뒤는 경계가 됩니다.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `chars[pos - 1]`과 `chars[pos]` 사이가 단어 경계인지 확인합니다.
/// 범위 밖은 비단어 문자로 취급합니다.
fn is_boundary(chars: &[char], pos: usize) -> bool {
    let before = pos
        .checked_sub(1)
        .and_then(|i| chars.get(i))
        .is_some_and(|&c| is_word_char(c));
    let after = chars.get(pos).is_some_and(|&c| is_word_char(c));
    before != after
}
