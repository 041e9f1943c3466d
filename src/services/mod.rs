//! # 비즈니스 로직(서비스) 모듈
//!
//! HTTP나 저장소와 무관한 순수 로직을 모아둔 모듈입니다.
//! - `tokenizer`: 텍스트 정규화와 단어 토큰 추출
//! - `diff`: 두 토큰 목록의 단어 집합 비교
//! - `record`: 비교 결과로 새 버전 레코드 생성

pub mod diff;
pub mod record;
pub mod tokenizer;

pub use diff::*;
pub use record::*;
pub use tokenizer::*;
