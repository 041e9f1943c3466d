//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `version`: 버전 레코드와 저장 요청 구조체
//!
//! `pub use X::*;`로 하위 모듈 항목을 재공개(re-export)하여
//! `crate::models::Version`처럼 짧게 접근할 수 있게 합니다.

pub mod version;

pub use version::*;
