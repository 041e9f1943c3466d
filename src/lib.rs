//! # Mini Audit Trail
//!
//! 텍스트 스냅샷을 순서대로 기록하고, 저장할 때마다 직전 스냅샷과 비교해
//! 새로 등장한 단어와 사라진 단어를 계산하는 버전 기록 서버입니다.
//!
//! 모듈 구성:
//! - `services`: 토큰화, 단어 집합 비교, 버전 레코드 생성 (순수 로직)
//! - `store`: 추가 전용 버전 저장소 (JSON 파일 영속화, 쓰기 직렬화)
//! - `models`: 버전 레코드와 요청 구조체
//! - `routes`: HTTP 핸들러와 라우터
//! - `config`, `error`: 설정과 에러 타입

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
