//! # Mini Audit Trail 웹 서버 진입점
//!
//! 텍스트 내용을 저장할 때마다 버전 레코드를 남기고,
//! 직전 버전과 비교해 새로 생긴 단어와 사라진 단어를 기록합니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. 버전 저장소 생성 (파일 기반 또는 메모리)
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작

use std::sync::Arc;

use anyhow::Result; // anyhow::Result: 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use mini_audit_trail::{
    config::Config,
    routes::{self, AppState},
    store::{Persistence, VersionStore},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG 환경변수가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_audit_trail=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    tracing::info!("Starting audit trail server on {}:{}", config.host, config.port);

    // ── 4단계: 버전 저장소 생성 ──
    // 파일은 첫 요청 때 읽거나 만듭니다 (지연 초기화).
    // 전역 변수가 아니라 하나의 인스턴스를 만들어 State로 주입합니다.
    match &config.persistence {
        Persistence::File(path) => {
            tracing::info!("Version history file: {}", path.display());
        }
        Persistence::Memory => {
            tracing::warn!("Using in-memory version store, history is lost on restart");
        }
    }
    let store = Arc::new(VersionStore::new(config.persistence.clone()));

    // ── 5단계: 라우터 설정 ──
    let state = AppState { store };
    let app = routes::app(state, config.static_dir.as_deref());

    // ── 6단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
