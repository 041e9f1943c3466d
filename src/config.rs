//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목 (모두 선택, 기본값 있음):
//! - `DATA_PATH`: 버전 기록 JSON 파일 경로 (기본값: "data/versions.json")
//! - `VERSION_STORE`: "file" 또는 "memory" (기본값: "file")
//! - `HOST`: 서버 바인딩 주소 (기본값: "0.0.0.0")
//! - `PORT`: 서버 포트 번호 (기본값: 3000)
//! - `STATIC_DIR`: 프론트엔드 정적 파일 디렉토리 (없으면 API만 서빙)

use std::{env, path::PathBuf};

use thiserror::Error;

use crate::store::Persistence;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown VERSION_STORE value {0:?} (expected \"file\" or \"memory\")")]
    UnknownStoreMode(String),
}

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 `main`에서 사용합니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 버전 기록을 어디에 보관할지 (파일 경로 또는 메모리)
    pub persistence: Persistence,
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    /// u16: 0~65535 범위의 부호 없는 16비트 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
    /// 프론트엔드 빌드 결과물 디렉토리
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 조회 함수로부터 설정을 만듭니다.
    ///
    /// 테스트에서는 프로세스 환경변수를 건드리지 않고
    /// `HashMap` 같은 것을 조회 함수로 넘겨 사용합니다.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup("DATA_PATH").unwrap_or_else(|| "data/versions.json".to_string());

        // 메모리 모드는 재시작 시 기록을 잃으므로 명시적으로 요청한 경우에만 사용합니다.
        let persistence = match lookup("VERSION_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("file") => Persistence::File(PathBuf::from(data_path)),
            Some("memory") => Persistence::Memory,
            Some(other) => return Err(ConfigError::UnknownStoreMode(other.to_string())),
        };

        Ok(Self {
            persistence,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            // .parse(): 문자열을 u16으로 변환. 실패하면 기본값 3000 사용
            port: lookup("PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
            static_dir: lookup("STATIC_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_file_store() {
        let config = config_from(&[]).unwrap();
        assert_eq!(
            config.persistence,
            Persistence::File(PathBuf::from("data/versions.json"))
        );
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DATA_PATH", "/var/lib/audit/history.json"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("STATIC_DIR", "web/dist"),
        ])
        .unwrap();

        assert_eq!(
            config.persistence,
            Persistence::File(PathBuf::from("/var/lib/audit/history.json"))
        );
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, Some(PathBuf::from("web/dist")));
    }

    #[test]
    fn memory_store_must_be_requested() {
        let config = config_from(&[("VERSION_STORE", "memory")]).unwrap();
        assert_eq!(config.persistence, Persistence::Memory);
    }

    #[test]
    fn unknown_store_mode_is_rejected() {
        assert!(matches!(
            config_from(&[("VERSION_STORE", "redis")]),
            Err(ConfigError::UnknownStoreMode(mode)) if mode == "redis"
        ));
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "not-a-port")]).unwrap();
        assert_eq!(config.port, 3000);
    }
}
