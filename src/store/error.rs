//! 저장소 계층의 에러 타입
//!
//! HTTP와 무관한 에러이므로 상태 코드를 모릅니다.
//! 응답으로의 변환은 `crate::error::AppError`가 맡습니다.

use std::path::PathBuf;
use thiserror::Error;

/// 버전 기록을 읽거나 쓰는 중 발생한 저장소 에러
#[derive(Debug, Error)]
pub enum StorageError {
    /// 파일 읽기/쓰기 실패 (권한, 디스크 공간 등)
    /// "파일 없음"은 에러가 아니라 빈 기록으로 처리되므로 여기에 오지 않습니다.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        // #[source]: 에러 체인(`Error::source()`)으로 원인을 노출합니다.
        #[source]
        source: std::io::Error,
    },

    /// 파일은 있지만 JSON 배열로 해석할 수 없음
    #[error("corrupt version history in {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 기록을 JSON으로 만들지 못함
    /// `#[from]`: `serde_json::Error`에 `?`를 쓰면 자동으로 이 변형으로 변환됩니다.
    #[error("failed to serialize version history: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StorageError {
    /// `map_err(|e| StorageError::io(path, e))` 형태로 경로를 붙여 I/O 에러를 감쌉니다.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
