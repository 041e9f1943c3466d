//! # 버전 기록 파일 입출력
//!
//! 전체 기록을 JSON 배열 하나로 읽고 씁니다.
//! 쓰기는 임시 파일에 먼저 기록한 뒤 `rename`으로 교체하므로,
//! 쓰는 도중 실패해도 기존 파일이 잘리거나 깨지지 않습니다.
//!
//! ## 쓰기 순서
//! ```text
//! versions.json.tmp 생성 → 내용 기록 → fsync(파일)
//!   → rename(versions.json.tmp → versions.json) → fsync(상위 디렉토리, Unix)
//! ```
//! 마지막 디렉토리 fsync가 있어야 전원이 끊겨도 rename 자체가 사라지지 않습니다.

use std::{
    iter,
    path::{Path, PathBuf},
};

use serde::{Serialize, Serializer};
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

use super::StorageError;
use crate::models::Version;

/// 기존 기록 뒤에 새 레코드 하나를 붙인 "빌려온" 보기
///
/// 추가할 때마다 전체 `Vec<Version>`을 복제하지 않고,
/// 기존 슬라이스와 새 레코드를 참조한 채 하나의 JSON 배열로 직렬화합니다.
pub struct AppendedHistory<'a> {
    pub existing: &'a [Version],
    pub appended: &'a Version,
}

impl Serialize for AppendedHistory<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // collect_seq: 이터레이터를 JSON 배열로 직렬화 (중간 Vec 없음)
        serializer.collect_seq(self.existing.iter().chain(iter::once(self.appended)))
    }
}

/// 파일에서 전체 기록을 읽습니다.
///
/// - 파일이 없으면: 상위 디렉토리와 `[]` 파일을 만들고 빈 기록을 반환
/// - 파일이 비어 있으면: 빈 기록
/// - 그 외 읽기 실패나 JSON 파싱 실패: 에러를 그대로 반환
pub async fn read_history(path: &Path) -> Result<Vec<Version>, StorageError> {
    debug!(path = %path.display(), "Reading version history");

    match fs::read_to_string(path).await {
        Ok(raw) if raw.trim().is_empty() => Ok(Vec::new()),
        Ok(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No version history yet, creating empty file");
            write_history(path, &[]).await?;
            Ok(Vec::new())
        }
        Err(e) => Err(StorageError::io(path, e)),
    }
}

/// 전체 기록을 파일에 씁니다.
pub async fn write_history(path: &Path, versions: &[Version]) -> Result<(), StorageError> {
    write_json(path, versions).await
}

/// JSON 배열로 직렬화되는 값을 파일에 원자적으로 씁니다.
///
/// `T: Sync`: 참조를 `.await` 너머로 들고 있으므로,
/// 핸들러 Future가 `Send`가 되려면 필요합니다.
pub async fn write_json<T>(path: &Path, value: &T) -> Result<(), StorageError>
where
    T: Serialize + Sync + ?Sized,
{
    debug!(path = %path.display(), "Writing version history");

    // 상대 경로 "versions.json"의 parent()는 빈 경로이므로 현재 디렉토리로 취급합니다.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .await
        .map_err(|e| StorageError::io(dir, e))?;

    // to_string_pretty: 들여쓰기 2칸의 사람이 읽기 쉬운 JSON
    let content = serde_json::to_string_pretty(value)?;

    let temp_path = temp_path_for(path);
    let mut file = fs::File::create(&temp_path)
        .await
        .map_err(|e| StorageError::io(&temp_path, e))?;
    file.write_all(content.as_bytes())
        .await
        .map_err(|e| StorageError::io(&temp_path, e))?;
    // sync_all: OS 버퍼의 내용을 디스크까지 내려보냅니다 (fsync).
    file.sync_all()
        .await
        .map_err(|e| StorageError::io(&temp_path, e))?;
    drop(file);

    // 같은 파일시스템 안의 rename은 원자적입니다: 읽는 쪽은 이전 파일 아니면 새 파일만 봅니다.
    fs::rename(&temp_path, path)
        .await
        .map_err(|e| StorageError::io(path, e))?;

    sync_dir(dir).await
}

/// 디렉토리 항목 변경(rename)을 디스크에 확정합니다.
///
/// Unix에서는 디렉토리를 열어 fsync할 수 있습니다.
/// Windows는 디렉토리 핸들에 fsync를 지원하지 않으므로 건너뜁니다.
#[cfg(unix)]
async fn sync_dir(dir: &Path) -> Result<(), StorageError> {
    let handle = fs::File::open(dir)
        .await
        .map_err(|e| StorageError::io(dir, e))?;
    handle.sync_all().await.map_err(|e| StorageError::io(dir, e))
}

#[cfg(not(unix))]
async fn sync_dir(_dir: &Path) -> Result<(), StorageError> {
    Ok(())
}

/// `data/versions.json` → `data/versions.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
