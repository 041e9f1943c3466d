//! # 버전 저장소(Version Store)
//!
//! 버전 레코드를 생성 순서대로 보관하는 추가 전용(append-only) 저장소입니다.
//! 레코드는 추가만 되고 수정·삭제되지 않습니다.
//!
//! ## 상태 전이
//! ```text
//! 미초기화 ──(첫 접근: 파일 로딩 또는 빈 기록 생성)──▶ 로딩됨
//! 로딩됨 ──(append: 쓰기 잠금 획득)──▶ 추가 중 ──(디스크 기록 완료/실패)──▶ 로딩됨
//! ```
//!
//! ## 동시성
//! 추가는 "전체 읽기 → 한 건 추가 → 전체 쓰기"의 read-modify-write이므로
//! `write_lock`(비동기 Mutex)으로 한 번에 하나씩만 실행합니다.
//! 메모리의 기록(`RwLock`)은 디스크 쓰기가 성공한 뒤에만 바뀌므로,
//! `list()`는 잠금 대기 없이 항상 이미 저장된 스냅샷을 읽습니다.

mod error;
pub mod file;

pub use error::StorageError;

use std::path::PathBuf;

use serde::Serialize;
use tokio::sync::{Mutex, OnceCell, RwLock};
use tracing::{debug, info};

use crate::{models::Version, services};

/// 기록을 어디에 보관하는지
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    /// JSON 파일 하나에 전체 기록을 저장 (기본값)
    File(PathBuf),
    /// 프로세스 메모리에만 보관. 재시작하면 기록이 사라집니다.
    Memory,
}

/// 추가 전용 버전 저장소
///
/// 전역 변수 대신 `main`에서 인스턴스를 만들고
/// `Arc<VersionStore>`로 핸들러에 주입합니다.
pub struct VersionStore {
    persistence: Persistence,
    /// 생성 순서대로 정렬된 기록. 첫 접근 때 한 번만 초기화됩니다.
    history: OnceCell<RwLock<Vec<Version>>>,
    /// 추가 작업 직렬화용 잠금
    write_lock: Mutex<()>,
}

impl VersionStore {
    pub fn new(persistence: Persistence) -> Self {
        Self {
            persistence,
            history: OnceCell::new(),
            write_lock: Mutex::new(()),
        }
    }

    /// 파일 기반 저장소를 만듭니다. 파일은 첫 접근 때 읽거나 생성합니다.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Persistence::File(path.into()))
    }

    /// 메모리 전용 저장소를 만듭니다.
    pub fn in_memory() -> Self {
        Self::new(Persistence::Memory)
    }

    /// 새 내용을 저장하고 생성된 버전을 반환합니다.
    ///
    /// 직전 버전 조회, 비교, 추가가 하나의 임계 구역 안에서 일어나므로
    /// 동시에 들어온 저장 요청도 각자 바로 앞 레코드와 비교됩니다.
    pub async fn save(&self, content: &str) -> Result<Version, StorageError> {
        self.append_with(|previous| {
            services::build_version(previous.map(|v| v.content.as_str()), content)
        })
        .await
    }

    /// 이미 만들어진 레코드를 기록 끝에 추가합니다.
    ///
    /// 디스크 기록이 실패하면 에러를 반환하고 메모리 기록도 그대로 둡니다.
    pub async fn append(&self, version: Version) -> Result<Version, StorageError> {
        self.append_with(|_| version).await
    }

    /// 전체 기록을 최신순으로 반환합니다. (호출자 소유의 복사본)
    pub async fn list(&self) -> Result<Vec<Version>, StorageError> {
        let history = self.history().await?.read().await;
        Ok(history.iter().rev().cloned().collect())
    }

    /// 가장 최근에 추가된 레코드. 기록이 비어 있으면 `None`.
    pub async fn latest(&self) -> Result<Option<Version>, StorageError> {
        let history = self.history().await?.read().await;
        Ok(history.last().cloned())
    }

    pub async fn len(&self) -> Result<usize, StorageError> {
        Ok(self.history().await?.read().await.len())
    }

    pub async fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len().await? == 0)
    }

    /// 쓰기 잠금 안에서 직전 레코드를 보고 새 레코드를 만들어 추가합니다.
    ///
    /// `build`는 직전 레코드(없으면 `None`)를 받아 새 레코드를 돌려주는 클로저입니다.
    /// `FnOnce`: 한 번만 호출되므로 캡처한 값을 소비(move)해도 됩니다.
    async fn append_with<F>(&self, build: F) -> Result<Version, StorageError>
    where
        F: FnOnce(Option<&Version>) -> Version,
    {
        // 가드가 스코프를 벗어날 때까지 다른 추가 작업은 여기서 대기합니다.
        let _guard = self.write_lock.lock().await;
        let history = self.history().await?;

        let version = {
            // 디스크 쓰기 동안에는 읽기 잠금만 잡으므로 list()는 막히지 않습니다.
            let current = history.read().await;
            let version = build(current.last());

            // 기존 기록을 복제하지 않고 "기존 + 새 레코드" 보기를 그대로 직렬화합니다.
            self.persist(&file::AppendedHistory {
                existing: &current[..],
                appended: &version,
            })
            .await?;
            version
        };

        // 디스크 기록이 성공한 뒤에만 메모리 기록을 늘립니다.
        history.write().await.push(version.clone());

        info!(
            id = %version.id,
            added = version.added_words.len(),
            removed = version.removed_words.len(),
            words = version.new_word_count,
            "Saved version"
        );
        Ok(version)
    }

    /// 기록을 처음 접근할 때 한 번만 불러옵니다.
    ///
    /// 로딩이 실패하면 셀은 비어 있는 채로 남으므로, 다음 호출이 다시 시도합니다.
    async fn history(&self) -> Result<&RwLock<Vec<Version>>, StorageError> {
        self.history
            .get_or_try_init(|| async {
                let versions = match &self.persistence {
                    Persistence::File(path) => file::read_history(path).await?,
                    Persistence::Memory => Vec::new(),
                };
                debug!(count = versions.len(), "Loaded version history");
                // 클로저의 에러 타입을 컴파일러에게 알려줍니다.
                Ok::<_, StorageError>(RwLock::new(versions))
            })
            .await
    }

    async fn persist<T>(&self, versions: &T) -> Result<(), StorageError>
    where
        T: Serialize + Sync + ?Sized,
    {
        match &self.persistence {
            Persistence::File(path) => file::write_json(path, versions).await,
            Persistence::Memory => Ok(()),
        }
    }
}
