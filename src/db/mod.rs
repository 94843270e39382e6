//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 스니펫 저장소의 공개 계약은 `SnippetModelService` 트레이트이고,
//! SQLite 구현체는 `SnippetModel`입니다. 라우트 핸들러는 트레이트만 알고 있습니다.
//!
//! 각 하위 모듈:
//! - `schema`: 테이블 생성 (마이그레이션 없이 `IF NOT EXISTS`)
//! - `snippets`: 스니펫 생성/조회/최신 목록 쿼리
//! - `search`: 제목·태그 부분 문자열 검색 쿼리
//! - `tags`: 태그 upsert 및 스니펫-태그 관계 쿼리
//!
//! ## 데드라인
//! `SnippetModel`은 작업별 기본 데드라인을 들고 다닙니다. 모든 작업은
//! `tokio::time::timeout`으로 감싸지므로 무한정 블록되지 않고 `AppError::Timeout`으로 끝납니다.

pub mod schema;
pub mod search;
pub mod snippets;
pub mod tags;

pub use schema::*;
pub use search::*;
pub use snippets::*;
pub use tags::*;

use crate::error::AppError;
use crate::models::Snippet;
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::future::Future;
use std::time::Duration;

/// 스니펫 저장소 계약
///
/// `get`만 `AppError::NotFound`를 반환할 수 있고, 나머지 실패는 모두
/// 저장소 에러(`Database`, `Timeout`)입니다. 목록 조회는 결과가 없으면 빈 Vec입니다.
#[async_trait]
pub trait SnippetModelService: Send + Sync {
    /// 새 스니펫을 저장하고 ID를 반환합니다.
    async fn insert(&self, title: &str, content: &str, expires_in_days: i64)
        -> Result<i64, AppError>;

    /// 활성 스니펫 하나를 조회합니다. 태그는 채우지 않습니다.
    async fn get(&self, id: i64) -> Result<Snippet, AppError>;

    /// 최근 활성 스니펫 최대 10개
    async fn latest(&self) -> Result<Vec<Snippet>, AppError>;

    /// 태그를 찾거나 만들어 스니펫에 연결합니다. 같은 태그를 다시 붙여도 연결은 하나입니다.
    async fn add_tag(&self, snippet_id: i64, tag: &str) -> Result<(), AppError>;

    /// 스니펫에 연결된 태그 이름 목록
    async fn get_tags(&self, snippet_id: i64) -> Result<Vec<String>, AppError>;

    /// 제목 또는 태그 이름으로 활성 스니펫 검색
    async fn search(&self, query: &str) -> Result<Vec<Snippet>, AppError>;
}

/// SQLite 연결 풀 위에서 동작하는 `SnippetModelService` 구현체
///
/// `SqlitePool`은 내부적으로 Arc이므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct SnippetModel {
    pool: SqlitePool,
    timeout: Duration,
}

impl SnippetModel {
    pub fn new(pool: SqlitePool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// 작업 하나를 데드라인 안에서 실행합니다.
    async fn with_deadline<T, F>(&self, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>> + Send,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| AppError::Timeout(self.timeout))?
    }
}

#[async_trait]
impl SnippetModelService for SnippetModel {
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_in_days: i64,
    ) -> Result<i64, AppError> {
        let id = self
            .with_deadline(insert_snippet(
                &self.pool,
                title,
                content,
                expires_in_days,
                now_utc(),
            ))
            .await?;

        tracing::debug!(id, expires_in_days, "Inserted snippet");
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Snippet, AppError> {
        self.with_deadline(get_snippet(&self.pool, id, now_utc()))
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn latest(&self) -> Result<Vec<Snippet>, AppError> {
        self.with_deadline(latest_snippets(&self.pool, now_utc()))
            .await
    }

    async fn add_tag(&self, snippet_id: i64, tag: &str) -> Result<(), AppError> {
        let tag = self
            .with_deadline(add_tag_to_snippet(&self.pool, snippet_id, tag))
            .await?;

        tracing::debug!(snippet_id, tag_id = tag.id, tag = %tag.name, "Tagged snippet");
        Ok(())
    }

    async fn get_tags(&self, snippet_id: i64) -> Result<Vec<String>, AppError> {
        self.with_deadline(get_snippet_tags(&self.pool, snippet_id))
            .await
    }

    async fn search(&self, query: &str) -> Result<Vec<Snippet>, AppError> {
        let snippets = self
            .with_deadline(search_snippets(&self.pool, query, now_utc()))
            .await?;

        tracing::debug!(query, count = snippets.len(), "Searched snippets");
        Ok(snippets)
    }
}
