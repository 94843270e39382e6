//! # 스니펫 검색 모듈
//!
//! 제목 또는 연결된 태그 이름에 검색어가 **부분 문자열**로 들어 있는 활성 스니펫을 찾습니다.
//!
//! ## LIKE 검색
//! 검색어를 `%검색어%` 패턴으로 감싸 `LIKE`로 비교합니다.
//! - SQLite의 `LIKE`는 ASCII 문자에 대해 대소문자를 구분하지 않습니다 ("rust" → "Rust" 매칭)
//! - 빈 검색어는 `%%`가 되어 모든 활성 스니펫과 매칭됩니다
//! - 검색어 안의 `%`, `_`는 이스케이프하지 않으므로 와일드카드로 동작합니다
//!
//! 인덱스를 타지 않는 순차 탐색이지만, 스니펫 수가 적은 서비스라 충분합니다.

use crate::error::AppError;
use crate::models::Snippet;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// 검색어와 매칭되는 활성 스니펫을 최신순으로 모두 반환합니다 (개수 제한 없음).
///
/// `LEFT JOIN`으로 태그가 없는 스니펫도 제목 검색 대상에 포함하고,
/// 태그가 여러 개 매칭되어 행이 늘어나는 것은 `DISTINCT`로 하나로 합칩니다.
pub async fn search_snippets(
    pool: &SqlitePool,
    query: &str,
    now: DateTime<Utc>,
) -> Result<Vec<Snippet>, AppError> {
    let pattern = format!("%{query}%");

    let snippets = sqlx::query_as::<_, Snippet>(
        r#"
        SELECT DISTINCT s.id, s.title, s.content, s.created, s.expires
        FROM snippets s
        LEFT JOIN snippet_tags st ON st.snippet_id = s.id
        LEFT JOIN tags t ON t.id = st.tag_id
        WHERE s.expires > ?
          AND (s.title LIKE ? OR t.name LIKE ?)
        ORDER BY s.created DESC, s.id DESC
        "#,
    )
    .bind(now)
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(snippets)
}
