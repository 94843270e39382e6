//! # 스니펫 데이터베이스 쿼리 모듈
//!
//! `snippets` 테이블에 대한 생성/조회 쿼리입니다. 수정과 삭제는 없습니다.
//!
//! 모든 조회는 `expires > now` 조건으로 **활성** 스니펫만 돌려줍니다.
//! `now`는 호출하는 쪽(`SnippetModel`)이 `now_utc()`로 만들어 바인딩하므로,
//! 생성/조회/최신 목록/검색이 모두 같은 시계를 기준으로 동작합니다.

use crate::error::AppError;
use crate::models::Snippet;
use chrono::{DateTime, Datelike, SubsecRound, TimeDelta, Utc};
use sqlx::SqlitePool;

/// 최신 목록에 담기는 최대 스니펫 수
pub const LATEST_LIMIT: i64 = 10;

/// 저장할 수 있는 만료 시각의 마지막 연도
///
/// RFC 3339 문자열은 연도가 네 자리일 때만 문자열 순서와 시간 순서가 같습니다.
/// 10000년부터는 `+10240-…`처럼 부호가 붙어 현재 시각보다 "앞"으로 정렬됩니다.
pub const MAX_EXPIRES_YEAR: i32 = 9999;

/// 현재 UTC 시각을 초 단위로 잘라서 반환합니다.
///
/// 저장되는 문자열 형식을 하나로 고정해 두기 위해 소수점 이하 초는 버립니다.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// 새 스니펫을 저장하고 자동 증가된 ID를 반환합니다.
///
/// `expires_in_days`가 0 이하이면 이미 만료된 스니펫이 만들어집니다 (검증하지 않음).
/// 만료 시각이 `MAX_EXPIRES_YEAR`년을 넘어가면 `BadRequest`를 반환합니다.
pub async fn insert_snippet(
    pool: &SqlitePool,
    title: &str,
    content: &str,
    expires_in_days: i64,
    now: DateTime<Utc>,
) -> Result<i64, AppError> {
    // try_days / checked_add_signed: 오버플로 시 패닉 대신 None
    // filter: 네 자리 연도를 넘는 시각은 문자열 비교가 틀어지므로 함께 거부
    let expires = TimeDelta::try_days(expires_in_days)
        .and_then(|delta| now.checked_add_signed(delta))
        .filter(|expires| expires.year() <= MAX_EXPIRES_YEAR)
        .ok_or_else(|| {
            AppError::BadRequest(format!("expires is out of range: {expires_in_days} days"))
        })?;

    let result = sqlx::query(
        r#"
        INSERT INTO snippets (title, content, created, expires)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(now)
    .bind(expires)
    .execute(pool)
    .await?;

    // last_insert_rowid(): AUTOINCREMENT로 방금 부여된 ID
    Ok(result.last_insert_rowid())
}

/// ID로 활성 스니펫 하나를 조회합니다.
///
/// # 반환값
/// - `Ok(Some(Snippet))`: 아직 만료되지 않은 스니펫
/// - `Ok(None)`: 없거나 이미 만료됨 (두 경우를 구분하지 않음)
/// - `Err(AppError)`: DB 에러
pub async fn get_snippet(
    pool: &SqlitePool,
    id: i64,
    now: DateTime<Utc>,
) -> Result<Option<Snippet>, AppError> {
    let snippet = sqlx::query_as::<_, Snippet>(
        r#"
        SELECT id, title, content, created, expires
        FROM snippets
        WHERE expires > ? AND id = ?
        "#,
    )
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(snippet)
}

/// 활성 스니펫을 최신순으로 최대 `LATEST_LIMIT`개 조회합니다.
///
/// 생성 시각 내림차순으로 정렬하고, 같은 초에 만들어진 스니펫은 ID가 큰 쪽이 먼저 옵니다.
/// ID 부여 방식과 무관하게 "가장 최근에 만든 것이 먼저"라는 순서가 유지됩니다.
pub async fn latest_snippets(
    pool: &SqlitePool,
    now: DateTime<Utc>,
) -> Result<Vec<Snippet>, AppError> {
    let snippets = sqlx::query_as::<_, Snippet>(
        r#"
        SELECT id, title, content, created, expires
        FROM snippets
        WHERE expires > ?
        ORDER BY created DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(now)
    .bind(LATEST_LIMIT)
    // fetch_all: 행을 모두 읽은 뒤 연결을 풀에 돌려줍니다.
    // 중간에 에러가 나면 읽은 행은 버리고 에러만 반환합니다.
    .fetch_all(pool)
    .await?;

    Ok(snippets)
}
