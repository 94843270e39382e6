//! # 스키마 초기화
//!
//! 마이그레이션 도구 없이, 서버 시작 시(그리고 테스트마다) 필요한 테이블을
//! `CREATE TABLE IF NOT EXISTS`로 만들어 둡니다. 여러 번 실행해도 안전합니다.
//!
//! ```text
//! snippets ←── snippet_tags ──→ tags
//!   (1)          (N:M)          (1)
//! ```
//!
//! 시각 컬럼(`created`, `expires`)은 TEXT로 선언합니다. sqlx가 `DateTime<Utc>`를
//! 항상 같은 RFC 3339 형식으로 저장하므로, 문자열 비교가 곧 시각 비교가 됩니다.

use crate::error::AppError;
use sqlx::SqlitePool;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS snippets (
        id      INTEGER PRIMARY KEY AUTOINCREMENT,
        title   TEXT NOT NULL,
        content TEXT NOT NULL,
        created TEXT NOT NULL,
        expires TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_snippets_expires ON snippets (expires)",
    r#"
    CREATE TABLE IF NOT EXISTS tags (
        id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    // 복합 PRIMARY KEY: 같은 (스니펫, 태그) 쌍은 한 번만 연결됩니다.
    r#"
    CREATE TABLE IF NOT EXISTS snippet_tags (
        snippet_id INTEGER NOT NULL REFERENCES snippets (id),
        tag_id     INTEGER NOT NULL REFERENCES tags (id),
        PRIMARY KEY (snippet_id, tag_id)
    )
    "#,
];

/// 세 테이블과 만료 시각 인덱스를 생성합니다.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for &statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::debug!("Database schema is ready");
    Ok(())
}
