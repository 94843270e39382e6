//! # 태그 데이터베이스 쿼리 모듈
//!
//! 태그를 이름으로 찾거나 만들고(upsert), 스니펫과 연결하는 쿼리입니다.
//!
//! ## 테이블 구조
//! - `tags`: 태그 엔티티 (id, name UNIQUE)
//! - `snippet_tags`: 스니펫과 태그의 다대다(N:M) 관계 테이블, (snippet_id, tag_id) 복합키

use crate::error::AppError;
use crate::models::Tag;
use sqlx::{SqliteConnection, SqlitePool};

/// 이름으로 태그를 찾고, 없으면 새로 만들어 반환합니다.
///
/// `ON CONFLICT(name) DO UPDATE`는 실제로 값을 바꾸지 않는 갱신이지만,
/// 이 덕분에 `RETURNING`이 기존 행도 돌려줍니다. 두 호출자가 동시에 같은 새 이름을
/// 넣더라도 UNIQUE 제약이 한쪽을 기존 행으로 돌려보내므로 둘 다 같은 ID를 받습니다.
///
/// 트랜잭션 안에서 호출할 수 있도록 풀 대신 연결(`&mut SqliteConnection`)을 받습니다.
pub async fn upsert_tag(conn: &mut SqliteConnection, name: &str) -> Result<Tag, AppError> {
    let tag = sqlx::query_as::<_, Tag>(
        r#"
        INSERT INTO tags (name) VALUES (?)
        ON CONFLICT (name) DO UPDATE SET name = excluded.name
        RETURNING id, name
        "#,
    )
    .bind(name)
    // fetch_one: RETURNING이 항상 한 행을 돌려주므로 0행이면 에러로 취급합니다
    .fetch_one(conn)
    .await?; // ?: sqlx::Error → AppError::Database 자동 변환 (error.rs의 #[from])

    Ok(tag)
}

/// 스니펫과 태그를 연결합니다.
///
/// `INSERT OR IGNORE`: 이미 같은 (snippet_id, tag_id) 조합이 있으면 무시합니다.
/// 그래서 같은 태그를 두 번 붙여도 연결은 하나뿐입니다.
pub async fn link_tag(
    conn: &mut SqliteConnection,
    snippet_id: i64,
    tag_id: i64,
) -> Result<(), AppError> {
    sqlx::query("INSERT OR IGNORE INTO snippet_tags (snippet_id, tag_id) VALUES (?, ?)")
        .bind(snippet_id)
        .bind(tag_id)
        .execute(conn)
        .await?;

    Ok(())
}

/// 태그를 찾거나 만든 뒤 스니펫에 연결합니다. 두 단계는 한 트랜잭션으로 묶입니다.
///
/// 중간에 실패하면 트랜잭션이 drop되면서 롤백되므로,
/// 어떤 스니펫에도 연결되지 않은 태그 행이 남지 않습니다.
/// 존재하지 않는 스니펫 ID는 외래 키 제약 위반(`Database` 에러)이 됩니다.
pub async fn add_tag_to_snippet(
    pool: &SqlitePool,
    snippet_id: i64,
    name: &str,
) -> Result<Tag, AppError> {
    // pool.begin(): 풀에서 연결 하나를 빌려 BEGIN을 실행합니다.
    // tx는 commit()이나 drop될 때까지 이 연결을 붙잡고 있습니다.
    let mut tx = pool.begin().await?;

    // &mut tx: Transaction이 DerefMut으로 &mut SqliteConnection처럼 동작합니다.
    // 두 쿼리가 같은 연결, 같은 트랜잭션 안에서 실행됩니다.
    let tag = upsert_tag(&mut tx, name).await?;
    // 여기서 `?`로 빠져나가면 tx가 drop되며 자동 ROLLBACK → 방금 만든 태그도 사라짐
    link_tag(&mut tx, snippet_id, tag.id).await?;

    // commit(): tx의 소유권을 가져가(self) 커밋하고 연결을 풀에 돌려줍니다
    tx.commit().await?;
    Ok(tag)
}

/// 스니펫에 연결된 태그 이름을 이름순으로 조회합니다.
///
/// 태그가 없는 스니펫과 존재하지 않는 스니펫을 구분하지 않고 둘 다 빈 Vec을 반환합니다.
/// 존재 여부는 호출자가 먼저 `get`으로 확인해야 합니다.
pub async fn get_snippet_tags(pool: &SqlitePool, snippet_id: i64) -> Result<Vec<String>, AppError> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT t.name
        FROM tags t
        JOIN snippet_tags st ON st.tag_id = t.id
        WHERE st.snippet_id = ?
        ORDER BY t.name
        "#,
    )
    .bind(snippet_id)
    .fetch_all(pool) // 0행이어도 에러가 아니라 빈 Vec
    .await?;

    // (String,) 튜플을 풀어서 이름만 모읍니다
    Ok(rows.into_iter().map(|(name,)| name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::snippets::{insert_snippet, now_utc};
    use crate::db::test_support::{count_rows, test_pool};

    #[tokio::test]
    async fn upsert_resolves_existing_name_to_same_id() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let first = upsert_tag(&mut conn, "rust").await.unwrap();
        let second = upsert_tag(&mut conn, "rust").await.unwrap();
        let other = upsert_tag(&mut conn, "go").await.unwrap();

        assert_eq!(first, second);
        assert_ne!(first.id, other.id);
    }

    #[tokio::test]
    async fn add_tag_twice_links_once() {
        let pool = test_pool().await;
        let id = insert_snippet(&pool, "t", "c", 7, now_utc()).await.unwrap();

        add_tag_to_snippet(&pool, id, "x").await.unwrap();
        add_tag_to_snippet(&pool, id, "x").await.unwrap();

        assert_eq!(get_snippet_tags(&pool, id).await.unwrap(), vec!["x"]);
        assert_eq!(count_rows(&pool, "snippet_tags").await, 1);
    }

    #[tokio::test]
    async fn shared_tag_name_creates_one_tag_row() {
        let pool = test_pool().await;
        let now = now_utc();
        let a = insert_snippet(&pool, "a", "c", 7, now).await.unwrap();
        let b = insert_snippet(&pool, "b", "c", 7, now).await.unwrap();

        let tag_a = add_tag_to_snippet(&pool, a, "shared").await.unwrap();
        let tag_b = add_tag_to_snippet(&pool, b, "shared").await.unwrap();

        assert_eq!(tag_a.id, tag_b.id);
        assert_eq!(count_rows(&pool, "tags").await, 1);
        assert_eq!(get_snippet_tags(&pool, a).await.unwrap(), vec!["shared"]);
        assert_eq!(get_snippet_tags(&pool, b).await.unwrap(), vec!["shared"]);
    }

    #[tokio::test]
    async fn tags_come_back_sorted_by_name() {
        let pool = test_pool().await;
        let id = insert_snippet(&pool, "t", "c", 7, now_utc()).await.unwrap();

        for name in ["zeta", "alpha", "mid"] {
            add_tag_to_snippet(&pool, id, name).await.unwrap();
        }

        assert_eq!(
            get_snippet_tags(&pool, id).await.unwrap(),
            vec!["alpha", "mid", "zeta"]
        );
    }

    #[tokio::test]
    async fn unknown_snippet_has_no_tags() {
        let pool = test_pool().await;
        assert!(get_snippet_tags(&pool, 404).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_link_rolls_back_new_tag() {
        let pool = test_pool().await;

        // 스니펫 999는 없으므로 외래 키 제약에 걸립니다.
        let err = add_tag_to_snippet(&pool, 999, "orphan").await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(count_rows(&pool, "tags").await, 0);
    }
}
