//! # 스니펫 모델 정의
//!
//! 스니펫은 제목과 본문, 생성 시각, 만료 시각을 가진 붙여넣기 단위입니다.
//! `expires`가 현재 UTC 시각보다 뒤에 있을 때만 "활성" 상태이며,
//! 모든 조회 쿼리는 활성 스니펫만 돌려줍니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 스니펫 엔티티 — `snippets` 테이블 한 행(row)에 대응합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Snippet {
    /// 자동 증가 정수 ID
    pub id: i64,
    pub title: String,
    pub content: String,
    /// 생성 시각 (UTC, 초 단위)
    pub created: DateTime<Utc>,
    /// 만료 시각 (UTC, 초 단위)
    pub expires: DateTime<Utc>,
    /// 연결된 태그 이름들
    ///
    /// `#[sqlx(skip)]`: SELECT 결과에는 이 컬럼이 없으므로 `Default`(빈 Vec)로 채웁니다.
    /// 태그가 필요한 호출자는 `get_tags`로 따로 조회해서 채워 넣어야 합니다.
    #[sqlx(skip)]
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 스니펫 생성 요청 — `POST /api/v1/snippets`의 요청 본문
#[derive(Debug, Deserialize)]
pub struct CreateSnippetRequest {
    pub title: String,
    pub content: String,
    /// 만료까지 남은 일수
    pub expires: i64,
}
