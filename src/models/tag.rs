//! # 태그 모델 정의
//!
//! 태그는 이름이 유일한 라벨이며, `snippet_tags` 연결 테이블을 통해
//! 스니펫과 다대다(N:M) 관계를 맺습니다.

use serde::{Deserialize, Serialize};

/// 태그 엔티티 — `tags` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    /// 유일한 태그 이름 (UNIQUE 제약)
    pub name: String,
}

/// 스니펫에 태그 추가 요청 — `POST /api/v1/snippets/{id}/tags`의 요청 본문
///
/// 태그 ID가 아니라 이름을 받습니다. 같은 이름의 태그가 없으면 새로 만들고,
/// 있으면 기존 태그를 재사용합니다.
#[derive(Debug, Deserialize)]
pub struct AddTagRequest {
    pub name: String,
}
