//! # 검색 API 라우트 핸들러
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | GET | /api/v1/search?q=키워드 | 제목·태그 검색 |
//!
//! `q`를 생략하거나 비워 두면 활성 스니펫 전체를 돌려줍니다.

use crate::{error::AppError, routes::AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// URL 쿼리 파라미터 (`?q=키워드`)
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// `GET /search?q=키워드` → `{ "snippets": [...] }`
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, AppError> {
    let snippets = state.snippets.search(&query.q).await?;
    Ok(Json(json!({ "snippets": snippets })))
}
