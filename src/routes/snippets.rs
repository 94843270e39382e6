//! # 스니펫 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/snippets | `latest_snippets` | 최근 스니펫 10개 |
//! | POST | /api/v1/snippets | `create_snippet` | 새 스니펫 생성 |
//! | GET | /api/v1/snippets/{id} | `view_snippet` | 스니펫 하나 (태그 포함) |
//! | GET | /api/v1/snippets/{id}/tags | `snippet_tags` | 스니펫의 태그 목록 |
//! | POST | /api/v1/snippets/{id}/tags | `add_snippet_tag` | 스니펫에 태그 추가 |
//!
//! 요청 검증은 이 계층에서만 합니다. 저장소(`db`)는 받은 값을 그대로 저장합니다.

use crate::{error::AppError, models::*, routes::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// 생성 폼에서 고를 수 있는 만료 일수 (하루, 일주일, 일 년)
const ALLOWED_EXPIRES: [i64; 3] = [1, 7, 365];

/// `GET /snippets` → `{ "snippets": [...] }`
///
/// 활성 스니펫이 하나도 없어도 404가 아니라 빈 배열을 반환합니다.
pub async fn latest_snippets(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let snippets = state.snippets.latest().await?;
    Ok(Json(json!({ "snippets": snippets })))
}

/// `POST /snippets` + `{ "title", "content", "expires" }` → `201 { "id": ... }`
pub async fn create_snippet(
    State(state): State<AppState>,
    Json(req): Json<CreateSnippetRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title cannot be empty".to_string()));
    }
    if req.content.trim().is_empty() {
        return Err(AppError::BadRequest("Content cannot be empty".to_string()));
    }
    if !ALLOWED_EXPIRES.contains(&req.expires) {
        return Err(AppError::BadRequest(
            "Expires must be 1, 7 or 365 days".to_string(),
        ));
    }

    let id = state
        .snippets
        .insert(&req.title, &req.content, req.expires)
        .await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// `GET /snippets/{id}` → 태그가 채워진 `Snippet`
///
/// 저장소의 `get`은 태그를 돌려주지 않으므로 `get_tags`를 이어서 호출합니다.
/// 만료되었거나 없는 스니펫은 `AppError::NotFound` → 404.
pub async fn view_snippet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Snippet>, AppError> {
    let mut snippet = state.snippets.get(id).await?;
    snippet.tags = state.snippets.get_tags(id).await?;
    Ok(Json(snippet))
}

/// `GET /snippets/{id}/tags` → `{ "tags": [...] }`
///
/// `get_tags`는 "태그 없음"과 "스니펫 없음"을 구분하지 않으므로 먼저 존재를 확인합니다.
pub async fn snippet_tags(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    state.snippets.get(id).await?;

    let tags = state.snippets.get_tags(id).await?;
    Ok(Json(json!({ "tags": tags })))
}

/// `POST /snippets/{id}/tags` + `{ "name": "..." }` → `201 Created`
///
/// 같은 태그를 다시 붙여도 에러 없이 201을 반환합니다 (연결은 하나만 유지).
pub async fn add_snippet_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<AddTagRequest>,
) -> Result<StatusCode, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Tag name cannot be empty".to_string()));
    }

    // 만료된 스니펫에는 태그를 붙이지 않습니다
    state.snippets.get(id).await?;

    state.snippets.add_tag(id, name).await?;
    Ok(StatusCode::CREATED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{test_support::test_pool, SnippetModel};
    use std::{sync::Arc, time::Duration};

    async fn state() -> AppState {
        let model = SnippetModel::new(test_pool().await, Duration::from_secs(5));
        AppState {
            snippets: Arc::new(model),
        }
    }

    fn request(title: &str, expires: i64) -> Json<CreateSnippetRequest> {
        Json(CreateSnippetRequest {
            title: title.to_string(),
            content: "content".to_string(),
            expires,
        })
    }

    #[tokio::test]
    async fn create_then_view_includes_tags() {
        let state = state().await;

        let (status, Json(body)) = create_snippet(State(state.clone()), request("hello", 7))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_i64().unwrap();

        let status = add_snippet_tag(
            State(state.clone()),
            Path(id),
            Json(AddTagRequest {
                name: "  greeting ".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(snippet) = view_snippet(State(state), Path(id)).await.unwrap();
        assert_eq!(snippet.title, "hello");
        assert_eq!(snippet.tags, vec!["greeting"]);
    }

    #[tokio::test]
    async fn create_rejects_invalid_input() {
        let state = state().await;

        let blank = create_snippet(State(state.clone()), request("   ", 7)).await;
        assert!(matches!(blank, Err(AppError::BadRequest(_))));

        let odd_expiry = create_snippet(State(state), request("title", 3)).await;
        assert!(matches!(odd_expiry, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn tags_of_missing_snippet_is_not_found() {
        let state = state().await;

        let err = snippet_tags(State(state.clone()), Path(42)).await.unwrap_err();
        assert!(err.is_not_found());

        let err = add_snippet_tag(
            State(state),
            Path(42),
            Json(AddTagRequest {
                name: "x".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn latest_is_empty_list_not_error() {
        let state = state().await;

        let Json(body) = latest_snippets(State(state)).await.unwrap();
        assert_eq!(body["snippets"], serde_json::json!([]));
    }
}
