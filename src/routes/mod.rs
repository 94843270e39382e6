//! # 라우트 핸들러 모듈
//!
//! 모델 계층(`db::SnippetModelService`)을 호출해 결과를 JSON으로 돌려주는 얇은 HTTP 계층입니다.
//! 템플릿 렌더링, 세션, 인증은 없습니다.
//!
//! 각 하위 모듈:
//! - `health`: 서버 상태 확인
//! - `search`: 제목·태그 검색
//! - `snippets`: 스니펫 생성/조회와 태그 연결

pub mod health;
pub mod search;
pub mod snippets;

pub use health::*;
pub use search::*;
pub use snippets::*;

use crate::db::SnippetModelService;
use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

/// 애플리케이션 공유 상태
///
/// 핸들러는 구체 타입(`SnippetModel`)이 아니라 트레이트 객체만 봅니다.
/// `Arc`이므로 Axum이 요청마다 clone해도 같은 저장소를 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub snippets: Arc<dyn SnippetModelService>,
}

/// `/api/v1` 아래에 중첩될 API 라우터를 만듭니다.
///
/// axum 0.8부터 경로 파라미터는 `{id}` 문법을 사용합니다.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/snippets", get(latest_snippets).post(create_snippet))
        .route("/snippets/{id}", get(view_snippet))
        .route(
            "/snippets/{id}/tags",
            get(snippet_tags).post(add_snippet_tag),
        )
        .route("/search", get(search))
        .route("/health", get(health_check))
        .with_state(state)
}
