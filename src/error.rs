//! # 에러 처리 모듈
//!
//! 모델 계층과 HTTP 계층이 함께 쓰는 에러 타입을 정의합니다.
//!
//! 저장소(`db`)가 호출자에게 노출하는 에러는 사실상 두 종류입니다:
//! - `NotFound`: 활성 상태의 스니펫이 없음 — 호출자가 분기해서 처리하는 "예상된" 결과
//! - 그 외(`Database`, `Timeout`): 저장소 에러 — 로그에 남기고 위로 전파할 대상
//!
//! `BadRequest`는 JSON API가 요청 본문을 검증할 때만 사용합니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
#[derive(Debug, Error)]
pub enum AppError {
    /// 활성(만료되지 않은) 레코드가 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// 잘못된 요청 (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 데이터베이스 드라이버 에러 (HTTP 500)
    /// #[from] 덕분에 sqlx 호출 뒤의 `?`가 이 variant로 자동 변환됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 쿼리가 데드라인 안에 끝나지 않음 (HTTP 500)
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),
}

impl AppError {
    /// `NotFound`인지 확인합니다.
    ///
    /// 호출자는 `matches!`를 직접 써도 되지만, 저장소 에러와 "없음"을
    /// 구분하는 곳이 많아서 짧은 헬퍼를 둡니다.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound)
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 저장소 에러(Database, Timeout)의 상세 내용은 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Timeout(elapsed) => {
                tracing::error!("Database operation timed out after {:?}", elapsed);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "timeout",
                    "The database did not respond in time".to_string(),
                )
            }
        };

        // 결과: { "error": { "code": "not_found", "message": "Resource not found" } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound;
        assert!(err.is_not_found());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("title is empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_errors_are_not_not_found() {
        let db = AppError::Database(sqlx::Error::RowNotFound);
        assert!(!db.is_not_found());
        assert_eq!(db.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let timeout = AppError::Timeout(Duration::from_secs(5));
        assert!(!timeout.is_not_found());
        assert_eq!(
            timeout.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
