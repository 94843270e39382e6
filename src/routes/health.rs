//! # 헬스체크 핸들러
//!
//! `GET /api/v1/health` → `{ "status": "ok" }`

use axum::Json;
use serde_json::{json, Value};

/// DB에 접근하지 않고 고정된 JSON만 반환합니다.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
