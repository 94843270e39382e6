//! # Snippetbox 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 스키마 초기화 (`CREATE TABLE IF NOT EXISTS`)
//! 5. 스니펫 저장소와 API 라우터 설정
//! 6. HTTP 서버 시작

mod config;
mod db;
mod error;
mod models;
mod routes;

use anyhow::Result;
use axum::Router;
use config::Config;
use db::SnippetModel;
use routes::AppState;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 snippetbox, tower_http, axum 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snippetbox=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    // `?`: DATABASE_URL이 없으면 VarError가 anyhow::Error로 변환되어 main이 종료됩니다
    let config = Config::from_env()?;
    tracing::info!("Starting snippetbox on {}:{}", config.host, config.port);

    // ── 4단계: SQLite 연결 풀 생성 ──
    // 외래 키 검사는 연결마다 켜야 하는 PRAGMA이므로 연결 옵션에서 지정합니다.
    // acquire_timeout: 풀이 가득 찼을 때 연결을 기다리는 최대 시간
    let options = SqliteConnectOptions::from_str(&config.database_url)? // URL 파싱
        .create_if_missing(true) // DB 파일이 없으면 새로 생성
        .foreign_keys(true); // PRAGMA foreign_keys = ON
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await?;

    // ── 5단계: 스키마 초기화 ──
    tracing::info!("Ensuring database schema...");
    db::init_schema(&pool).await?;

    // ── 6단계: 애플리케이션 상태(State) 생성 ──
    // 모든 저장소 작업은 query_timeout 안에 끝나거나 Timeout 에러가 됩니다.
    // Arc::new(...): SnippetModel을 Arc<dyn SnippetModelService>로 감쌉니다.
    // 핸들러는 트레이트만 보므로 테스트에서 다른 구현으로 바꿔 끼울 수 있습니다.
    let state = AppState {
        snippets: Arc::new(SnippetModel::new(pool, config.query_timeout)),
    };

    // ── 7단계: 라우터와 미들웨어 ──
    // 개발 환경 기준으로 CORS는 모두 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // .nest(): API 라우트를 /api/v1 아래에 붙입니다 (/snippets → /api/v1/snippets)
        .nest("/api/v1", routes::api_router(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http()); // HTTP 요청/응답 자동 로깅

    // ── 8단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // 이 줄에서 서버가 Ctrl+C로 종료될 때까지 계속 실행됩니다
    axum::serve(listener, app).await?;

    Ok(())
}
