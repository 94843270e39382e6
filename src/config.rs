//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수(.env 포함)에서 서버 설정값을 읽어옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (필수)
//! - `HOST` / `PORT`: 서버 바인딩 주소와 포트
//! - `DB_MAX_CONNECTIONS`: 연결 풀의 최대 연결 수
//! - `DB_ACQUIRE_TIMEOUT_SECS`: 풀에서 연결을 빌릴 때 기다리는 최대 시간
//! - `QUERY_TIMEOUT_SECS`: 저장소 작업 하나에 허용되는 최대 시간(데드라인)

use std::env;
use std::time::Duration;

/// 애플리케이션 전체 설정을 담는 구조체
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:data/snippetbox.db?mode=rwc")
    pub database_url: String,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 4000)
    pub port: u16,
    /// 연결 풀 크기 (기본값: 5)
    pub max_connections: u32,
    /// 연결 획득 대기 시간 (기본값: 5초)
    pub acquire_timeout: Duration,
    /// 저장소 작업별 데드라인 (기본값: 5초)
    pub query_timeout: Duration,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`은 필수이며, 없으면 에러가 발생합니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없거나 숫자가 아니어도 동작합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or("PORT", 4000),
            max_connections: parse_or("DB_MAX_CONNECTIONS", 5),
            acquire_timeout: Duration::from_secs(parse_or("DB_ACQUIRE_TIMEOUT_SECS", 5)),
            query_timeout: Duration::from_secs(parse_or("QUERY_TIMEOUT_SECS", 5)),
        })
    }
}

/// 환경변수를 숫자로 파싱하고, 없거나 파싱에 실패하면 기본값을 사용합니다.
fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
