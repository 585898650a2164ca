//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로
//! - `JWT_SECRET`: 액세스 토큰 서명에 사용할 비밀키
//! - `JWT_PREVIOUS_SECRETS`: 교체(rotation) 이전의 비밀키 목록 (쉼표 구분, 검증 전용)
//! - `DATABASE_MAX_CONNECTIONS`: 연결 풀 최대 크기
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호

use std::env;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후,
/// 애플리케이션 전체에서 공유됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:data/taskboard.db")
    pub database_url: String,
    /// 토큰 서명/검증에 사용하는 현재 비밀키
    pub jwt_secret: String,
    /// 이전 비밀키들. 새 토큰 발급에는 쓰지 않고, 이미 발급된 토큰의 검증에만 사용합니다.
    pub jwt_previous_secrets: Vec<String>,
    /// 연결 풀 최대 연결 수 (기본값: 5)
    pub database_max_connections: u32,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 5000)
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`과 `JWT_SECRET`은 필수이며, 없으면 에러가 발생합니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_previous_secrets: env::var("JWT_PREVIOUS_SECRETS")
                .map(|raw| parse_secret_list(&raw))
                .unwrap_or_default(),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
        })
    }
}

/// 쉼표로 구분된 비밀키 목록을 파싱합니다. 빈 항목은 버립니다.
fn parse_secret_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
