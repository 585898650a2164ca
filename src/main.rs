//! # taskboard 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 연결 풀 생성 + 마이그레이션 실행
//! 4. API 라우터 설정
//! 5. HTTP 서버 시작 (Ctrl+C로 정상 종료)

use anyhow::Result;
use taskboard::{
    app::{build_router, AppState},
    config::Config,
    db,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 taskboard, tower_http, axum 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    tracing::info!("Starting taskboard server on {}:{}", config.host, config.port);
    if !config.jwt_previous_secrets.is_empty() {
        tracing::info!(
            "Accepting tokens signed with {} previous secret(s)",
            config.jwt_previous_secrets.len()
        );
    }

    // ── 4단계: 데이터베이스 연결 + 마이그레이션 ──
    let pool = db::connect(&config.database_url, config.database_max_connections).await?;

    // ── 5단계: 라우터 설정 ──
    let state = AppState::new(pool.clone(), &config);
    let app = build_router(state);

    // ── 6단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // 신호를 받을 수 없으면 종료하지 않고 계속 서비스합니다.
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
