//! # 애플리케이션 상태와 라우터
//!
//! `main.rs`와 통합 테스트가 같은 라우터를 쓰도록 여기서 조립합니다.
//!
//! ```text
//! /api
//! ├── POST   /auth/register      (공개)
//! ├── POST   /auth/login         (공개)
//! ├── GET    /auth               내 정보
//! ├── GET    /health             (공개)
//! ├── GET    /tags               POST /tags
//! ├── GET    /tags/{id}          PUT|POST|DELETE /tags/{id}
//! ├── GET    /tasks              POST /tasks
//! └── GET    /tasks/{id}         PATCH|DELETE /tasks/{id}
//! ```
//!
//! "공개"가 아닌 라우트는 핸들러가 `AuthUser`를 받으므로 토큰 없이는 401입니다.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::AppError,
    routes,
    services::token::{JwtTokens, TokenService},
};

/// 모든 라우트 핸들러가 공유하는 상태
///
/// `SqlitePool`과 `Arc`는 clone해도 내부 자원이 복제되지 않습니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        let tokens = JwtTokens::with_previous(&config.jwt_secret, &config.jwt_previous_secrets);
        Self::with_tokens(pool, Arc::new(tokens))
    }

    pub fn with_tokens(pool: SqlitePool, tokens: Arc<dyn TokenService>) -> Self {
        Self { pool, tokens }
    }
}

pub fn build_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth", get(routes::auth::me))
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login));

    let api_routes = Router::new()
        .merge(auth_routes)
        .route("/health", get(routes::health_check))
        .route("/tags", get(routes::list_tags).post(routes::create_tag))
        .route(
            "/tags/{id}",
            get(routes::get_tag)
                .put(routes::update_tag)
                .post(routes::update_tag)
                .delete(routes::delete_tag),
        )
        .route("/tasks", get(routes::list_tasks).post(routes::create_task))
        .route(
            "/tasks/{id}",
            get(routes::get_task)
                .patch(routes::update_task)
                .delete(routes::delete_task),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state);

    // 개발 편의를 위해 모든 출처를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
