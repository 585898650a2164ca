//! 통합 테스트 공용 도구
//!
//! 실제 라우터를 인메모리 SQLite 위에 띄우고, HTTP 서버 없이
//! `tower::ServiceExt::oneshot`으로 요청을 보냅니다.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use taskboard::{
    app::{build_router, AppState},
    db,
    services::token::{JwtTokens, TokenService},
};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const STRONG_PASSWORD: &str = "Str0ng!Pass";

pub struct TestApp {
    pub app: Router,
    pub tokens: Arc<JwtTokens>,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = db::connect("sqlite::memory:", 1)
            .await
            .expect("in-memory database should open");
        let tokens = Arc::new(JwtTokens::new(TEST_SECRET));
        let state = AppState::with_tokens(pool, tokens.clone());

        Self {
            app: build_router(state),
            tokens,
        }
    }

    /// 요청을 보내고 (상태 코드, JSON 본문)을 돌려줍니다.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                panic!("non-JSON body ({}): {}", status, String::from_utf8_lossy(&bytes))
            })
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(token), None).await
    }

    /// 가입하고 액세스 토큰을 돌려줍니다.
    pub async fn register(&self, email: &str) -> String {
        let (status, body) = self
            .post(
                "/api/auth/register",
                None,
                serde_json::json!({ "email": email, "password": STRONG_PASSWORD }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");
        body["accessToken"].as_str().unwrap().to_string()
    }

    /// 토큰이 가리키는 사용자 ID
    pub fn user_id(&self, token: &str) -> String {
        self.tokens.verify(token).expect("token should verify")
    }

    pub async fn create_tag(&self, token: &str, name: &str) -> Value {
        let (status, body) = self
            .post("/api/tags", Some(token), serde_json::json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create tag failed: {body}");
        body["tag"].clone()
    }

    pub async fn create_task(&self, token: &str, body: Value) -> Value {
        let (status, body) = self.post("/api/tasks", Some(token), body).await;
        assert_eq!(status, StatusCode::OK, "create task failed: {body}");
        body["task"].clone()
    }
}
