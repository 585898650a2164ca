use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::app::AppState;

/// 토큰 검증을 통과한 요청의 사용자
///
/// 핸들러 인자에 `auth_user: AuthUser`를 두면, 핸들러 본문이 실행되기 전에
/// 토큰 검사가 끝납니다. 실패하면 핸들러는 호출되지 않고 401이 나갑니다.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let user_id = state.tokens.verify(token).map_err(|e| {
            tracing::debug!("rejected bearer token: {}", e);
            AuthError::InvalidToken
        })?;

        Ok(AuthUser { user_id })
    }
}

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingToken => "Access token not found",
            AuthError::InvalidToken => "Invalid token",
        };

        let body = Json(json!({
            "success": false,
            "message": message
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
