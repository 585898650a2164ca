//! # 태그 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/tags | `list_tags` | 전체 태그 목록 |
//! | GET | /api/tags/{id} | `get_tag` | 태그 하나 조회 |
//! | POST | /api/tags | `create_tag` | 새 태그 생성 |
//! | PUT, POST | /api/tags/{id} | `update_tag` | 태그 이름 변경 |
//! | DELETE | /api/tags/{id} | `delete_tag` | 태그 삭제 (작업의 태그 참조는 해제됨) |
//!
//! 모든 핸들러는 `AuthUser` 추출자를 받으므로 유효한 토큰이 있어야 호출됩니다.
//! 태그에는 소유자가 없어서, 사용자 ID 자체는 로그에만 쓰입니다.

use crate::{
    app::AppState,
    db,
    error::AppError,
    extract::{ApiJson, ApiPath},
    middleware::auth::AuthUser,
    models::*,
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

fn tag_not_found() -> AppError {
    AppError::NotFound("Tag not found".to_string())
}

fn require_name(req: &TagRequest) -> Result<&str, AppError> {
    req.trimmed_name()
        .ok_or_else(|| AppError::BadRequest("Tag name is required".to_string()))
}

/// 전체 태그 목록을 조회합니다.
///
/// `GET /api/tags` → `{ "success": true, "tags": [...] }`
pub async fn list_tags(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let tags = db::list_tags(&state.pool).await?;
    Ok(Json(json!({ "success": true, "tags": tags })))
}

/// `GET /api/tags/{id}`
pub async fn get_tag(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Value>, AppError> {
    let tag = db::get_tag(&state.pool, &id)
        .await?
        .ok_or_else(tag_not_found)?;
    Ok(Json(json!({ "success": true, "tag": tag })))
}

/// 새 태그를 생성합니다.
///
/// `POST /api/tags` + `{ "name": "..." }` → `201 Created`
///
/// 같은 이름(공백 제거 후 비교)이 이미 있으면 409를 반환합니다.
pub async fn create_tag(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiJson(req): ApiJson<TagRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let name = require_name(&req)?;
    let tag = db::create_tag(&state.pool, name).await?;
    tracing::info!(tag_id = %tag.id, user_id = %auth_user.user_id, "tag created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Tag created successfully", "tag": tag })),
    ))
}

/// 태그 이름을 변경합니다.
///
/// `PUT /api/tags/{id}` (또는 `POST`) + `{ "name": "..." }`
pub async fn update_tag(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<String>,
    ApiJson(req): ApiJson<TagRequest>,
) -> Result<Json<Value>, AppError> {
    let name = require_name(&req)?;
    let tag = db::update_tag(&state.pool, &id, name)
        .await?
        // None(태그 없음)이면 NotFound 에러 → HTTP 404 응답
        .ok_or_else(tag_not_found)?;
    tracing::info!(tag_id = %tag.id, user_id = %auth_user.user_id, "tag renamed");

    Ok(Json(json!({ "success": true, "message": "Tag updated successfully", "tag": tag })))
}

/// 태그를 삭제하고, 삭제된 태그를 응답 본문에 담아 돌려줍니다.
///
/// `DELETE /api/tags/{id}`
pub async fn delete_tag(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Value>, AppError> {
    let tag = db::delete_tag(&state.pool, &id)
        .await?
        .ok_or_else(tag_not_found)?;
    tracing::info!(tag_id = %tag.id, user_id = %auth_user.user_id, "tag deleted");

    Ok(Json(json!({ "success": true, "message": "Tag deleted successfully", "tag": tag })))
}
