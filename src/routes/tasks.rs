//! # 작업(Task) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET    /api/tasks[?type=]` → 내 작업 목록 (태그/사용자 정보 포함)
//! - `POST   /api/tasks`         → 새 작업 생성
//! - `GET    /api/tasks/{id}`    → 내 작업 하나 조회
//! - `PATCH  /api/tasks/{id}`    → 내 작업 부분 수정
//! - `DELETE /api/tasks/{id}`    → 내 작업 삭제
//!
//! 소유권은 DB 쿼리의 조건으로 검사됩니다 (`db::tasks`). 다른 사용자의 작업에 대한
//! 요청은 존재하지 않는 작업과 똑같이 404를 받습니다.

use crate::{
    app::AppState,
    db,
    error::AppError,
    extract::{ApiJson, ApiPath, ApiQuery},
    middleware::auth::AuthUser,
    models::*,
};
use axum::{
    extract::State,
    Json,
};
use serde_json::{json, Value};
use validator::Validate;

fn task_not_found() -> AppError {
    AppError::NotFound("Task not found".to_string())
}

fn parse_type(raw: &str) -> Result<TaskType, AppError> {
    raw.parse::<TaskType>().map_err(AppError::BadRequest)
}

/// 태그 ID가 실제로 존재하는지 확인합니다. 없으면 `InvalidReference`(400).
async fn ensure_tag_exists(state: &AppState, tag_id: &str) -> Result<(), AppError> {
    db::get_tag(&state.pool, tag_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::InvalidReference("Tag not found".to_string()))
}

/// `GET /api/tasks`: 내 작업 목록. `?type=TODO` 등으로 상태를 거를 수 있습니다.
pub async fn list_tasks(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiQuery(query): ApiQuery<TaskListQuery>,
) -> Result<Json<Value>, AppError> {
    let task_type = query
        .task_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(parse_type)
        .transpose()?;

    let tasks = db::list_tasks(&state.pool, &auth_user.user_id, task_type).await?;
    Ok(Json(json!({ "success": true, "tasks": tasks })))
}

/// `GET /api/tasks/{id}`
pub async fn get_task(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Value>, AppError> {
    let task = db::get_task(&state.pool, &id, &auth_user.user_id)
        .await?
        .ok_or_else(task_not_found)?;
    Ok(Json(json!({ "success": true, "task": task })))
}

/// `POST /api/tasks` + `{ "title", "description"?, "type"?, "tag"? }`
///
/// type을 생략하면 TODO로 저장됩니다.
pub async fn create_task(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiJson(req): ApiJson<CreateTaskRequest>,
) -> Result<Json<Value>, AppError> {
    let title = req
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Title is required".to_string()))?
        .to_string();

    req.validate()?;

    let task_type = match req.task_type.as_deref() {
        Some(raw) => parse_type(raw)?,
        None => TaskType::default(),
    };

    let tag_id = req.tag.as_deref().filter(|t| !t.is_empty()).map(str::to_string);
    if let Some(tag_id) = &tag_id {
        ensure_tag_exists(&state, tag_id).await?;
    }

    let new_task = NewTask {
        title,
        description: req.description,
        task_type,
        tag_id,
    };
    let task = db::create_task(&state.pool, &auth_user.user_id, &new_task).await?;
    tracing::info!(task_id = %task.id, user_id = %auth_user.user_id, "task created");

    Ok(Json(json!({ "success": true, "message": "Create successfully", "task": task })))
}

/// `PATCH /api/tasks/{id}`: 보낸 필드만 바꿉니다.
///
/// `description`과 `tag`는 빈 문자열로 지울 수 있습니다.
pub async fn update_task(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<String>,
    ApiJson(req): ApiJson<UpdateTaskRequest>,
) -> Result<Json<Value>, AppError> {
    let task_type = req.task_type.as_deref().map(parse_type).transpose()?;

    req.validate()?;

    let title = match req.title.as_deref().map(str::trim) {
        Some("") => return Err(AppError::BadRequest("Title is required".to_string())),
        other => other.map(str::to_string),
    };

    // 빈 문자열은 설명 삭제
    let description = req
        .description
        .map(|d| if d.is_empty() { None } else { Some(d) });

    // 빈 문자열은 태그 연결 해제
    let tag_id = match req.tag.as_deref() {
        None => None,
        Some("") => Some(None),
        Some(tag_id) => {
            ensure_tag_exists(&state, tag_id).await?;
            Some(Some(tag_id.to_string()))
        }
    };

    let changes = TaskChanges {
        title,
        description,
        task_type,
        tag_id,
    };
    let task = db::update_task(&state.pool, &id, &auth_user.user_id, &changes)
        .await?
        .ok_or_else(task_not_found)?;
    tracing::info!(task_id = %task.id, user_id = %auth_user.user_id, "task updated");

    Ok(Json(json!({ "success": true, "message": "Update successfully", "task": task })))
}

/// `DELETE /api/tasks/{id}`: 삭제된 작업을 돌려줍니다.
pub async fn delete_task(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Value>, AppError> {
    let task = db::delete_task(&state.pool, &id, &auth_user.user_id)
        .await?
        .ok_or_else(task_not_found)?;
    tracing::info!(task_id = %task.id, user_id = %auth_user.user_id, "task deleted");

    Ok(Json(json!({ "success": true, "message": "Delete successfully", "task": task })))
}
