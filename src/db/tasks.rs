//! # 작업(Task) 데이터베이스 쿼리 모듈
//!
//! 단건 조회/수정/삭제는 모두 `id = ? AND user_id = ?` 조건 하나로 소유권을 검사합니다.
//! 다른 사용자의 작업은 "존재하지 않는 작업"과 구별되지 않습니다 (`Ok(None)`).

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

const TASK_COLUMNS: &str =
    "id, title, description, type, tag_id, user_id, created_at, updated_at";

/// 소유권 조건. 단건 쿼리의 WHERE 절은 항상 이 문자열입니다.
const OWNED_BY: &str = "id = ? AND user_id = ?";

const MISSING_TAG: &str = "Tag not found";

/// 쓰기 도중 태그가 사라진 경우(외래키 위반)를 `InvalidReference`로 바꿉니다.
fn reference_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::InvalidReference(MISSING_TAG.to_string())
        }
        other => AppError::Database(other),
    }
}

/// 소유자의 작업 목록을 최신순으로 조회합니다. 태그와 사용자 정보를 함께 채웁니다.
///
/// 태그는 LEFT JOIN이므로 참조가 끊긴 작업도 `tag_name = NULL`로 포함됩니다.
pub async fn list_tasks(
    pool: &SqlitePool,
    owner_id: &str,
    task_type: Option<TaskType>,
) -> Result<Vec<TaskWithRefs>, AppError> {
    let rows = sqlx::query_as::<_, TaskRow>(
        r#"
        SELECT t.id, t.title, t.description, t.type, t.tag_id,
               g.name AS tag_name,
               t.user_id, u.email AS user_email,
               t.created_at, t.updated_at
        FROM tasks t
        JOIN users u ON u.id = t.user_id
        LEFT JOIN tags g ON g.id = t.tag_id
        WHERE t.user_id = ?
          AND (? IS NULL OR t.type = ?)
        ORDER BY t.created_at DESC, t.id DESC
        "#,
    )
    .bind(owner_id)
    .bind(task_type.map(|t| t.as_str()))
    .bind(task_type.map(|t| t.as_str()))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(TaskWithRefs::from).collect())
}

/// 소유자가 일치하는 작업 하나를 조회합니다.
pub async fn get_task(
    pool: &SqlitePool,
    id: &str,
    owner_id: &str,
) -> Result<Option<Task>, AppError> {
    let task = sqlx::query_as::<_, Task>(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks WHERE {OWNED_BY}"
    ))
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(task)
}

/// 새 작업을 저장합니다. 소유자는 인증된 사용자 ID로 고정됩니다.
pub async fn create_task(
    pool: &SqlitePool,
    owner_id: &str,
    new_task: &NewTask,
) -> Result<Task, AppError> {
    let id = uuid::Uuid::now_v7().to_string();

    let task = sqlx::query_as::<_, Task>(&format!(
        r#"
        INSERT INTO tasks (id, title, description, type, tag_id, user_id)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING {TASK_COLUMNS}
        "#
    ))
    .bind(&id)
    .bind(&new_task.title)
    .bind(&new_task.description)
    .bind(new_task.task_type.as_str())
    .bind(&new_task.tag_id)
    .bind(owner_id)
    .fetch_one(pool)
    .await
    .map_err(reference_error)?;

    Ok(task)
}

/// `Option<Option<String>>` 변경값을 SQL의 `CASE WHEN ? THEN ? ...`용 (변경 여부, 새 값)으로 나눕니다.
fn split_change(change: &Option<Option<String>>) -> (bool, Option<String>) {
    match change {
        Some(value) => (true, value.clone()),
        None => (false, None),
    }
}

/// 보낸 필드만 부분 업데이트합니다.
///
/// 소유권 검사와 변경이 UPDATE 한 문장 안에서 일어나므로,
/// 다른 사용자의 작업이면 아무 행도 바뀌지 않고 `Ok(None)`이 됩니다.
pub async fn update_task(
    pool: &SqlitePool,
    id: &str,
    owner_id: &str,
    changes: &TaskChanges,
) -> Result<Option<Task>, AppError> {
    let (description_changed, new_description) = split_change(&changes.description);
    let (tag_changed, new_tag) = split_change(&changes.tag_id);

    let task = sqlx::query_as::<_, Task>(&format!(
        r#"
        UPDATE tasks
        SET title       = COALESCE(?, title),
            description = CASE WHEN ? THEN ? ELSE description END,
            type        = COALESCE(?, type),
            tag_id      = CASE WHEN ? THEN ? ELSE tag_id END,
            updated_at  = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE {OWNED_BY}
        RETURNING {TASK_COLUMNS}
        "#
    ))
    .bind(&changes.title)
    .bind(description_changed)
    .bind(new_description)
    .bind(changes.task_type.map(|t| t.as_str()))
    .bind(tag_changed)
    .bind(new_tag)
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
    .map_err(reference_error)?;

    Ok(task)
}

/// 소유자가 일치하는 작업을 삭제하고, 삭제된 레코드를 반환합니다.
pub async fn delete_task(
    pool: &SqlitePool,
    id: &str,
    owner_id: &str,
) -> Result<Option<Task>, AppError> {
    let task = sqlx::query_as::<_, Task>(&format!(
        "DELETE FROM tasks WHERE {OWNED_BY} RETURNING {TASK_COLUMNS}"
    ))
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(task)
}
