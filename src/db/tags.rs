//! # 태그 데이터베이스 쿼리 모듈
//!
//! 태그 CRUD를 위한 SQL 쿼리 함수들입니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행됩니다.
//!
//! ## 이름 중복 처리
//! `tags.name`에는 UNIQUE 제약이 걸려 있습니다. 먼저 조회하고 나중에 쓰는 방식은
//! 동시 요청 두 개가 모두 조회를 통과할 수 있으므로, INSERT/UPDATE 자체가
//! 실패하도록 두고 그 에러를 `AppError::Conflict`로 바꿉니다.

use crate::error::{conflict_on_unique, AppError};
use crate::models::*;
use sqlx::SqlitePool;

const DUPLICATE_TAG: &str = "Tag name already exists";

/// 모든 태그를 이름순으로 조회합니다.
pub async fn list_tags(pool: &SqlitePool) -> Result<Vec<Tag>, AppError> {
    let tags = sqlx::query_as::<_, Tag>(
        "SELECT id, name, created_at, updated_at FROM tags ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(tags)
}

/// ID로 태그 하나를 조회합니다.
///
/// `fetch_optional`은 결과가 0행이면 None, 1행이면 Some(Tag)을 반환합니다.
pub async fn get_tag(pool: &SqlitePool, id: &str) -> Result<Option<Tag>, AppError> {
    let tag = sqlx::query_as::<_, Tag>(
        "SELECT id, name, created_at, updated_at FROM tags WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(tag)
}

/// 새 태그를 생성하고 생성된 태그를 반환합니다.
///
/// `name`은 호출 쪽에서 이미 trim된 값이어야 합니다.
pub async fn create_tag(pool: &SqlitePool, name: &str) -> Result<Tag, AppError> {
    // UUIDv7: 시간 기반 UUID로, 생성 순서대로 정렬됩니다
    let id = uuid::Uuid::now_v7().to_string();

    sqlx::query("INSERT INTO tags (id, name) VALUES (?, ?)")
        .bind(&id)
        .bind(name)
        .execute(pool)
        .await
        .map_err(|e| conflict_on_unique(e, DUPLICATE_TAG))?;

    get_tag(pool, &id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created tag".to_string()))
}

/// 태그 이름을 바꿉니다.
///
/// ## 반환값
/// - `Ok(Some(Tag))`: 업데이트 성공
/// - `Ok(None)`: 해당 ID의 태그가 존재하지 않음
/// - `Err(Conflict)`: 다른 태그가 이미 같은 이름을 사용 중
pub async fn update_tag(pool: &SqlitePool, id: &str, name: &str) -> Result<Option<Tag>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE tags
        SET name = ?, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ?
        "#,
    )
    .bind(name)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| conflict_on_unique(e, DUPLICATE_TAG))?;

    if result.rows_affected() == 0 {
        return Ok(None); // 404 처리를 라우트 핸들러에 위임
    }

    get_tag(pool, id).await
}

/// 태그를 삭제하고, 삭제된 태그를 반환합니다.
///
/// 이 태그를 참조하던 작업들의 `tag_id`는 같은 트랜잭션 안에서 NULL로 바뀝니다.
/// 스키마의 `ON DELETE SET NULL`과 같은 결과지만, 연결 옵션의 foreign_keys 설정에
/// 기대지 않도록 명시적으로 수행합니다.
pub async fn delete_tag(pool: &SqlitePool, id: &str) -> Result<Option<Tag>, AppError> {
    let mut tx = pool.begin().await?;

    let tag = sqlx::query_as::<_, Tag>(
        "SELECT id, name, created_at, updated_at FROM tags WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(tag) = tag else {
        return Ok(None);
    };

    let detached = sqlx::query(
        r#"
        UPDATE tasks
        SET tag_id = NULL, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE tag_id = ?
        "#,
    )
    .bind(id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM tags WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::debug!(
        tag_id = %id,
        detached_tasks = detached.rows_affected(),
        "tag deleted"
    );

    Ok(Some(tag))
}
