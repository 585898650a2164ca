//! # 작업(Task) 모델 정의
//!
//! 작업은 항상 한 명의 사용자(소유자)에게 속하며, 선택적으로 태그 하나를 참조합니다.
//!
//! ## 상태(type)
//! `TODO`, `IN_PROGRESS`, `COMPLETED` 세 가지이며, 어떤 상태에서든
//! 다른 어떤 상태로든 바꿀 수 있습니다. 종료 상태는 없습니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskType {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl TaskType {
    pub const ALL: [TaskType; 3] = [TaskType::Todo, TaskType::InProgress, TaskType::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Todo => "TODO",
            TaskType::InProgress => "IN_PROGRESS",
            TaskType::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(TaskType::Todo),
            // 공백 표기는 예전 클라이언트 호환용
            "IN_PROGRESS" | "IN PROGRESS" => Ok(TaskType::InProgress),
            "COMPLETED" => Ok(TaskType::Completed),
            other => Err(format!("Type is incorrect: {}", other)),
        }
    }
}

/// 작업 엔티티: DB의 `tasks` 테이블 한 행에 대응합니다.
///
/// `tag`와 `user`는 ID만 담습니다. 목록 조회에서는 `TaskWithRefs`가 대신 쓰입니다.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(rename = "tag")]
    pub tag_id: Option<String>,
    #[serde(rename = "user")]
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// 태그/사용자를 JOIN한 목록 조회용 행
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    pub task_type: String,
    pub tag_id: Option<String>,
    pub tag_name: Option<String>,
    pub user_id: String,
    pub user_email: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserRef {
    pub id: String,
    pub email: String,
}

/// 목록 조회 응답 항목. 태그가 삭제되었거나 없으면 `tag: null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithRefs {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub task_type: String,
    pub tag: Option<TagRef>,
    pub user: UserRef,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TaskRow> for TaskWithRefs {
    fn from(row: TaskRow) -> Self {
        // tag_id가 남아 있어도 JOIN 결과(tag_name)가 없으면 해석 불가로 취급합니다.
        let tag = match (row.tag_id, row.tag_name) {
            (Some(id), Some(name)) => Some(TagRef { id, name }),
            _ => None,
        };

        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            task_type: row.task_type,
            tag,
            user: UserRef {
                id: row.user_id,
                email: row.user_email,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// `POST /api/tasks` 본문
///
/// description 길이 제한(150자)은 validator가 바이트가 아닌 문자 수로 검사합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    #[validate(length(max = 150, message = "Description is too long"))]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub task_type: Option<String>,
    pub tag: Option<String>,
}

/// `PATCH /api/tasks/{id}` 본문. 보낸 필드만 바뀝니다.
///
/// `description`이나 `tag`에 빈 문자열을 보내면 값이 지워집니다.
/// `null`이나 필드 생략은 "그대로 둠"입니다.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    #[validate(length(max = 150, message = "Description is too long"))]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub task_type: Option<String>,
    pub tag: Option<String>,
}

/// `GET /api/tasks?type=...`
#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    #[serde(rename = "type")]
    pub task_type: Option<String>,
}

/// 검증을 마친 생성 입력. DB 계층은 이 타입만 받습니다.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub tag_id: Option<String>,
}

/// 검증을 마친 부분 수정 입력
///
/// `description`, `tag_id`: None = 그대로, Some(None) = 지움, Some(Some(v)) = 변경
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub task_type: Option<TaskType>,
    pub tag_id: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_task_types() {
        for t in TaskType::ALL {
            assert_eq!(t.as_str().parse::<TaskType>().unwrap(), t);
        }
        assert_eq!("IN PROGRESS".parse::<TaskType>().unwrap(), TaskType::InProgress);
    }

    #[test]
    fn rejects_unknown_task_type() {
        assert!("BOGUS".parse::<TaskType>().is_err());
        assert!("todo".parse::<TaskType>().is_err());
    }

    #[test]
    fn default_type_is_todo() {
        assert_eq!(TaskType::default(), TaskType::Todo);
    }

    #[test]
    fn description_boundary() {
        let ok = CreateTaskRequest {
            title: Some("t".into()),
            description: Some("a".repeat(150)),
            task_type: None,
            tag: None,
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateTaskRequest {
            description: Some("a".repeat(151)),
            ..ok
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn description_length_counts_characters_not_bytes() {
        let req = UpdateTaskRequest {
            description: Some("가".repeat(150)),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn dangling_tag_resolves_to_none() {
        let row = TaskRow {
            id: "t1".into(),
            title: "title".into(),
            description: None,
            task_type: "TODO".into(),
            tag_id: Some("gone".into()),
            tag_name: None,
            user_id: "u1".into(),
            user_email: "a@x.com".into(),
            created_at: "c".into(),
            updated_at: "u".into(),
        };
        let view = TaskWithRefs::from(row);
        assert!(view.tag.is_none());
        assert_eq!(view.user.email, "a@x.com");
    }
}
