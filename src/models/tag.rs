//! # 태그 모델 정의
//!
//! 태그는 작업(Task)을 분류하는 라벨입니다. 소유자가 없으므로
//! 인증된 사용자라면 누구나 만들고, 고치고, 지울 수 있습니다.
//!
//! ## 구조체 역할
//! - `Tag`: 데이터베이스에 저장된 태그 (응답용)
//! - `TagRequest`: 생성/수정 시 클라이언트가 보내는 JSON 본문

use serde::{Deserialize, Serialize};

/// 태그 엔티티: DB의 `tags` 테이블 한 행(row)에 대응합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// 태그 고유 식별자 (UUIDv7 형식 문자열)
    pub id: String,
    /// 태그 이름. 전체에서 유일합니다.
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// 태그 생성/수정 요청: `POST /api/tags`, `PUT /api/tags/{id}`의 본문
///
/// `name`이 Option인 이유: 누락된 경우에도 역직렬화는 성공시키고,
/// 핸들러에서 `{ success: false, message }` 형식의 400 응답을 직접 만들기 위해서입니다.
#[derive(Debug, Deserialize)]
pub struct TagRequest {
    pub name: Option<String>,
}

impl TagRequest {
    /// 앞뒤 공백을 제거한 이름. 비어 있으면 None.
    pub fn trimmed_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let req = TagRequest {
            name: Some("  work  ".to_string()),
        };
        assert_eq!(req.trimmed_name(), Some("work"));
    }

    #[test]
    fn blank_or_missing_name_is_none() {
        assert!(TagRequest { name: None }.trimmed_name().is_none());
        assert!(TagRequest {
            name: Some(" \t ".to_string())
        }
        .trimmed_name()
        .is_none());
    }
}
