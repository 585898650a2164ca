//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `tag`: 태그 관련 구조체
//! - `task`: 작업(Task)과 상태(TaskType) 관련 구조체
//! - `user`: 사용자(User)와 인증 요청/응답 구조체

pub mod tag;
pub mod task;
pub mod user;

pub use tag::*;
pub use task::*;
pub use user::*;
