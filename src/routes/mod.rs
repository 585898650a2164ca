//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `auth`: 회원가입, 로그인, 내 정보
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `tags`: 태그 CRUD
//! - `tasks`: 작업 CRUD (소유자 범위)

pub mod auth;
pub mod health;
pub mod tags;
pub mod tasks;

pub use health::*;
pub use tags::*;
pub use tasks::*;
