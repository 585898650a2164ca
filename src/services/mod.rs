//! # 서비스 모듈
//!
//! 라우트와 DB 계층 어느 쪽에도 속하지 않는 독립적인 로직입니다.
//! - `password`: Argon2id 해싱과 비밀번호 강도 정책
//! - `token`: bearer 토큰 발급/검증 (`TokenService`)

pub mod password;
pub mod token;
