//! # 미들웨어 모듈
//!
//! - `auth`: bearer 토큰을 검증해 `AuthUser`를 만들어 주는 추출자(Extractor)

pub mod auth;
