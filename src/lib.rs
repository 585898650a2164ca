//! # taskboard
//!
//! 토큰 인증을 쓰는 작업/태그 관리 REST API 서버입니다.
//!
//! - `app`: 공유 상태(`AppState`)와 라우터 조립
//! - `config`: 환경변수 설정
//! - `db`: SQLite 쿼리 계층
//! - `error`: `AppError`와 HTTP 응답 변환
//! - `extract`: JSON 본문 추출자
//! - `middleware`: 토큰 검증 추출자(`AuthUser`)
//! - `models`: 요청/응답/행 구조체
//! - `routes`: 핸들러
//! - `services`: 비밀번호 해싱, 토큰 발급/검증

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
