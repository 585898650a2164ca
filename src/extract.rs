//! # 요청 추출자
//!
//! `axum::Json`은 본문 파싱에 실패하면 일반 텍스트로 응답합니다.
//! `ApiJson`은 같은 일을 하되, 실패를 `AppError::BadRequest`로 바꿔
//! 다른 에러와 같은 `{ "success": false, "message": ... }` 형식으로 응답합니다.
//! `ApiQuery`, `ApiPath`도 쿼리 문자열과 경로 파라미터에 대해 같은 역할을 합니다.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
