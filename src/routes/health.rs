//! # 헬스체크(Health Check) 핸들러
//!
//! - `GET /api/health` → `{ "success": true, "status": "ok" }`
//!
//! 인증 없이 호출할 수 있으며, DB에 간단한 쿼리를 보내 연결 상태도 함께 확인합니다.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{app::AppState, error::AppError};

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    sqlx::query("SELECT 1").execute(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "status": "ok"
    })))
}
