use crate::{
    app::AppState,
    db::users as db_users,
    error::AppError,
    extract::ApiJson,
    middleware::auth::AuthUser,
    models::user::*,
    services::password,
};
use axum::{extract::State, Json};
use serde_json::{json, Value};

const MISSING_CREDENTIALS: &str = "Missing email and/or password";

/// 요청에서 (정규화된 이메일, 비밀번호)를 꺼냅니다. 둘 중 하나라도 없으면 400.
fn require_credentials(req: &CredentialsRequest) -> Result<(String, &str), AppError> {
    let email = req.normalized_email();
    let password = req.password.as_deref().filter(|p| !p.is_empty());

    match (email, password) {
        (Some(email), Some(password)) => {
            if !is_valid_email(&email) {
                return Err(AppError::BadRequest("Email is incorrect".to_string()));
            }
            Ok((email, password))
        }
        _ => Err(AppError::BadRequest(MISSING_CREDENTIALS.to_string())),
    }
}

fn issue_token(state: &AppState, user_id: &str) -> Result<String, AppError> {
    state
        .tokens
        .issue(user_id)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let (email, password) = require_credentials(&req)?;

    password::validate_password_strength(password).map_err(AppError::WeakPassword)?;

    // Hash password with Argon2id
    let password_hash = password::hash_password(password)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

    // Duplicate email surfaces as a UNIQUE violation -> 409
    let user_id = uuid::Uuid::now_v7().to_string();
    let user = db_users::create_user(&state.pool, &user_id, &email, &password_hash).await?;
    tracing::info!(user_id = %user.id, "user registered");

    let access_token = issue_token(&state, &user.id)?;

    Ok(Json(AuthResponse {
        success: true,
        message: "User created successfully".to_string(),
        access_token,
    }))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let (email, password) = require_credentials(&req)?;

    // Unknown email and wrong password produce the same error
    let Some(user) = db_users::find_by_email(&state.pool, &email).await? else {
        // Keep response timing the same as a wrong password
        password::verify_against_dummy(password);
        return Err(AppError::InvalidCredentials);
    };

    let valid = password::verify_password(password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password hash parse error: {}", e)))?;
    if !valid {
        return Err(AppError::InvalidCredentials);
    }

    let access_token = issue_token(&state, &user.id)?;

    Ok(Json(AuthResponse {
        success: true,
        message: "User logged in successfully".to_string(),
        access_token,
    }))
}

/// `GET /api/auth`: 토큰의 주인을 돌려줍니다 (비밀번호 해시 제외).
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let user = db_users::find_by_id(&state.pool, &auth_user.user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "user": UserResponse::from(user)
    })))
}
