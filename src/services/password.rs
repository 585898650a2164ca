//! # 비밀번호 처리
//!
//! Argon2id 해싱/검증과 비밀번호 강도 정책을 담당합니다.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// 최소 길이
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// 어떤 비밀번호와도 일치하지 않는 Argon2id 해시.
/// 기본 파라미터(m=19456, t=2, p=1)와 같아서 검증 비용도 실제 계정과 같습니다.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$xgQgFtEghvC2E//QmwKHrg$M01OZN79kUgWN7JRpUA0DDuEkQCB6V7LYrU1aOUsQ0E";

/// 비밀번호를 Argon2id로 해싱하여 PHC 문자열로 반환합니다.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// 저장된 해시와 비밀번호가 일치하는지 확인합니다.
///
/// 해시 형식이 잘못된 경우는 `Err`, 단순 불일치는 `Ok(false)`입니다.
pub fn verify_password(
    password: &str,
    password_hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(password_hash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// 존재하지 않는 계정으로 로그인할 때 호출합니다.
///
/// 결과는 버리고 해시 계산만 수행하여, 이메일이 없는 경우와 비밀번호가 틀린 경우의
/// 응답 시간이 같아지도록 합니다.
pub fn verify_against_dummy(password: &str) {
    let _ = verify_password(password, DUMMY_PASSWORD_HASH);
}

/// 비밀번호 강도 정책: 8자 이상, 소문자/대문자/숫자/특수문자 각각 1개 이상
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        ));
    }

    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("must contain at least one lowercase letter".to_string());
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("must contain at least one uppercase letter".to_string());
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("must contain at least one digit".to_string());
    }

    if !password.chars().any(|c| !c.is_alphanumeric()) {
        return Err("must contain at least one symbol".to_string());
    }

    Ok(())
}
