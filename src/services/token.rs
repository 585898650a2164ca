//! # 토큰 서비스
//!
//! 사용자 식별자(`userId`)를 담은 bearer 토큰을 발급하고 검증합니다.
//! 라우트와 미들웨어는 `TokenService` 트레이트에만 의존하므로,
//! 서명 방식이나 비밀키 교체 정책이 바뀌어도 라우트 코드는 그대로입니다.
//!
//! 기본 구현 `JwtTokens`는 HS256 JWT를 사용하며 만료 시간을 두지 않습니다.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub iat: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token")]
    Invalid,
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// 토큰 발급/검증 인터페이스
pub trait TokenService: Send + Sync {
    /// 사용자 ID를 담은 서명된 토큰을 발급합니다.
    fn issue(&self, user_id: &str) -> Result<String, TokenError>;

    /// 토큰을 검증하고 담긴 사용자 ID를 돌려줍니다.
    fn verify(&self, token: &str) -> Result<String, TokenError>;
}

/// HS256 JWT 기반 토큰 서비스
///
/// 발급은 항상 현재 비밀키로 하고, 검증은 현재 키와 이전 키들을 차례로 시도합니다.
pub struct JwtTokens {
    encoding: EncodingKey,
    decoding: Vec<DecodingKey>,
    validation: Validation,
}

impl JwtTokens {
    pub fn new(secret: &str) -> Self {
        Self::with_previous(secret, &[])
    }

    pub fn with_previous(secret: &str, previous: &[String]) -> Self {
        let mut decoding = vec![DecodingKey::from_secret(secret.as_bytes())];
        decoding.extend(
            previous
                .iter()
                .map(|old| DecodingKey::from_secret(old.as_bytes())),
        );

        // 토큰에 exp가 없으므로 만료 검사와 필수 클레임 검사를 끕니다.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding,
            validation,
        }
    }
}

impl TokenService for JwtTokens {
    fn issue(&self, user_id: &str) -> Result<String, TokenError> {
        let claims = Claims {
            user_id: user_id.to_string(),
            iat: Utc::now().timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<String, TokenError> {
        for key in &self.decoding {
            if let Ok(data) = decode::<Claims>(token, key, &self.validation) {
                if data.claims.user_id.is_empty() {
                    return Err(TokenError::Invalid);
                }
                return Ok(data.claims.user_id);
            }
        }

        Err(TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_to_same_user() {
        let tokens = JwtTokens::new("test-secret");
        let token = tokens.issue("user-1").unwrap();

        assert_eq!(tokens.verify(&token).unwrap(), "user-1");
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let ours = JwtTokens::new("test-secret");
        let theirs = JwtTokens::new("other-secret");
        let token = theirs.issue("user-1").unwrap();

        assert!(matches!(ours.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let tokens = JwtTokens::new("test-secret");

        assert!(tokens.verify("").is_err());
        assert!(tokens.verify("not.a.jwt").is_err());
    }

    #[test]
    fn previous_secret_still_verifies_after_rotation() {
        let before = JwtTokens::new("old-secret");
        let token = before.issue("user-1").unwrap();

        let rotated = JwtTokens::with_previous("new-secret", &["old-secret".to_string()]);
        assert_eq!(rotated.verify(&token).unwrap(), "user-1");

        // 새로 발급된 토큰은 새 키로 서명되어 이전 키만 아는 쪽에서는 통과하지 못합니다.
        let fresh = rotated.issue("user-2").unwrap();
        assert!(before.verify(&fresh).is_err());
    }
}
