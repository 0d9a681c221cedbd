use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{AppError, Result};

/// Claims carried by every access token.
///
/// Tokens are stateless: identity and role travel in the payload and the
/// only server-side check is signature + expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id).
    pub sub: i64,
    /// The subject's role at issue time.
    pub role: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Why a token failed verification.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token")]
    Malformed,
}

/// Signs a new HS256 token for the given user.
pub fn issue_token(user_id: i64, role: &str, secret: &[u8], ttl: Duration) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

/// Verifies a token's signature and expiry, returning the embedded claims.
///
/// Leeway is zero so a token past its `exp` is rejected immediately.
pub fn verify_token(token: &str, secret: &[u8]) -> std::result::Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"unit-test-secret-unit-test-secret";

    #[test]
    fn round_trip_preserves_subject_and_role() {
        let token = issue_token(42, "admin", SECRET, Duration::hours(1)).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn already_expired_token_fails_with_expired() {
        let token = issue_token(7, "employee", SECRET, Duration::seconds(-1)).unwrap();
        assert_eq!(verify_token(&token, SECRET).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn tampered_payload_fails_with_invalid_signature() {
        let token = issue_token(7, "employee", SECRET, Duration::hours(1)).unwrap();
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();

        let mut payload: Vec<char> = parts[1].chars().collect();
        payload[0] = if payload[0] == 'A' { 'B' } else { 'A' };
        parts[1] = payload.into_iter().collect();

        let tampered = parts.join(".");
        assert_eq!(
            verify_token(&tampered, SECRET).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn wrong_secret_fails_with_invalid_signature() {
        let token = issue_token(7, "employee", SECRET, Duration::hours(1)).unwrap();
        assert_eq!(
            verify_token(&token, b"a-completely-different-secret!!!").unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn garbage_fails_with_malformed() {
        assert_eq!(
            verify_token("not-a-token", SECRET).unwrap_err(),
            TokenError::Malformed
        );
        assert_eq!(verify_token("", SECRET).unwrap_err(), TokenError::Malformed);
    }
}
