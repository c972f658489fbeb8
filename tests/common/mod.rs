//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built JWT tokens with known claims for use in the
//! integration tests.
#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// A valid HS256-signed JWT for testing.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"sub":"1234567890","name":"Test User","iat":1516239022}`
pub const VALID_HS256_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IlRlc3QgVXNlciIsImlhdCI6MTUxNjIzOTAyMn0.\
     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "not-a-valid-jwt";

/// HMAC secret used to sign test tokens. Never checked by the tool.
pub const HMAC_TEST_SECRET: &str = "filename-test-secret-key";

/// Create an HS256-signed token with the given claims.
pub fn create_hs256_token(claims: &serde_json::Value) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(HMAC_TEST_SECRET.as_bytes());
    encode(&header, claims, &key).unwrap()
}

/// Create an unsigned token whose payload is the given raw bytes.
pub fn create_raw_token(payload: &[u8]) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload);
    let signature = URL_SAFE_NO_PAD.encode(b"fake-signature");
    format!("{header}.{payload}.{signature}")
}

/// Claims carrying an email, as issued for Builder ID logins.
pub fn email_claims() -> serde_json::Value {
    serde_json::json!({
        "email": "user.name+tag@sub.example.com",
        "sub": "user123",
        "iat": 1516239022
    })
}
