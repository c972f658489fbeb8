//! Identity extraction from unverified JWT claims.
//!
//! Splits a compact token into its three parts, base64url-decodes the
//! payload and reads a best-effort identity from the claims. The signature
//! is never checked: the token is untrusted input and the result is only
//! used to label a cache file.

use std::fmt;

use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine, alphabet};
use serde_json::{Map, Value};

use crate::error::KiroTokenError;

/// Unpadded base64url that tolerates non-zero trailing bits, as lenient
/// token issuers produce them.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Claims consulted for an identity, highest priority first.
const IDENTITY_CLAIMS: [&str; 4] = ["email", "preferred_username", "sub", "username"];

/// The decoded claim set of a token payload.
///
/// Implements a custom `Debug` that redacts claim values to prevent
/// accidental leakage of personal data.
pub struct ClaimSet {
    claims: Map<String, Value>,
}

impl ClaimSet {
    /// Return the value of `name` if it is a non-empty string.
    pub fn string_claim(&self, name: &str) -> Option<&str> {
        match self.claims.get(name) {
            Some(Value::String(value)) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Return the first identity claim present, walking the priority table.
    pub fn identity(&self) -> Option<&str> {
        IDENTITY_CLAIMS
            .iter()
            .find_map(|name| self.string_claim(name))
    }
}

/// Custom `Debug` that lists claim names only.
impl fmt::Debug for ClaimSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaimSet")
            .field("claims", &self.claims.keys().collect::<Vec<_>>())
            .field("values", &"[REDACTED]")
            .finish()
    }
}

/// Decode the payload of a compact token into its claim set.
///
/// # Errors
///
/// Returns an error if the token doesn't have exactly three parts, if the
/// payload is not valid base64url, if it is not JSON, or if the JSON value
/// is not an object.
pub fn decode_claims(token: &str) -> Result<ClaimSet, KiroTokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(KiroTokenError::InvalidTokenFormat);
    }

    let bytes = PAYLOAD_ENGINE
        .decode(parts[1])
        .map_err(|_| KiroTokenError::Base64DecodeError {
            segment: "payload".to_string(),
        })?;

    let value: Value =
        serde_json::from_slice(&bytes).map_err(|e| KiroTokenError::JsonParseError {
            segment: "payload".to_string(),
            reason: e.to_string(),
        })?;

    match value {
        Value::Object(claims) => Ok(ClaimSet { claims }),
        _ => Err(KiroTokenError::ClaimsNotAnObject),
    }
}

/// Extract an email-like identity from a token without verifying it.
///
/// Looks at `email`, then `preferred_username`, then `sub`, then
/// `username`, and returns the first non-empty string value verbatim.
/// Every failure degrades to an empty string.
pub fn extract_email_from_jwt(token: &str) -> String {
    match decode_claims(token) {
        Ok(claims) => claims.identity().unwrap_or_default().to_string(),
        Err(e) => {
            log::debug!("no identity extracted from token: {e}");
            String::new()
        }
    }
}
