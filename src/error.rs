//! Domain error types for kiro-token-name.
//!
//! The filename operations in [`crate::core`] are total and never return
//! these errors. They are produced by the strict claim decoder and by the
//! CLI input layer, and converted to user-friendly messages at the CLI
//! boundary.

use thiserror::Error;

/// Errors that can occur while decoding tokens or resolving CLI input.
#[derive(Debug, Error)]
pub enum KiroTokenError {
    /// The provided token does not have the expected three-part structure.
    #[error("invalid token format: expected 'header.payload.signature' structure")]
    InvalidTokenFormat,

    /// Failed to decode base64url-encoded token segment.
    #[error("failed to decode {segment}: invalid base64url encoding")]
    Base64DecodeError {
        /// Which segment failed to decode (e.g., "payload").
        segment: String,
    },

    /// Failed to parse decoded JSON content.
    #[error("failed to parse {segment} as JSON: {reason}")]
    JsonParseError {
        /// Which segment failed to parse (e.g., "payload").
        segment: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// The payload is valid JSON but not a claim object.
    #[error("token payload is not a JSON object")]
    ClaimsNotAnObject,

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The environment variable name cannot be looked up safely.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected name.
        name: String,
    },

    /// Failed to read or parse a cached token file.
    #[error("failed to load token file '{path}': {reason}")]
    TokenFileError {
        /// Path to the token file.
        path: String,
        /// Description of the failure.
        reason: String,
    },
}
