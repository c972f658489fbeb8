//! kiro-token-name: safe, deterministic cache filenames for Kiro tokens.
//!
//! Extracts an identity from unverified JWT claims or an IDC start URL,
//! sanitizes it into a single filename component, and composes the token
//! cache filename `kiro-<method>[-<identity>].json`.

#![forbid(unsafe_code)]

pub mod core;
pub mod error;

pub use crate::core::{
    TokenIdentity, extract_email_from_jwt, extract_idc_identifier, generate_token_file_name,
    sanitize_email_for_filename,
};
pub use crate::error::KiroTokenError;
