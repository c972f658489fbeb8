//! Core logic for naming token cache files.
//!
//! This module contains the domain logic separated from CLI concerns.
//! Every operation here is pure and total: malformed input degrades to an
//! empty string or the most conservative filename, never to an error.

pub mod claims;
pub mod filename;
pub mod sanitize;
pub mod start_url;

pub use claims::{ClaimSet, decode_claims, extract_email_from_jwt};
pub use filename::{TokenIdentity, generate_token_file_name};
pub use sanitize::sanitize_email_for_filename;
pub use start_url::extract_idc_identifier;
