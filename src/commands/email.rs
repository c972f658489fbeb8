//! Handler for the `email` subcommand.
//!
//! Prints the identity found in a token's claims without verifying its
//! signature. Supports reading the token from a CLI argument, environment
//! variable, or stdin.

use anyhow::Result;

use kiro_token_name::core::{decode_claims, extract_email_from_jwt};

use super::input;
use crate::cli::EmailArgs;

/// Execute the `email` subcommand with the given arguments.
///
/// Returns `false` when the token yields no identity.
pub fn execute(args: &EmailArgs) -> Result<bool> {
    let token = input::resolve_token(args.token.as_deref(), args.token_env.as_deref())?;

    let email = extract_email_from_jwt(&token);
    if email.is_empty() {
        match decode_claims(&token) {
            Err(e) => log::warn!("no identity in token: {e}"),
            Ok(_) => log::warn!(
                "no identity in token: no email, preferred_username, sub or username claim"
            ),
        }
        return Ok(false);
    }

    println!("{email}");
    Ok(true)
}
