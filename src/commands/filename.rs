//! Handler for the `filename` subcommand.
//!
//! Resolves the token identity from a cached token file, explicit flags,
//! and the access token's claims, then prints the cache filename.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use serde_json::json;
use zeroize::Zeroizing;

use kiro_token_name::{KiroTokenError, TokenIdentity, generate_token_file_name};

use super::input;
use crate::cli::FilenameArgs;

/// The fields of a cached token document this command reads.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedToken {
    #[serde(flatten)]
    identity: TokenIdentity,
    #[serde(default)]
    access_token: Option<String>,
}

/// Execute the `filename` subcommand with the given arguments.
pub fn execute(args: &FilenameArgs) -> Result<()> {
    let cached = match &args.token_file {
        Some(path) => load_token_file(path)?,
        None => CachedToken::default(),
    };

    let mut identity = cached.identity;
    if let Some(auth_method) = &args.auth_method {
        identity.auth_method.clone_from(auth_method);
    }
    if let Some(email) = &args.email {
        identity.email.clone_from(email);
    }
    if let Some(start_url) = &args.start_url {
        identity.start_url.clone_from(start_url);
    }

    let access_token = match &args.access_token_env {
        Some(name) => Some(input::read_env_var(name)?),
        None => cached.access_token.map(Zeroizing::new),
    };
    if let Some(token) = &access_token {
        identity = identity.with_email_from_jwt(token);
    }

    let file_name = generate_token_file_name(&identity);
    log::info!("token cache filename for {identity:?}: {file_name}");

    if args.json {
        let output = json!({
            "file_name": file_name,
            "auth_method": identity.auth_method,
            "has_email": !identity.email.is_empty(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{file_name}");
    }

    Ok(())
}

/// Load and parse a cached token JSON document.
fn load_token_file(path: &Path) -> Result<CachedToken, KiroTokenError> {
    let display_path = path.display().to_string();

    let contents = Zeroizing::new(fs::read_to_string(path).map_err(|e| {
        KiroTokenError::TokenFileError {
            path: display_path.clone(),
            reason: e.to_string(),
        }
    })?);

    serde_json::from_str(&contents).map_err(|e| KiroTokenError::TokenFileError {
        path: display_path,
        reason: format!("not a valid token document: {e}"),
    })
}
