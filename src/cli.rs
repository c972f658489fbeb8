//! CLI argument definitions for kiro-token-name.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! `EmailArgs` and `FilenameArgs` implement custom `Debug` to redact
//! tokens and emails and prevent accidental leakage through debug
//! formatting, error chains, or logging.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Derive safe, deterministic cache filenames for Kiro IDC, Builder ID
/// and social login tokens.
#[derive(Debug, Parser)]
#[command(name = "kiro-token-name")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    ///
    /// `RUST_LOG` overrides this when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the identity found in a JWT's claims, without verifying it.
    Email(EmailArgs),

    /// Print the tenant identifier of an IDC start URL.
    IdcId(IdcIdArgs),

    /// Print a string sanitized into a safe filename component.
    Sanitize(SanitizeArgs),

    /// Print the cache filename for a token.
    Filename(FilenameArgs),
}

/// Arguments for the `email` subcommand.
#[derive(clap::Args)]
pub struct EmailArgs {
    /// The JWT to read. If omitted, reads from stdin.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,
}

/// Custom `Debug` that redacts the token field to prevent accidental leakage.
impl fmt::Debug for EmailArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .finish()
    }
}

/// Arguments for the `idc-id` subcommand.
#[derive(Debug, clap::Args)]
pub struct IdcIdArgs {
    /// The IDC start URL, e.g. `https://d-1234567890.awsapps.com/start`.
    pub start_url: String,
}

/// Arguments for the `sanitize` subcommand.
#[derive(Debug, clap::Args)]
pub struct SanitizeArgs {
    /// The untrusted string to sanitize.
    pub input: String,
}

/// Arguments for the `filename` subcommand.
///
/// Flags override the values loaded from `--token-file`.
#[derive(clap::Args)]
pub struct FilenameArgs {
    /// Login flow: `idc`, `builder-id`, or a social provider.
    #[arg(long, value_name = "METHOD")]
    pub auth_method: Option<String>,

    /// Account email used as the identity suffix.
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// IDC start URL, used when no email is known.
    #[arg(long, value_name = "URL")]
    pub start_url: Option<String>,

    /// Cached token JSON to read `authMethod`, `email`, `startUrl` and
    /// `accessToken` from.
    #[arg(long, value_name = "FILE")]
    pub token_file: Option<PathBuf>,

    /// Read an access token from the specified environment variable and
    /// take the email from its claims when none is given.
    #[arg(long, value_name = "VAR_NAME")]
    pub access_token_env: Option<String>,

    /// Output JSON (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts the email to prevent accidental leakage.
impl fmt::Debug for FilenameArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilenameArgs")
            .field("auth_method", &self.auth_method)
            .field("email", &self.email.as_ref().map(|_| "[REDACTED]"))
            .field("start_url", &self.start_url)
            .field("token_file", &self.token_file)
            .field("access_token_env", &self.access_token_env)
            .field("json", &self.json)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_email_args_debug_redacts_token() {
        let args = EmailArgs {
            token: Some("eyJhbGciOiJIUzI1NiJ9.e30.sig".to_string()),
            token_env: None,
        };
        let debug_output = format!("{args:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("eyJhbGciOiJIUzI1NiJ9"));
    }

    #[test]
    fn test_filename_args_debug_redacts_email() {
        let args = FilenameArgs {
            auth_method: Some("idc".to_string()),
            email: Some("user@example.com".to_string()),
            start_url: None,
            token_file: None,
            access_token_env: None,
            json: false,
        };
        let debug_output = format!("{args:?}");
        assert!(debug_output.contains("idc"));
        assert!(!debug_output.contains("user@example.com"));
    }

    #[test]
    fn test_verbose_flag_counts() {
        let cli = Cli::parse_from(["kiro-token-name", "-vv", "sanitize", "a/b"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Sanitize(_)));
    }
}
