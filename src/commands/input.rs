//! Token input resolution shared by the subcommands.
//!
//! A token comes from the positional argument, an environment variable,
//! or stdin, in that order. Tokens are held in `Zeroizing` buffers so they
//! are wiped when dropped.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use kiro_token_name::KiroTokenError;

/// Resolve a token from the argument, `--token-env`, or stdin.
///
/// # Errors
///
/// Returns [`KiroTokenError::NoTokenProvided`] when every source is empty,
/// and the errors of [`read_env_var`] when `token_env` is set.
pub fn resolve_token(
    token: Option<&str>,
    token_env: Option<&str>,
) -> Result<Zeroizing<String>, KiroTokenError> {
    if let Some(token) = token {
        return non_empty(Zeroizing::new(token.trim().to_string()));
    }

    if let Some(name) = token_env {
        return read_env_var(name);
    }

    read_stdin()
}

/// Read a token from the environment variable `name`.
///
/// # Errors
///
/// Returns an error if the name is empty or contains `=` or NUL, if the
/// variable is not set, or if it holds only whitespace.
pub fn read_env_var(name: &str) -> Result<Zeroizing<String>, KiroTokenError> {
    if name.is_empty() || name.contains(['=', '\0']) {
        return Err(KiroTokenError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }

    let value = std::env::var(name).map_err(|_| KiroTokenError::EnvVarNotFound {
        name: name.to_string(),
    })?;
    let value = Zeroizing::new(value);
    non_empty(Zeroizing::new(value.trim().to_string()))
}

/// Read a token piped through stdin. An interactive terminal is never read.
fn read_stdin() -> Result<Zeroizing<String>, KiroTokenError> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(KiroTokenError::NoTokenProvided);
    }

    let mut buffer = Zeroizing::new(String::new());
    if let Err(e) = stdin.read_to_string(&mut buffer) {
        log::debug!("failed to read token from stdin: {e}");
        return Err(KiroTokenError::NoTokenProvided);
    }
    non_empty(Zeroizing::new(buffer.trim().to_string()))
}

fn non_empty(token: Zeroizing<String>) -> Result<Zeroizing<String>, KiroTokenError> {
    if token.is_empty() {
        Err(KiroTokenError::NoTokenProvided)
    } else {
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_is_trimmed() {
        let token = resolve_token(Some("  a.b.c\n"), None).unwrap();
        assert_eq!(token.as_str(), "a.b.c");
    }

    #[test]
    fn test_empty_argument_is_no_token() {
        let err = resolve_token(Some("   "), None).unwrap_err();
        assert!(matches!(err, KiroTokenError::NoTokenProvided));
    }

    #[test]
    fn test_argument_takes_precedence_over_env() {
        let token = resolve_token(Some("arg.token.sig"), Some("=")).unwrap();
        assert_eq!(token.as_str(), "arg.token.sig");
    }

    #[test]
    fn test_env_var_name_with_equals_is_rejected() {
        let err = read_env_var("BAD=NAME").unwrap_err();
        assert!(matches!(err, KiroTokenError::InvalidEnvVarName { .. }));
    }

    #[test]
    fn test_empty_env_var_name_is_rejected() {
        let err = read_env_var("").unwrap_err();
        assert!(matches!(err, KiroTokenError::InvalidEnvVarName { .. }));
    }

    #[test]
    fn test_missing_env_var() {
        let err = read_env_var("KIRO_TOKEN_NAME_TEST_SURELY_UNSET").unwrap_err();
        assert!(matches!(
            err,
            KiroTokenError::EnvVarNotFound { name } if name == "KIRO_TOKEN_NAME_TEST_SURELY_UNSET"
        ));
    }
}
