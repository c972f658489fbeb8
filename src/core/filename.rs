//! Token cache filename composition.
//!
//! Builds `kiro-<method>[-<identity>].json` from the auth method and the
//! best identity available for the token: the account email, or for IDC
//! logins the tenant identifier from the start URL.

use std::fmt;

use serde::Deserialize;

use super::claims::extract_email_from_jwt;
use super::sanitize::sanitize_email_for_filename;
use super::start_url::extract_idc_identifier;

/// Prefix shared by every token cache file.
const FILE_PREFIX: &str = "kiro";

/// Extension of token cache files.
const FILE_EXTENSION: &str = "json";

/// Method name used when the auth method is unknown.
const UNKNOWN_METHOD: &str = "unknown";

/// Auth method whose start URL carries a tenant identifier.
const IDC_METHOD: &str = "idc";

/// The identity fields of a cached token.
///
/// Deserializes from the token cache JSON document (`authMethod`, `email`,
/// `startUrl`); other fields are ignored. Every field may be empty.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenIdentity {
    /// Login flow: `idc`, `builder-id`, or a social provider such as `google`.
    pub auth_method: String,
    /// Account email, possibly taken from the access token claims.
    pub email: String,
    /// IDC start URL, `https://<identifier>.awsapps.com/start`.
    pub start_url: String,
}

impl TokenIdentity {
    /// Fill an empty `email` from the claims of `access_token`.
    ///
    /// An email that is already set is kept.
    #[must_use]
    pub fn with_email_from_jwt(mut self, access_token: &str) -> Self {
        if self.email.is_empty() {
            self.email = extract_email_from_jwt(access_token);
        }
        self
    }
}

/// Custom `Debug` that redacts the email.
impl fmt::Debug for TokenIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIdentity")
            .field("auth_method", &self.auth_method)
            .field("email", &(!self.email.is_empty()).then_some("[REDACTED]"))
            .field("start_url", &self.start_url)
            .finish()
    }
}

/// Build the cache filename for a token.
///
/// An empty auth method short-circuits to `kiro-unknown.json`. Otherwise
/// the identity suffix comes from the sanitized email, or for `idc` from
/// the start URL, with `.` and `@` turned into `-`.
pub fn generate_token_file_name(identity: &TokenIdentity) -> String {
    if identity.auth_method.is_empty() {
        return format!("{FILE_PREFIX}-{UNKNOWN_METHOD}.{FILE_EXTENSION}");
    }

    let method = dash_separators(&sanitize_email_for_filename(
        &identity.auth_method.to_lowercase(),
    ));
    match identity_suffix(identity, &method) {
        Some(suffix) => format!("{FILE_PREFIX}-{method}-{suffix}.{FILE_EXTENSION}"),
        None => format!("{FILE_PREFIX}-{method}.{FILE_EXTENSION}"),
    }
}

fn identity_suffix(identity: &TokenIdentity, method: &str) -> Option<String> {
    let raw = if !identity.email.is_empty() {
        sanitize_email_for_filename(&identity.email)
    } else if method == IDC_METHOD && !identity.start_url.is_empty() {
        extract_idc_identifier(&identity.start_url)
    } else {
        return None;
    };

    let suffix = dash_separators(&raw);
    (!suffix.is_empty()).then_some(suffix)
}

/// Map `.` and `@` to `-` for legibility.
fn dash_separators(component: &str) -> String {
    component.replace(['.', '@'], "-")
}
