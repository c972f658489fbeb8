//! Tenant identifier extraction from IDC start URLs.
//!
//! An IAM Identity Center start URL looks like
//! `https://<identifier>.awsapps.com/start`. The identifier is the host
//! label right before `awsapps.com` and names the organization.

use std::sync::LazyLock;

use regex::Regex;

/// Host of the URL, anchored at the start: optional scheme and userinfo,
/// then labels ending in `<identifier>.awsapps.com`, which must end the host.
static IDC_HOST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[a-z][a-z0-9+.-]*://)?(?:[^/?#@]*@)?(?:[a-z0-9-]+\.)*([a-z0-9-]+)\.awsapps\.com(?:[/:?#]|$)",
    )
    .expect("invalid regex")
});

/// Extract the tenant identifier from an IDC start URL.
///
/// Returns the label unchanged (`d-1234567890`, `my-company`, `view`), or
/// an empty string when the URL is empty or has no `*.awsapps.com` host.
pub fn extract_idc_identifier(start_url: &str) -> String {
    if start_url.is_empty() {
        return String::new();
    }

    IDC_HOST_REGEX
        .captures(start_url)
        .and_then(|caps| caps.get(1))
        .map(|label| label.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url() {
        assert_eq!(extract_idc_identifier(""), "");
    }

    #[test]
    fn test_directory_id_url() {
        assert_eq!(
            extract_idc_identifier("https://d-1234567890.awsapps.com/start"),
            "d-1234567890"
        );
    }

    #[test]
    fn test_company_name_url() {
        assert_eq!(
            extract_idc_identifier("https://my-company.awsapps.com/start"),
            "my-company"
        );
        assert_eq!(
            extract_idc_identifier("https://acme-corp.awsapps.com/start"),
            "acme-corp"
        );
    }

    #[test]
    fn test_http_scheme() {
        assert_eq!(
            extract_idc_identifier("http://d-9876543210.awsapps.com/start"),
            "d-9876543210"
        );
    }

    #[test]
    fn test_simple_names() {
        assert_eq!(extract_idc_identifier("https://test.awsapps.com/start"), "test");
        assert_eq!(extract_idc_identifier("https://view.awsapps.com/start"), "view");
    }

    #[test]
    fn test_without_scheme_or_path() {
        assert_eq!(extract_idc_identifier("my-company.awsapps.com"), "my-company");
    }

    #[test]
    fn test_suffix_is_matched_case_insensitively() {
        assert_eq!(
            extract_idc_identifier("HTTPS://My-Company.AWSAPPS.COM/start"),
            "My-Company"
        );
    }

    #[test]
    fn test_label_before_suffix_is_used_for_nested_hosts() {
        assert_eq!(
            extract_idc_identifier("https://eu.my-company.awsapps.com/start#/"),
            "my-company"
        );
    }

    #[test]
    fn test_port_and_query_after_host() {
        assert_eq!(
            extract_idc_identifier("https://d-1234567890.awsapps.com:443/start"),
            "d-1234567890"
        );
        assert_eq!(
            extract_idc_identifier("https://d-1234567890.awsapps.com?x=1"),
            "d-1234567890"
        );
    }

    #[test]
    fn test_other_hosts_yield_empty() {
        assert_eq!(extract_idc_identifier("https://example.com/start"), "");
        assert_eq!(extract_idc_identifier("not a url"), "");
        assert_eq!(extract_idc_identifier("https://awsapps.com/start"), "");
    }

    #[test]
    fn test_match_in_path_is_ignored() {
        assert_eq!(
            extract_idc_identifier("https://evil.example.net/redirect/x.awsapps.com/start"),
            ""
        );
    }

    #[test]
    fn test_match_in_query_is_ignored() {
        assert_eq!(
            extract_idc_identifier("https://evil.example.net/?next=acme.awsapps.com"),
            ""
        );
        assert_eq!(
            extract_idc_identifier("https://evil.example.net#acme.awsapps.com"),
            ""
        );
    }

    #[test]
    fn test_userinfo_before_host_is_skipped() {
        assert_eq!(
            extract_idc_identifier("https://user@my-company.awsapps.com/start"),
            "my-company"
        );
        assert_eq!(
            extract_idc_identifier("https://acme.awsapps.com@evil.example.net/start"),
            ""
        );
    }

    #[test]
    fn test_suffix_must_end_the_host() {
        assert_eq!(
            extract_idc_identifier("https://x.awsapps.com.evil.net/start"),
            ""
        );
    }
}
