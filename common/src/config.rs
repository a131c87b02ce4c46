/// Base URL used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Name of the build-time environment variable that overrides the base URL.
pub const API_URL_ENV: &str = "STUDENT_API_URL";

/// Picks the API base URL: the override when it is set and not blank,
/// otherwise [`DEFAULT_API_BASE_URL`]. Trailing slashes are dropped.
pub fn resolve_base_url(override_url: Option<&str>) -> String {
    override_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, "http://localhost:5000/api")]
    #[case(Some("   "), "http://localhost:5000/api")]
    #[case(Some("https://school.example/api/"), "https://school.example/api")]
    fn resolves_base_url(#[case] override_url: Option<&str>, #[case] expected: &str) {
        assert_eq!(resolve_base_url(override_url), expected);
    }
}
