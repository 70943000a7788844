use std::time::Duration;

use interviewdesk_client::config::{ClientConfig, DEFAULT_BASE_URL};
use rstest::rstest;

#[rstest]
#[case("http://localhost:8080", "http://localhost:8080")]
#[case("http://localhost:8080/", "http://localhost:8080")]
#[case("  https://desk.example.com//  ", "https://desk.example.com")]
fn test_base_url_normalization(#[case] raw: &str, #[case] expected: &str) {
    let config = ClientConfig::new(raw);
    assert_eq!(config.base_url, expected);
}

#[test]
fn test_default_config() {
    let config = ClientConfig::default();

    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(30));
}
