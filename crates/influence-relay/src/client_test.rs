use influence_core::config::DEFAULT_RELAY_TIMEOUT_SECS;

use super::*;
use crate::error::RelayErrorKind;

#[test]
fn parse_endpoint_accepts_https() {
    let url = parse_endpoint("https://script.google.com/macros/s/abc/exec").unwrap();
    assert_eq!(url.host_str(), Some("script.google.com"));
}

#[test]
fn parse_endpoint_trims_whitespace() {
    let url = parse_endpoint("  http://localhost:8080/hook \n").unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/hook");
}

#[test]
fn parse_endpoint_rejects_garbage() {
    let err = parse_endpoint("not a url").unwrap_err();
    assert_eq!(err.kind(), RelayErrorKind::Endpoint);
}

#[test]
fn parse_endpoint_rejects_non_http_scheme() {
    let err = parse_endpoint("ftp://example.com/upload").unwrap_err();
    assert!(
        err.to_string().contains("unsupported scheme 'ftp'"),
        "unexpected message: {err}"
    );
}

#[test]
fn client_builds_with_default_timeout() {
    assert!(RelayClient::new(DEFAULT_RELAY_TIMEOUT_SECS, "influence-test/0.1").is_ok());
}

#[test]
fn target_keeps_endpoint() {
    let client = RelayClient::new(DEFAULT_RELAY_TIMEOUT_SECS, "influence-test/0.1").unwrap();
    let target = RelayTarget::new(client, "https://hooks.example.com/sheet");
    assert_eq!(target.endpoint(), "https://hooks.example.com/sheet");
}
