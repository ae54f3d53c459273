#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Request-derived URL tests
///
/// This test suite covers:
/// - Scheme and host taken from a request
/// - Explicit security override
/// - Missing host rejection
use routecall::{CallError, RequestContext, RequestHeader, RoutedCall};

struct ProxiedRequest {
    forwarded_proto: &'static str,
    host: Option<&'static str>,
}

impl RequestHeader for ProxiedRequest {
    fn secure(&self) -> bool {
        self.forwarded_proto == "https"
    }

    fn host(&self) -> Option<&str> {
        self.host
    }
}

#[test]
fn test_absolute_url_for_request() {
    let c = RoutedCall::get("/a?x=1").with_fragment("top");

    let plain = RequestContext::new(false, "example.com");
    assert_eq!(c.absolute_url_for(&plain).unwrap(), "http://example.com/a?x=1#top");

    let tls = RequestContext::new(true, "example.com");
    assert_eq!(c.absolute_url_for(&tls).unwrap(), "https://example.com/a?x=1#top");
}

#[test]
fn test_absolute_url_secure_override() {
    let c = RoutedCall::get("/login");
    let plain = RequestContext::new(false, "example.com");
    assert_eq!(
        c.absolute_url_for_secure(&plain, true).unwrap(),
        "https://example.com/login"
    );

    let tls = RequestContext::new(true, "example.com");
    assert_eq!(
        c.absolute_url_for_secure(&tls, false).unwrap(),
        "http://example.com/login"
    );
}

#[test]
fn test_web_socket_url_for_request() {
    let c = RoutedCall::get("/chat?id=9").with_fragment("ignored");
    let tls = RequestContext::new(true, "h:9443");
    assert_eq!(c.web_socket_url_for(&tls).unwrap(), "wss://h:9443/chat?id=9");
    assert_eq!(
        c.web_socket_url_for_secure(&tls, false).unwrap(),
        "ws://h:9443/chat?id=9"
    );
}

#[test]
fn test_custom_request_type() {
    let c = RoutedCall::get("/feed");
    let request = ProxiedRequest {
        forwarded_proto: "https",
        host: Some("cdn.example.com"),
    };
    assert_eq!(
        c.absolute_url_for(&request).unwrap(),
        "https://cdn.example.com/feed"
    );
    assert_eq!(
        c.web_socket_url_for(&request).unwrap(),
        "wss://cdn.example.com/feed"
    );
}

#[test]
fn test_dyn_request() {
    let request: &dyn RequestHeader = &RequestContext::new(false, "h");
    assert_eq!(
        RoutedCall::get("/a").absolute_url_for(request).unwrap(),
        "http://h/a"
    );
}

#[test]
fn test_missing_host_is_rejected() {
    let c = RoutedCall::get("/a");
    let request = RequestContext::without_host(true);
    let expected = Err(CallError::InvalidArgument {
        argument: "host",
        reason: "missing from request",
    });

    assert_eq!(c.absolute_url_for(&request), expected);
    assert_eq!(c.absolute_url_for_secure(&request, false), expected);
    assert_eq!(c.web_socket_url_for(&request), expected);
    assert_eq!(c.web_socket_url_for_secure(&request, false), expected);

    let proxied = ProxiedRequest {
        forwarded_proto: "http",
        host: None,
    };
    assert_eq!(c.absolute_url_for(&proxied).unwrap_err().argument(), "host");
}
