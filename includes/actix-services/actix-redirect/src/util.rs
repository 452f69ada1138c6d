//! Utilities extracting redirect signals from Actix-Web requests

use actix_http::uri::Scheme;
use actix_web::HttpRequest;
use actix_web::http::header;
use redirect_rules::Request;

/// Header carrying the protocol seen by the proxy in front of the server
pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Strip a trailing `:port` from a host, keeping bracketed IPv6 literals intact.
pub fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        return match rest.find(']') {
            Some(end) => &host[..end + 2],
            None => host,
        };
    }
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            name
        }
        _ => host,
    }
}

/// Request host from the `Host` header, falling back to the uri
/// authority (http/2), without port.
pub fn request_host(req: &HttpRequest) -> &str {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| req.uri().host())
        .unwrap_or_default();
    strip_port(host)
}

/// Value of the `X-Forwarded-Proto` header if present and readable
pub fn forwarded_proto(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
}

/// Check whether the connection itself is TLS secured
pub fn is_secure(req: &HttpRequest) -> bool {
    req.app_config().secure() || req.uri().scheme() == Some(&Scheme::HTTPS)
}

/// Percent-decoded request path.
///
/// Encoded `/`, `%` and `+` are kept as is so segment boundaries survive.
#[inline]
pub fn decoded_path(req: &HttpRequest) -> &str {
    req.match_info().as_str()
}

/// Build the engine [`Request`] from [`HttpRequest`] data.
pub fn request_signals(req: &HttpRequest, trust_forwarded_proto: bool) -> Request<'_> {
    Request::new(request_host(req), decoded_path(req))
        .tls(is_secure(req))
        .forwarded_proto(match trust_forwarded_proto {
            true => forwarded_proto(req),
            false => None,
        })
}
