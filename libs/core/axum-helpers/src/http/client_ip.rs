use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
};

/// Client IP from proxy headers: first `X-Forwarded-For` entry, then
/// `X-Real-IP`. Unparseable values are ignored.
///
/// Both headers are client-controlled. Deploy behind a reverse proxy that
/// overwrites them (not appends), otherwise a client can rotate the value
/// and escape per-IP rate limiting.
pub fn extract_ip_from_headers(headers: &HeaderMap) -> Option<IpAddr> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .and_then(|s| s.trim().parse().ok());

    forwarded.or_else(|| {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse().ok())
    })
}

/// Client IP for a request, falling back to the socket peer address when
/// the server was started with connect info.
pub fn client_ip(request: &Request) -> Option<IpAddr> {
    extract_ip_from_headers(request.headers()).or_else(|| {
        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_forwarded_for_takes_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
        headers.insert("x-real-ip", "198.51.100.2".parse().unwrap());

        assert_eq!(
            extract_ip_from_headers(&headers),
            Some("203.0.113.7".parse().unwrap())
        );
    }

    #[test]
    fn test_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "not-an-ip".parse().unwrap());
        headers.insert("x-real-ip", "198.51.100.2".parse().unwrap());

        assert_eq!(
            extract_ip_from_headers(&headers),
            Some("198.51.100.2".parse().unwrap())
        );
    }

    #[test]
    fn test_uses_connect_info_without_headers() {
        let mut request = Request::new(Body::empty());
        let addr: SocketAddr = "192.0.2.10:5555".parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));

        assert_eq!(client_ip(&request), Some(addr.ip()));
    }

    #[test]
    fn test_proxy_header_wins_over_peer_address() {
        let mut request = Request::new(Body::empty());
        request
            .headers_mut()
            .insert("x-forwarded-for", "203.0.113.50".parse().unwrap());
        request
            .extensions_mut()
            .insert(ConnectInfo("10.0.0.1:443".parse::<SocketAddr>().unwrap()));

        assert_eq!(client_ip(&request), Some("203.0.113.50".parse().unwrap()));
    }

    #[test]
    fn test_unknown_without_any_source() {
        assert_eq!(client_ip(&Request::new(Body::empty())), None);
    }
}
