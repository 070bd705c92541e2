// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! Locating a candidate token on an inbound request.
//!
//! Two carriers are supported with fixed precedence: the
//! `Authorization: Bearer` header always wins over the access-token
//! cookie. Absence of a token is a normal state (public routes), so the
//! result is an `Option`, not an error.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use super::cookies;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract a candidate token: header first, cookie as fallback.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    bearer_token(headers).or_else(|| cookies::access_token_from_headers(headers))
}

/// Extract a Bearer token from the Authorization header. A header with a
/// different scheme or an empty remainder reads as absent.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    fn headers(auth: Option<&str>, cookie: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(auth) = auth {
            headers.insert(AUTHORIZATION, auth.parse().unwrap());
        }
        if let Some(cookie) = cookie {
            headers.insert(COOKIE, cookie.parse().unwrap());
        }
        headers
    }

    #[test]
    fn reads_bearer_token_from_header() {
        let headers = headers(Some("Bearer abc.def.ghi"), None);
        assert_eq!(extract_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn falls_back_to_access_token_cookie() {
        let headers = headers(None, Some("accessToken=cookie-token"));
        assert_eq!(extract_token(&headers), Some("cookie-token".to_string()));
    }

    #[test]
    fn header_wins_when_both_carriers_present() {
        let headers = headers(
            Some("Bearer header-token"),
            Some("accessToken=cookie-token"),
        );
        assert_eq!(extract_token(&headers), Some("header-token".to_string()));
    }

    #[test]
    fn non_bearer_scheme_falls_back_to_cookie() {
        let headers = headers(
            Some("Basic dXNlcjpwYXNz"),
            Some("accessToken=cookie-token"),
        );
        assert_eq!(extract_token(&headers), Some("cookie-token".to_string()));
    }

    #[test]
    fn empty_bearer_reads_as_absent() {
        let headers = headers(Some("Bearer "), None);
        assert_eq!(extract_token(&headers), None);
    }

    #[test]
    fn no_carrier_is_none_not_an_error() {
        assert_eq!(extract_token(&HeaderMap::new()), None);
    }
}
