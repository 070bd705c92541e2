// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! Token cookie policy: the cookie carrier for access/refresh tokens.
//!
//! Cookies are the only place tokens are delivered to browsers; response
//! bodies never carry them. Max-age tracks the corresponding token TTL,
//! and deletion uses the max-age-0 empty-value idiom.

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use super::token::REFRESH_TTL_FACTOR;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// SameSite policy as configured. Own enum so config parsing does not
/// depend on the cookie crate's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSitePolicy {
    Strict,
    Lax,
    None,
}

impl SameSitePolicy {
    /// Parse from configuration (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "strict" => Some(SameSitePolicy::Strict),
            "lax" => Some(SameSitePolicy::Lax),
            "none" => Some(SameSitePolicy::None),
            _ => Option::None,
        }
    }
}

impl From<SameSitePolicy> for SameSite {
    fn from(policy: SameSitePolicy) -> Self {
        match policy {
            SameSitePolicy::Strict => SameSite::Strict,
            SameSitePolicy::Lax => SameSite::Lax,
            SameSitePolicy::None => SameSite::None,
        }
    }
}

/// Configuration-driven cookie attributes.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSitePolicy,
}

impl Default for CookiePolicy {
    fn default() -> Self {
        Self {
            http_only: true,
            secure: false,
            same_site: SameSitePolicy::Lax,
        }
    }
}

/// Builds and clears the token cookies for login/logout responses.
#[derive(Debug, Clone, Copy)]
pub struct TokenCookies {
    policy: CookiePolicy,
    access_ttl_ms: i64,
}

impl TokenCookies {
    pub fn new(policy: CookiePolicy, access_ttl_ms: i64) -> Self {
        Self {
            policy,
            access_ttl_ms,
        }
    }

    pub fn access_cookie(&self, token: String) -> Cookie<'static> {
        self.build(ACCESS_TOKEN_COOKIE, token, self.access_ttl_ms / 1000)
    }

    pub fn refresh_cookie(&self, token: String) -> Cookie<'static> {
        self.build(
            REFRESH_TOKEN_COOKIE,
            token,
            self.access_ttl_ms * REFRESH_TTL_FACTOR / 1000,
        )
    }

    pub fn remove_access_cookie(&self) -> Cookie<'static> {
        self.build(ACCESS_TOKEN_COOKIE, String::new(), 0)
    }

    pub fn remove_refresh_cookie(&self) -> Cookie<'static> {
        self.build(REFRESH_TOKEN_COOKIE, String::new(), 0)
    }

    fn build(&self, name: &'static str, value: String, max_age_secs: i64) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .http_only(self.policy.http_only)
            .secure(self.policy.secure)
            .same_site(self.policy.same_site.into())
            .max_age(time::Duration::seconds(max_age_secs))
            .build()
    }
}

/// Read the access token from a request's `Cookie` header, if present.
pub fn access_token_from_headers(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    fn cookies() -> TokenCookies {
        TokenCookies::new(CookiePolicy::default(), 3_600_000)
    }

    #[test]
    fn access_cookie_carries_policy_and_ttl() {
        let cookie = cookies().access_cookie("tok".to_string());

        assert_eq!(cookie.name(), ACCESS_TOKEN_COOKIE);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(3600)));
    }

    #[test]
    fn refresh_cookie_lives_seven_times_longer() {
        let cookie = cookies().refresh_cookie("tok".to_string());
        assert_eq!(cookie.name(), REFRESH_TOKEN_COOKIE);
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(7 * 3600)));
    }

    #[test]
    fn removal_cookies_use_deletion_idiom() {
        let cookie = cookies().remove_access_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(0)));
    }

    #[test]
    fn secure_flag_is_configuration_driven() {
        let policy = CookiePolicy {
            secure: true,
            same_site: SameSitePolicy::Strict,
            ..CookiePolicy::default()
        };
        let cookie = TokenCookies::new(policy, 1000).access_cookie("tok".to_string());
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn reads_access_token_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "other=x; accessToken=abc123".parse().unwrap());
        assert_eq!(
            access_token_from_headers(&headers),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn missing_cookie_reads_none() {
        let headers = HeaderMap::new();
        assert_eq!(access_token_from_headers(&headers), None);
    }

    #[test]
    fn same_site_parse_is_case_insensitive() {
        assert_eq!(SameSitePolicy::parse("STRICT"), Some(SameSitePolicy::Strict));
        assert_eq!(SameSitePolicy::parse("lax"), Some(SameSitePolicy::Lax));
        assert_eq!(SameSitePolicy::parse("None"), Some(SameSitePolicy::None));
        assert_eq!(SameSitePolicy::parse("sideways"), None);
    }
}
