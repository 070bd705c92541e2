// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup and is
//! read-only afterwards.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `JWT_SECRET` | HS256 signing secret (min 32 bytes) | Required |
//! | `ACCESS_TOKEN_TTL_MS` | Access token lifetime in milliseconds | Required |
//! | `COOKIE_HTTP_ONLY` | HttpOnly flag on token cookies | `true` |
//! | `COOKIE_SECURE` | Secure flag on token cookies | `false` |
//! | `COOKIE_SAME_SITE` | SameSite policy (`Strict`/`Lax`/`None`) | `Lax` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SEED_MEMBER_EMAIL` | Optional bootstrap member email | Unset |
//! | `SEED_MEMBER_PASSWORD` | Bootstrap member password | Unset |
//! | `SEED_MEMBER_NICKNAME` | Bootstrap member nickname | `member` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

use thiserror::Error;

use crate::auth::cookies::{CookiePolicy, SameSitePolicy};

/// Environment variable name for the JWT signing secret.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Environment variable name for the access-token TTL (milliseconds).
pub const ACCESS_TOKEN_TTL_ENV: &str = "ACCESS_TOKEN_TTL_MS";

pub const COOKIE_HTTP_ONLY_ENV: &str = "COOKIE_HTTP_ONLY";
pub const COOKIE_SECURE_ENV: &str = "COOKIE_SECURE";
pub const COOKIE_SAME_SITE_ENV: &str = "COOKIE_SAME_SITE";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";

pub const SEED_MEMBER_EMAIL_ENV: &str = "SEED_MEMBER_EMAIL";
pub const SEED_MEMBER_PASSWORD_ENV: &str = "SEED_MEMBER_PASSWORD";
pub const SEED_MEMBER_NICKNAME_ENV: &str = "SEED_MEMBER_NICKNAME";

/// HS256 requires a key at least as long as the digest output.
const MIN_SECRET_BYTES: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Process-wide configuration, loaded once before the server starts.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Shared HS256 signing secret for access and refresh tokens.
    pub jwt_secret: String,
    /// Access-token lifetime in milliseconds. The refresh-token lifetime
    /// is always derived from this (see `auth::token`).
    pub access_token_ttl_ms: i64,
    pub cookies: CookiePolicy,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup(JWT_SECRET_ENV).ok_or(ConfigError::Missing(JWT_SECRET_ENV))?;
        if jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::Invalid {
                var: JWT_SECRET_ENV,
                reason: format!("must be at least {MIN_SECRET_BYTES} bytes"),
            });
        }

        let access_token_ttl_ms = lookup(ACCESS_TOKEN_TTL_ENV)
            .ok_or(ConfigError::Missing(ACCESS_TOKEN_TTL_ENV))?
            .parse::<i64>()
            .map_err(|e| ConfigError::Invalid {
                var: ACCESS_TOKEN_TTL_ENV,
                reason: e.to_string(),
            })?;
        if access_token_ttl_ms <= 0 {
            return Err(ConfigError::Invalid {
                var: ACCESS_TOKEN_TTL_ENV,
                reason: "must be a positive number of milliseconds".to_string(),
            });
        }

        let http_only = parse_bool(&lookup, COOKIE_HTTP_ONLY_ENV, true)?;
        let secure = parse_bool(&lookup, COOKIE_SECURE_ENV, false)?;
        let same_site = match lookup(COOKIE_SAME_SITE_ENV) {
            Some(raw) => {
                SameSitePolicy::parse(&raw).ok_or_else(|| ConfigError::Invalid {
                    var: COOKIE_SAME_SITE_ENV,
                    reason: format!("expected Strict, Lax or None, got {raw:?}"),
                })?
            }
            None => SameSitePolicy::Lax,
        };

        let host = lookup(HOST_ENV).unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: PORT_ENV,
                reason: e.to_string(),
            })?,
            None => 8080,
        };

        Ok(Self {
            host,
            port,
            jwt_secret,
            access_token_ttl_ms,
            cookies: CookiePolicy {
                http_only,
                secure,
                same_site,
            },
        })
    }
}

fn parse_bool(
    lookup: impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    match lookup(var) {
        Some(raw) => raw
            .parse::<bool>()
            .map_err(|_| ConfigError::Invalid {
                var,
                reason: format!("expected true or false, got {raw:?}"),
            }),
        None => Ok(default),
    }
}
