// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! # Authentication Module
//!
//! Credential login and stateless JWT session authentication.
//!
//! ## Login Flow
//!
//! 1. Client sends `POST /api/auth/login` with email and password
//! 2. The credential verifier looks the member up, checks the Argon2 hash
//!    and stamps the last-login time in one critical section
//! 3. The login orchestrator issues an access token and a refresh token
//!    (HS256, shared secret) and hands them back as `HttpOnly` cookies;
//!    the response body carries only a display-safe profile
//!
//! ## Request Flow
//!
//! 1. The gate middleware runs on every request: it pulls a candidate
//!    token from the `Authorization: Bearer` header or, failing that,
//!    the access-token cookie
//! 2. A verified token binds an [`AuthenticatedMember`] to the request's
//!    extensions; any failure is logged and the request continues
//!    unauthenticated (route handlers decide whether that is acceptable)
//! 3. Handlers that need the caller declare [`CurrentMemberId`], which
//!    rejects with 401 when no identity was resolved
//!
//! ## Security
//!
//! - Unknown email and wrong password collapse into one client-facing
//!   error, so login cannot be used to enumerate accounts
//! - Tokens expire by their `exp` claim alone; there is no server-side
//!   session table and no revocation list
//! - Identity is carried per request, never in process-wide state

pub mod cookies;
pub mod error;
pub mod extract;
pub mod extractor;
pub mod identity;
pub mod middleware;
pub mod password;
pub mod service;
pub mod token;
pub mod verifier;

pub use error::AuthError;
pub use extractor::CurrentMemberId;
pub use identity::{AuthenticatedMember, Identity};
pub use token::{TokenKind, TokenService};
