// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! Axum extractor for the current caller's member id.
//!
//! Handlers that need the caller declare it explicitly:
//!
//! ```rust,ignore
//! async fn my_handler(CurrentMemberId(member_id): CurrentMemberId) -> impl IntoResponse {
//!     // member_id is the verified caller's Uuid
//! }
//! ```
//!
//! The extractor only reads what the gate middleware resolved; it never
//! inspects tokens itself. On a route without a resolved identity it
//! rejects with 401.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use super::error::AuthError;
use super::identity::AuthenticatedMember;

/// The verified member id of the current caller.
pub struct CurrentMemberId(pub Uuid);

impl<S> FromRequestParts<S> for CurrentMemberId
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let member = parts
            .extensions
            .get::<AuthenticatedMember>()
            .ok_or(AuthError::Unauthorized)?;

        Ok(CurrentMemberId(member.member_id))
    }
}
