// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! Member records and the DTOs exposed at the auth boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A registered member as held by the credential store.
///
/// The password is stored as a PHC-format Argon2 hash; the plaintext is
/// never retained beyond the single verification call at login.
#[derive(Debug, Clone)]
pub struct Member {
    pub member_id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub nickname: String,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Member {
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            member_id: Uuid::new_v4(),
            email: email.into(),
            password_hash: password_hash.into(),
            nickname: nickname.into(),
            last_login_at: None,
        }
    }
}

/// Display-safe member profile returned from login and `/api/members/me`.
///
/// Deliberately omits the member id and password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemberProfile {
    pub email: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<&Member> for MemberProfile {
    fn from(member: &Member) -> Self {
        Self {
            email: member.email.clone(),
            nickname: member.nickname.clone(),
            last_login_at: member.last_login_at,
        }
    }
}

/// Request body for POST /api/auth/login.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
