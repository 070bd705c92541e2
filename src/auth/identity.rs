// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! Identity types on both sides of the token boundary.

use uuid::Uuid;

use crate::models::Member;

/// Identity of a verified member, built at login from the credential
/// record. Input to token issuance; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub member_id: Uuid,
    pub email: String,
}

impl Identity {
    pub fn new(member_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            member_id,
            email: email.into(),
        }
    }

    pub fn from_member(member: &Member) -> Self {
        Self::new(member.member_id, member.email.clone())
    }
}

/// Caller identity resolved by the authentication gate for one request.
///
/// Lives only in that request's extensions, so it is scoped to the
/// request by construction and cannot leak across concurrent requests
/// or linger on a reused worker. The gate middleware is the only
/// producer; everything downstream reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedMember {
    pub member_id: Uuid,
}
