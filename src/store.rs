// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! In-memory member credential store.
//!
//! This is the reference implementation of the credential-store collaborator
//! the auth core depends on: lookup by email, existence check by id, and the
//! last-login stamp. A database-backed store can replace it behind the same
//! surface without touching the auth modules.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::Member;

#[derive(Default)]
pub struct InMemoryStore {
    members: HashMap<Uuid, Member>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member and return its id.
    pub fn insert_member(&mut self, member: Member) -> Uuid {
        let member_id = member.member_id;
        self.members.insert(member_id, member);
        member_id
    }

    /// Exact, case-sensitive email lookup. No normalization is applied;
    /// the stored email must match the presented one byte for byte.
    pub fn find_by_email(&self, email: &str) -> Option<&Member> {
        self.members.values().find(|member| member.email == email)
    }

    pub fn member(&self, member_id: Uuid) -> Option<&Member> {
        self.members.get(&member_id)
    }

    /// Existence check used by other domains (room hosts, reservations).
    pub fn member_exists(&self, member_id: Uuid) -> bool {
        self.members.contains_key(&member_id)
    }

    /// Stamp the member's last successful login and return the updated
    /// record. Callers hold the store's write guard across the credential
    /// check and this call, so the stamp commits with the lookup or not
    /// at all.
    pub fn record_login(&mut self, member_id: Uuid, at: DateTime<Utc>) -> Option<Member> {
        let member = self.members.get_mut(&member_id)?;
        member.last_login_at = Some(at);
        Some(member.clone())
    }
}
