// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! Credential verification against the member store.

use chrono::{DateTime, Utc};

use super::error::AuthError;
use super::password;
use crate::models::Member;
use crate::store::InMemoryStore;

/// Authenticate a member by email and password and stamp the last-login
/// time.
///
/// The caller passes the store under its write guard, so lookup,
/// verification and stamp form one critical section: there is no path
/// where authentication succeeds but the stamp is dropped.
///
/// Unknown email and wrong password both return `InvalidCredentials`;
/// the two cases are distinguishable only in internal logs.
pub fn authenticate(
    store: &mut InMemoryStore,
    email: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<Member, AuthError> {
    let member = match store.find_by_email(email) {
        Some(member) => member.clone(),
        None => {
            tracing::debug!(email = %email, "login rejected: unknown email");
            return Err(AuthError::InvalidCredentials);
        }
    };

    if !password::verify_password(password, &member.password_hash) {
        tracing::debug!(email = %email, "login rejected: password mismatch");
        return Err(AuthError::InvalidCredentials);
    }

    store
        .record_login(member.member_id, now)
        .ok_or_else(|| AuthError::InternalError("member vanished during login".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;

    fn store_with_member() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        let hash = hash_password("password123").unwrap();
        store.insert_member(Member::new("test@example.com", hash, "testuser"));
        store
    }

    #[test]
    fn correct_credentials_authenticate_and_stamp_login() {
        let mut store = store_with_member();
        let before = store
            .find_by_email("test@example.com")
            .unwrap()
            .last_login_at;
        assert!(before.is_none());

        let now = Utc::now();
        let member = authenticate(&mut store, "test@example.com", "password123", now).unwrap();

        assert_eq!(member.email, "test@example.com");
        assert_eq!(member.last_login_at, Some(now));
        assert_eq!(
            store
                .find_by_email("test@example.com")
                .unwrap()
                .last_login_at,
            Some(now)
        );
    }

    #[test]
    fn relogin_moves_last_login_forward() {
        let mut store = store_with_member();
        let first = Utc::now();
        authenticate(&mut store, "test@example.com", "password123", first).unwrap();

        let second = first + chrono::Duration::seconds(30);
        let member = authenticate(&mut store, "test@example.com", "password123", second).unwrap();
        assert!(member.last_login_at.unwrap() > first);
    }

    #[test]
    fn unknown_email_and_wrong_password_are_indistinguishable() {
        let mut store = store_with_member();
        let now = Utc::now();

        let unknown =
            authenticate(&mut store, "nobody@example.com", "password123", now).unwrap_err();
        let mismatch =
            authenticate(&mut store, "test@example.com", "wrong-password", now).unwrap_err();

        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(mismatch, AuthError::InvalidCredentials));
        assert_eq!(unknown.to_string(), mismatch.to_string());
    }

    #[test]
    fn failed_login_does_not_stamp() {
        let mut store = store_with_member();
        let _ = authenticate(&mut store, "test@example.com", "wrong-password", Utc::now());
        assert!(store
            .find_by_email("test@example.com")
            .unwrap()
            .last_login_at
            .is_none());
    }

    #[test]
    fn email_lookup_is_case_sensitive() {
        let mut store = store_with_member();
        let err =
            authenticate(&mut store, "TEST@EXAMPLE.COM", "password123", Utc::now()).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
