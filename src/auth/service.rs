// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! Login orchestration: credentials in, token pair and profile out.

use chrono::Utc;

use super::error::AuthError;
use super::identity::Identity;
use super::token::TokenKind;
use super::verifier;
use crate::models::{LoginRequest, MemberProfile};
use crate::state::AppState;

/// Everything a successful login produces. Tokens go out as cookies;
/// only the profile goes in the response body.
#[derive(Debug)]
pub struct LoginOutcome {
    pub profile: MemberProfile,
    pub access_token: String,
    pub refresh_token: String,
}

/// Verify credentials and mint the access/refresh token pair.
///
/// This is the only place refresh tokens are issued.
pub async fn login(state: &AppState, request: &LoginRequest) -> Result<LoginOutcome, AuthError> {
    let member = {
        let mut store = state.store.write().await;
        verifier::authenticate(&mut store, &request.email, &request.password, Utc::now())?
    };

    let identity = Identity::from_member(&member);
    let access_token = state.tokens.issue(&identity, TokenKind::Access)?;
    let refresh_token = state.tokens.issue(&identity, TokenKind::Refresh)?;

    tracing::info!(member_id = %member.member_id, "member logged in");

    Ok(LoginOutcome {
        profile: MemberProfile::from(&member),
        access_token,
        refresh_token,
    })
}
