// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! Member profile endpoints.

use axum::{extract::State, Json};

use crate::auth::CurrentMemberId;
use crate::error::ApiError;
use crate::models::MemberProfile;
use crate::state::AppState;

/// Get the current caller's profile.
///
/// Requires a resolved identity; callers without a valid token get 401
/// from the extractor before this body runs.
#[utoipa::path(
    get,
    path = "/api/members/me",
    tag = "Members",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current member profile", body = MemberProfile),
        (status = 401, description = "Unauthorized - invalid or missing token"),
        (status = 404, description = "Member record no longer exists"),
    )
)]
pub async fn current_member_profile(
    CurrentMemberId(member_id): CurrentMemberId,
    State(state): State<AppState>,
) -> Result<Json<MemberProfile>, ApiError> {
    let store = state.store.read().await;
    let member = store
        .member(member_id)
        .ok_or_else(|| ApiError::not_found("Member not found"))?;

    Ok(Json(MemberProfile::from(member)))
}
