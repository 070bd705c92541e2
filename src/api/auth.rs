// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! Login and logout endpoints.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;

use crate::auth::{service, AuthError};
use crate::models::{LoginRequest, MemberProfile};
use crate::state::AppState;

/// Authenticate with email and password.
///
/// On success the access and refresh tokens are set as cookies; the
/// response body carries only the member profile, never a token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; tokens delivered via cookies", body = MemberProfile),
        (status = 400, description = "Invalid email or password"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<MemberProfile>), AuthError> {
    let outcome = service::login(&state, &request).await?;

    let jar = jar
        .add(state.cookies.access_cookie(outcome.access_token))
        .add(state.cookies.refresh_cookie(outcome.refresh_token));

    Ok((jar, Json(outcome.profile)))
}

/// Clear both token cookies.
///
/// Tokens themselves stay valid until expiry; there is no server-side
/// revocation.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    responses((status = 204, description = "Token cookies cleared"))
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar
        .add(state.cookies.remove_access_cookie())
        .add(state.cookies.remove_refresh_cookie());

    (jar, StatusCode::NO_CONTENT)
}
