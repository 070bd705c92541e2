// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! Authentication gate: per-request identity resolution middleware.
//!
//! Runs once for every request. A verified token binds an
//! [`AuthenticatedMember`] to the request's extensions; anything else
//! (no token, malformed token, bad signature, expiry, non-UUID subject)
//! is logged and the request continues unauthenticated. The gate never
//! rejects a request itself; route handlers decide whether an
//! unauthenticated caller is acceptable.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use super::error::AuthError;
use super::extract;
use super::identity::AuthenticatedMember;
use crate::state::AppState;

/// Middleware entry point, mounted with
/// `axum::middleware::from_fn_with_state`.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // This gate is the only identity producer; drop anything an earlier
    // layer may have inserted before deciding.
    request.extensions_mut().remove::<AuthenticatedMember>();

    if let Some(token) = extract::extract_token(request.headers()) {
        match resolve_identity(&state, &token) {
            Ok(member) => {
                request.extensions_mut().insert(member);
            }
            Err(e) => {
                tracing::debug!(error = %e, "token rejected; continuing unauthenticated");
            }
        }
    }

    next.run(request).await
}

/// Verify a token and map its subject claim to a member id.
fn resolve_identity(state: &AppState, token: &str) -> Result<AuthenticatedMember, AuthError> {
    let claims = state.tokens.verify(token)?;
    let member_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::MalformedToken)?;
    Ok(AuthenticatedMember { member_id })
}
