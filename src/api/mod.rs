// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::middleware::authenticate,
    models::{LoginRequest, MemberProfile},
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod members;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/members/me", get(members::current_member_profile))
        .with_state(state.clone());

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // The gate runs on every route, including public ones; it only
        // resolves identity, it never rejects.
        .layer(from_fn_with_state(state, authenticate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::logout,
        members::current_member_profile,
        health::health
    ),
    components(schemas(LoginRequest, MemberProfile, health::HealthResponse)),
    tags(
        (name = "Auth", description = "Login and logout"),
        (name = "Members", description = "Member profile endpoints"),
        (name = "Health", description = "Liveness probes")
    )
)]
struct ApiDoc;
