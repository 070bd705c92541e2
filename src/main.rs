// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

use std::{env, net::SocketAddr};

use tracing_subscriber::EnvFilter;

use roomstay_auth::api::router;
use roomstay_auth::auth::password::hash_password;
use roomstay_auth::config::{
    Config, SEED_MEMBER_EMAIL_ENV, SEED_MEMBER_NICKNAME_ENV, SEED_MEMBER_PASSWORD_ENV,
};
use roomstay_auth::models::Member;
use roomstay_auth::state::AppState;
use roomstay_auth::store::InMemoryStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration error");
            std::process::exit(1);
        }
    };

    let mut store = InMemoryStore::new();
    seed_member(&mut store);

    let state = AppState::new(&config, store);
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!(%addr, "roomstay auth server listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

/// Insert a bootstrap member when the seed variables are set. Useful for
/// local development against the in-memory store.
fn seed_member(store: &mut InMemoryStore) {
    let (Ok(email), Ok(password)) = (
        env::var(SEED_MEMBER_EMAIL_ENV),
        env::var(SEED_MEMBER_PASSWORD_ENV),
    ) else {
        return;
    };

    let nickname = env::var(SEED_MEMBER_NICKNAME_ENV).unwrap_or_else(|_| "member".to_string());

    match hash_password(&password) {
        Ok(hash) => {
            store.insert_member(Member::new(email.clone(), hash, nickname));
            tracing::info!(email = %email, "seeded bootstrap member");
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to hash seed member password; skipping seed");
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}
