// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::cookies::TokenCookies;
use crate::auth::TokenService;
use crate::config::Config;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// The token service and cookie policy are read-only after startup; only
/// the member store is mutable, behind a write lock taken per login.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub tokens: Arc<TokenService>,
    pub cookies: TokenCookies,
}

impl AppState {
    pub fn new(config: &Config, store: InMemoryStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            tokens: Arc::new(TokenService::new(
                &config.jwt_secret,
                config.access_token_ttl_ms,
            )),
            cookies: TokenCookies::new(config.cookies, config.access_token_ttl_ms),
        }
    }

    /// Assemble state from parts. Used by tests that need a store seeded
    /// ahead of time or a token service with a known secret.
    pub fn from_parts(store: InMemoryStore, tokens: TokenService, cookies: TokenCookies) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            tokens: Arc::new(tokens),
            cookies,
        }
    }
}
