// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! RoomStay - Session Authentication Service
//!
//! This crate provides credential login and stateless JWT session
//! authentication for the RoomStay rooms API. Members log in with
//! email/password; the service issues signed access/refresh tokens and
//! resolves caller identity from those tokens on every request.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Token issuance/verification and identity resolution
//! - `store` - Member credential store (in-memory reference implementation)

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
