// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 RoomStay

//! JWT issuance and verification.
//!
//! Access and refresh tokens are HS256-signed with one shared secret and
//! differ only by their `type` claim and lifetime. That means a refresh
//! token passes the same signature check as an access token; callers that
//! care about the distinction must check [`Claims::kind`]. Per-kind key
//! material is a known follow-up, not something this module invents.

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::identity::Identity;

/// Refresh tokens live 7x the configured access-token TTL. Not
/// independently configurable.
pub const REFRESH_TTL_FACTOR: i64 = 7;

/// Token kind, carried in the `type` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Decoded token payload.
///
/// `iat`/`exp` are epoch seconds, the signing library's convention; TTLs
/// are configured in milliseconds and converted at issuance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Member id in UUID string form
    pub sub: String,
    /// Member's login email
    pub email: String,
    /// Token kind (`ACCESS` or `REFRESH`)
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Issued-at timestamp
    pub iat: i64,
    /// Expiry timestamp
    pub exp: i64,
}

/// Stateless token codec. Keys are derived from the configured secret
/// once at startup and shared read-only across requests.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl_ms: i64,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl_ms: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl_ms,
        }
    }

    /// Lifetime of a token of the given kind, in milliseconds.
    pub fn ttl_ms(&self, kind: TokenKind) -> i64 {
        match kind {
            TokenKind::Access => self.access_ttl_ms,
            TokenKind::Refresh => self.access_ttl_ms * REFRESH_TTL_FACTOR,
        }
    }

    /// Sign a token for the given identity and kind.
    ///
    /// Pure apart from reading the clock; encoding can only fail on a
    /// programming defect, surfaced as `InternalError`.
    pub fn issue(&self, identity: &Identity, kind: TokenKind) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: identity.member_id.to_string(),
            email: identity.email.clone(),
            kind,
            iat: now,
            exp: now + self.ttl_ms(kind) / 1000,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InternalError(format!("token encoding failed: {e}")))
    }

    /// Verify signature and expiry, returning the decoded claims.
    ///
    /// Rejects malformed encoding, a signature made with a different
    /// secret, and `exp <= now` (no leeway). The raw library error never
    /// crosses this boundary.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_aud = false;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const SECRET: &str = "test-secret-test-secret-test-secret!";
    const TTL_MS: i64 = 3_600_000;

    fn service() -> TokenService {
        TokenService::new(SECRET, TTL_MS)
    }

    fn identity() -> Identity {
        Identity::new(Uuid::new_v4(), "test@example.com")
    }

    /// Sign arbitrary claims with the test secret, bypassing `issue`.
    fn sign_raw(claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn verify_roundtrips_issued_access_token() {
        let tokens = service();
        let identity = identity();

        let token = tokens.issue(&identity, TokenKind::Access).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, identity.member_id.to_string());
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.kind, TokenKind::Access);
        assert_eq!(claims.exp - claims.iat, TTL_MS / 1000);
    }

    #[test]
    fn refresh_token_lives_seven_times_longer() {
        let tokens = service();
        let token = tokens.issue(&identity(), TokenKind::Refresh).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.kind, TokenKind::Refresh);
        assert_eq!(claims.exp - claims.iat, REFRESH_TTL_FACTOR * TTL_MS / 1000);
    }

    #[test]
    fn verify_rejects_token_signed_with_other_secret() {
        let other = TokenService::new("another-secret-another-secret-!!", TTL_MS);
        let token = other.issue(&identity(), TokenKind::Access).unwrap();

        let err = service().verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[test]
    fn verify_rejects_expired_token() {
        let now = Utc::now().timestamp();
        let token = sign_raw(&Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            kind: TokenKind::Access,
            iat: now - 7200,
            exp: now - 3600,
        });

        let err = service().verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn verify_accepts_token_just_inside_expiry() {
        let now = Utc::now().timestamp();
        let token = sign_raw(&Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            kind: TokenKind::Access,
            iat: now - 3600,
            exp: now + 5,
        });

        assert!(service().verify(&token).is_ok());
    }

    #[test]
    fn verify_rejects_token_just_past_expiry() {
        let now = Utc::now().timestamp();
        let token = sign_raw(&Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            kind: TokenKind::Access,
            iat: now - 3600,
            exp: now - 5,
        });

        let err = service().verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn verify_rejects_garbage() {
        let err = service().verify("not-a-token").unwrap_err();
        assert!(matches!(err, AuthError::MalformedToken));
    }

    #[test]
    fn verify_rejects_tampered_payload() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        let tokens = service();
        let token = tokens.issue(&identity(), TokenKind::Access).unwrap();

        // Rewrite the payload segment, keeping the original signature.
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&Claims {
                sub: Uuid::new_v4().to_string(),
                email: "attacker@example.com".to_string(),
                kind: TokenKind::Access,
                iat: Utc::now().timestamp(),
                exp: Utc::now().timestamp() + 3600,
            })
            .unwrap(),
        );
        parts[1] = &forged_payload;
        let forged = parts.join(".");

        let err = tokens.verify(&forged).unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }
}
