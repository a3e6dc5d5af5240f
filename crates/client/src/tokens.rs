//! Token rating system sub-resource.
//!
//! Covers the `/tokens/` endpoints: daily allowance status, consumption
//! reporting, encrypted access-key retrieval with session tracking, session
//! revocation, and the public encryption-info endpoint. Key decryption
//! itself is out of scope; callers get the encrypted material and the
//! published algorithm parameters.

use std::collections::HashMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::Error;
use crate::transport::{expect_json, Transport};

/// Current daily token allowance for the authenticated user.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenStatus {
    pub tokens_available_today: i64,
    pub token_rating: i64,
    pub tokens_used_today: i64,
    pub last_reset: String,
    pub sessions_active: i64,
}

/// Parameters for reporting token consumption.
#[derive(Debug, Clone)]
pub struct TokenConsumeParams {
    pub amount: i64,
    /// Service identifier; defaults to `sdk_client` when empty.
    pub service: Option<String>,
    /// Session identifier from [`AccessKeyResponse`], when one is active.
    pub session_id: Option<String>,
    /// Free-form analytics metadata.
    pub metadata: Option<HashMap<String, Value>>,
}

impl TokenConsumeParams {
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            service: None,
            session_id: None,
            metadata: None,
        }
    }

    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn metadata(mut self, metadata: HashMap<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Result of a consumption report.
///
/// Consumption past the daily allowance still succeeds and is tracked as
/// debt; `error` carries the warning in that case.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConsumeResponse {
    pub success: bool,
    pub tokens_consumed: i64,
    pub tokens_remaining: i64,
    pub token_rating: i64,
    #[serde(default)]
    pub error: Option<String>,
}

/// Encrypted access key plus the one-hour session that tracks its usage.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessKeyResponse {
    pub encrypted_key: String,
    pub expires_at: String,
    pub session_id: String,
    pub tokens_available: i64,
    pub token_rating: i64,
    pub encryption_method: String,
}

/// Published parameters for client-side access-key decryption.
#[derive(Debug, Clone, Deserialize)]
pub struct EncryptionInfo {
    pub algorithm: String,
    pub key_derivation: String,
    pub salt: String,
    pub format: String,
    pub description: String,
    pub javascript_example: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RevokeSessionResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RevokeAllSessionsResponse {
    pub success: bool,
    pub sessions_revoked: i64,
}

/// Subscription tier; all tiers currently share the same token rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameTier {
    Free,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Deluxe,
}

/// Access to the token rating endpoints.
pub struct TokenResource {
    transport: Transport,
}

impl TokenResource {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Current allowance, usage and active-session count.
    pub async fn status(&self) -> Result<TokenStatus, Error> {
        let value = self
            .transport
            .request(Method::GET, "/tokens/status/", &[], None)
            .await?;
        expect_json(value)
    }

    /// Report token consumption.
    ///
    /// Absent optional parameters are sent as explicit nulls, which the
    /// service expects.
    pub async fn consume(&self, params: &TokenConsumeParams) -> Result<TokenConsumeResponse, Error> {
        let body = json!({
            "amount": params.amount,
            "service": params.service.as_deref().unwrap_or("sdk_client"),
            "session_id": params.session_id,
            "metadata": params.metadata,
        });
        let value = self
            .transport
            .request(Method::POST, "/tokens/consume/", &[], Some(&body))
            .await?;
        expect_json(value)
    }

    /// Retrieve the encrypted access key.
    ///
    /// Requires at least 100 tokens available; opens a one-hour session.
    pub async fn access_key(&self) -> Result<AccessKeyResponse, Error> {
        let value = self
            .transport
            .request(Method::GET, "/tokens/access-key/", &[], None)
            .await?;
        expect_json(value)
    }

    /// Revoke one session obtained from [`TokenResource::access_key`].
    pub async fn revoke_session(&self, session_id: &str) -> Result<RevokeSessionResponse, Error> {
        let query = vec![("session_id".to_string(), session_id.to_string())];
        let value = self
            .transport
            .request(Method::POST, "/tokens/revoke-session/", &query, None)
            .await?;
        expect_json(value)
    }

    /// Revoke every active session for the authenticated user.
    pub async fn revoke_all_sessions(&self) -> Result<RevokeAllSessionsResponse, Error> {
        let value = self
            .transport
            .request(Method::POST, "/tokens/revoke-all-sessions/", &[], None)
            .await?;
        expect_json(value)
    }

    /// Public decryption parameters. Does not require valid credentials.
    pub async fn encryption_info(&self) -> Result<EncryptionInfo, Error> {
        let value = self
            .transport
            .request(Method::GET, "/tokens/encryption-info/", &[], None)
            .await?;
        expect_json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_defaults_fill_in() {
        let params = TokenConsumeParams::new(500);
        assert_eq!(params.amount, 500);
        assert!(params.service.is_none());
        assert!(params.session_id.is_none());
        assert!(params.metadata.is_none());
    }

    #[test]
    fn test_game_tier_wire_names_are_lowercase() {
        let tier: GameTier = serde_json::from_str("\"platinum\"").expect("decode");
        assert_eq!(tier, GameTier::Platinum);
        assert_eq!(
            serde_json::to_string(&GameTier::Free).expect("encode"),
            "\"free\""
        );
    }

    #[test]
    fn test_consume_response_error_field_is_optional() {
        let body = r#"{"success":true,"tokens_consumed":500,"tokens_remaining":9500,"token_rating":10000}"#;
        let response: TokenConsumeResponse = serde_json::from_str(body).expect("decode");
        assert!(response.success);
        assert!(response.error.is_none());
    }
}
