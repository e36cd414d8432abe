use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use lms_core::model::SessionRoute;

use crate::error::{GENERIC_VERIFY_FAILURE, VerificationError};

/// Password check for marking a session complete. The HTTP implementation
/// talks to the course server; tests substitute a scripted fake.
#[async_trait]
pub trait Verifier: Send + Sync {
    /// Check the password for a session.
    ///
    /// # Errors
    ///
    /// Returns `VerificationError::Rejected` with the server's message when
    /// the password is refused, or `VerificationError::Http` when the
    /// request itself fails.
    async fn verify(&self, route: SessionRoute, password: &str) -> Result<(), VerificationError>;
}

#[derive(Clone, Debug)]
pub struct VerifierConfig {
    pub endpoint: String,
}

impl VerifierConfig {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn from_env() -> Option<Self> {
        let endpoint = env::var("LMS_VERIFY_URL").ok()?;
        if endpoint.trim().is_empty() {
            return None;
        }
        Some(Self { endpoint })
    }
}

/// Verifier backed by the course server's password endpoint.
#[derive(Clone)]
pub struct HttpVerifier {
    client: Client,
    config: VerifierConfig,
}

impl HttpVerifier {
    #[must_use]
    pub fn new(config: VerifierConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Verifier for HttpVerifier {
    async fn verify(&self, route: SessionRoute, password: &str) -> Result<(), VerificationError> {
        let payload = VerifyRequest {
            day: route.day,
            session: route.session,
            password,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(VerificationError::Rejected(rejection_message(&body)))
    }
}

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    day: u32,
    session: u32,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyErrorBody {
    error: Option<String>,
}

/// Extracts the server's error text from a rejection body, falling back to
/// the generic message when none is present.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<VerifyErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| GENERIC_VERIFY_FAILURE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_is_verbatim_when_present() {
        assert_eq!(
            rejection_message(r#"{"error":"Invalid password"}"#),
            "Invalid password",
        );
    }

    #[test]
    fn rejection_message_falls_back_on_missing_or_empty_error() {
        assert_eq!(rejection_message("{}"), GENERIC_VERIFY_FAILURE);
        assert_eq!(rejection_message(r#"{"error":""}"#), GENERIC_VERIFY_FAILURE);
        assert_eq!(rejection_message(r#"{"error":"  "}"#), GENERIC_VERIFY_FAILURE);
    }

    #[test]
    fn rejection_message_tolerates_non_json_bodies() {
        assert_eq!(rejection_message("Bad Gateway"), GENERIC_VERIFY_FAILURE);
        assert_eq!(rejection_message(""), GENERIC_VERIFY_FAILURE);
    }
}
