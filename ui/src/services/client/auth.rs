use reqwest::Client;
use tracing::{error, info, instrument};

use super::errors::{ClientError, ClientResult};
use super::types::{AuthRequest, AuthSession};
use crate::services::config::AuthConfig;

/// Client for the remote authentication endpoint
#[derive(Clone)]
pub struct AuthClient {
    http_client: Client,
    config: AuthConfig,
}

impl AuthClient {
    /// Create a new auth client against the configured endpoint base.
    pub fn new(config: AuthConfig) -> Self {
        Self {
            http_client: {
                Client::builder()
                    .user_agent("login-signup-service/1.0")
                    .build()
                    .expect("Failed to create HTTP client")
            },
            config,
        }
    }

    /// Submit credentials for the current mode. Exactly one attempt: no
    /// retry, no timeout, no cancellation.
    #[instrument(skip(self, request), err)]
    pub async fn submit(&self, request: &AuthRequest) -> ClientResult<AuthSession> {
        let url = format!("{}{}", self.config.base_url(), request.endpoint_path());
        info!("Submitting credentials to {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: format!("Failed to reach auth endpoint: {}", e),
            })?;

        if response.status().is_success() {
            let body = response.text().await.map_err(|e| ClientError::Network {
                message: format!("Failed to read response body: {}", e),
            })?;
            session_from_body(&body)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Submission rejected with status {}: {}", status, body);
            Err(rejection_from_body(&body))
        }
    }
}

/// Parse a success body. The contract is a JSON object with a non-empty
/// `access_token`; anything else counts as a malformed response.
pub(crate) fn session_from_body(body: &str) -> ClientResult<AuthSession> {
    let session: AuthSession =
        serde_json::from_str(body).map_err(|e| ClientError::InvalidResponse {
            message: format!("Failed to parse success body: {}", e),
        })?;

    if session.access_token.is_empty() {
        return Err(ClientError::InvalidResponse {
            message: "Success response carried an empty access token".to_string(),
        });
    }

    Ok(session)
}

/// Turn a non-success body into a rejection, lifting the server's `message`
/// field when one is present.
pub(crate) fn rejection_from_body(body: &str) -> ClientError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|error_json| {
            error_json
                .get("message")
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        });

    ClientError::Rejected { message }
}
