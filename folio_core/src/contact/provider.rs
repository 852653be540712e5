use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::utils::http_client::create_http_client;

/// A fully composed message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub reply_to: String,
    pub text: String,
}

#[derive(Error, Debug)]
pub enum EmailError {
    /// The provider answered with a non-success status.
    #[error("Email provider rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Transactional email backend.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Delivers `email`, returning the provider's message id.
    async fn send(&self, email: &OutgoingEmail) -> Result<String, EmailError>;
}

#[derive(Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    reply_to: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct ResendResponse {
    id: String,
}

#[derive(Deserialize)]
struct ResendErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Sends through the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct ResendProvider {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ResendProvider {
    pub fn new(api_url: &str, api_key: impl Into<String>) -> Result<Self, EmailError> {
        Ok(Self::with_client(create_http_client()?, api_url, api_key))
    }

    pub fn with_client(client: Client, api_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_url)
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<String, EmailError> {
        let request = ResendRequest {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            reply_to: &email.reply_to,
            text: &email.text,
        };
        debug!(endpoint = %self.endpoint(), "sending contact email");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(rejection(status, &body));
        }

        serde_json::from_str::<ResendResponse>(&body)
            .map(|r| r.id)
            .map_err(|e| EmailError::InvalidResponse(e.to_string()))
    }
}

fn rejection(status: StatusCode, body: &str) -> EmailError {
    let message = serde_json::from_str::<ResendErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.trim().to_string());
    EmailError::Rejected {
        status: status.as_u16(),
        message,
    }
}

/// Development stand-in used when no API key is configured: logs the message
/// and reports success after a short delay.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    delay: Duration,
}

impl SimulatedProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl EmailProvider for SimulatedProvider {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<String, EmailError> {
        info!(
            subject = %email.subject,
            reply_to = %email.reply_to,
            "simulating email send"
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok("simulated".to_string())
    }
}
