//! Contact form submission: validation, then hand-off to an email provider.
//!
//! Failures are reported as [`SubmissionResult`] values carrying a message
//! that can be shown to the visitor as-is. Nothing is retried automatically;
//! the visitor resubmits.

mod provider;

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::utils::config::ContactConfig;

pub use provider::{EmailError, EmailProvider, OutgoingEmail, ResendProvider, SimulatedProvider};

/// What the visitor typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// User-facing submission failures. `Display` is the text shown in the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill out all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// The provider answered but refused the message.
    #[error("Failed to send email. Please try again.")]
    Delivery(String),

    /// Transport failure or anything else unexpected.
    #[error("An unexpected error occurred. Please try again later.")]
    Unexpected(String),
}

impl From<EmailError> for ContactError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::Rejected { .. } => ContactError::Delivery(err.to_string()),
            other => ContactError::Unexpected(other.to_string()),
        }
    }
}

/// Outcome handed back to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(err: &ContactError) -> Self {
        Self {
            success: false,
            error: Some(err.to_string()),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

impl ContactPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Required fields first, then the address format.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Validates submissions and forwards them to the configured provider.
#[derive(Clone)]
pub struct ContactService {
    provider: Arc<dyn EmailProvider>,
    from: String,
    to: String,
}

impl std::fmt::Debug for ContactService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactService")
            .field("provider", &self.provider.name())
            .field("to", &self.to)
            .finish()
    }
}

impl ContactService {
    pub fn new(
        provider: Arc<dyn EmailProvider>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Resend when an API key is configured, otherwise a simulated sender.
    pub fn from_config(config: &ContactConfig) -> Result<Self, EmailError> {
        let provider: Arc<dyn EmailProvider> = match config.resolved_api_key() {
            Some(key) => Arc::new(ResendProvider::new(&config.api_url, key)?),
            None => {
                info!("RESEND_API_KEY not set, contact submissions will be simulated");
                Arc::new(SimulatedProvider::new(Duration::from_millis(config.simulated_delay_ms)))
            }
        };
        Ok(Self::new(provider, &config.from, &config.to))
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Composes the message sent to the site owner.
    pub fn compose(&self, payload: &ContactPayload) -> OutgoingEmail {
        OutgoingEmail {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: format!("Portfolio Contact: {}", payload.subject.trim()),
            reply_to: payload.email.trim().to_string(),
            text: format!(
                "Name: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}\n",
                payload.name.trim(),
                payload.email.trim(),
                payload.subject.trim(),
                payload.message
            ),
        }
    }

    /// Validates and sends. Validation failures never reach the provider.
    pub async fn submit(&self, payload: &ContactPayload) -> SubmissionResult {
        match self.try_submit(payload).await {
            Ok(()) => SubmissionResult::ok(),
            Err(err) => SubmissionResult::failed(&err),
        }
    }

    pub async fn try_submit(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        payload.validate()?;

        let email = self.compose(payload);
        match self.provider.send(&email).await {
            Ok(id) => {
                info!(provider = self.provider.name(), id = %id, "contact email sent");
                Ok(())
            }
            Err(err) => {
                error!(provider = self.provider.name(), error = %err, "email send error");
                Err(err.into())
            }
        }
    }
}
