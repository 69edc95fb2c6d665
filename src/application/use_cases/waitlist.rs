use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::application::validators::{is_valid_email, normalize_email, sanitize_email};
use crate::domain::entities::waitlist::WaitlistRecord;

/// Source recorded when a submission does not name one.
pub const DEFAULT_WAITLIST_SOURCE: &str = "landing_page";

/// Raw signup body as sent by clients. Every field is optional at the wire
/// level; validation decides what is acceptable.
#[derive(Debug, Deserialize)]
pub struct WaitlistSubmission {
    pub email: Option<String>,
    pub source: Option<String>,
    pub referrer: Option<String>,
}

/// Request context captured by the HTTP layer, stored for attribution.
#[derive(Debug, Clone, Default)]
pub struct RequestMetadata {
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

/// Validated, normalized row contents ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertPayload {
    pub email: String,
    pub source: String,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn insert(&self, payload: &InsertPayload) -> AppResult<WaitlistRecord>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn join(
        &self,
        submission: WaitlistSubmission,
        metadata: RequestMetadata,
    ) -> AppResult<WaitlistRecord> {
        let payload = build_insert_payload(submission, metadata)?;
        self.repo.insert(&payload).await
    }
}

/// Validates and normalizes a submission into its stored form.
///
/// The email is sanitized before validation so angle brackets never reach
/// the shape check. Missing and malformed emails stay distinct: absent,
/// `null` and `""` report `MissingEmail`, everything else that fails
/// validation reports `InvalidEmail`.
pub fn build_insert_payload(
    submission: WaitlistSubmission,
    metadata: RequestMetadata,
) -> AppResult<InsertPayload> {
    let email = normalize_submission_email(submission.email.as_deref())?;

    // Empty-string source is kept verbatim; only an absent one falls back
    let source = submission
        .source
        .unwrap_or_else(|| DEFAULT_WAITLIST_SOURCE.to_string());
    let referrer = submission.referrer.filter(|r| !r.is_empty());

    Ok(InsertPayload {
        email,
        source,
        referrer,
        user_agent: metadata.user_agent,
        ip_address: metadata.ip_address,
    })
}

fn normalize_submission_email(raw: Option<&str>) -> AppResult<String> {
    let raw = raw.unwrap_or_default();
    if raw.is_empty() {
        return Err(AppError::MissingEmail);
    }

    let sanitized = sanitize_email(raw);
    if !is_valid_email(&sanitized) {
        return Err(AppError::InvalidEmail);
    }
    Ok(normalize_email(&sanitized))
}
