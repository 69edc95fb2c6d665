//! In-memory mock implementations of the waitlist repository trait.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist::WaitlistRecord,
    use_cases::waitlist::{InsertPayload, WaitlistRepo},
};

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub records: Mutex<Vec<WaitlistRecord>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial records for testing.
    pub fn with_records(records: Vec<WaitlistRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Get all stored records (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, payload: &InsertPayload) -> AppResult<WaitlistRecord> {
        let mut records = self.records.lock().unwrap();

        // Mirrors the unique index on waitlist.email
        if records.iter().any(|r| r.email == payload.email) {
            return Err(AppError::DuplicateEmail);
        }

        let now = Utc::now();
        let record = WaitlistRecord {
            id: Uuid::new_v4(),
            email: payload.email.clone(),
            source: payload.source.clone(),
            referrer: payload.referrer.clone(),
            user_agent: payload.user_agent.clone(),
            ip_address: payload.ip_address.clone(),
            created_at: now,
            updated_at: now,
        };

        records.push(record.clone());
        Ok(record)
    }
}

/// WaitlistRepo that fails every insert, for exercising error paths.
pub struct FailingWaitlistRepo {
    detail: String,
}

impl FailingWaitlistRepo {
    pub fn new(detail: &str) -> Self {
        Self {
            detail: detail.to_string(),
        }
    }
}

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _payload: &InsertPayload) -> AppResult<WaitlistRecord> {
        Err(AppError::Database(self.detail.clone()))
    }
}
