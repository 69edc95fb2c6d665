//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! backed by an in-memory store for testing HTTP endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::waitlist::WaitlistRecord,
    infra::config::AppConfig,
    test_utils::{FailingWaitlistRepo, InMemoryWaitlistRepo},
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let app_state = TestAppStateBuilder::new()
///     .with_record(create_test_record(|r| r.email = "user@example.com".to_string()))
///     .build();
/// ```
pub struct TestAppStateBuilder {
    records: Vec<WaitlistRecord>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self { records: vec![] }
    }

    /// Seed the store with an existing signup.
    pub fn with_record(mut self, record: WaitlistRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Build the AppState, returning the repo handle for test assertions.
    pub fn build_with_repo(self) -> (AppState, Arc<InMemoryWaitlistRepo>) {
        let repo = Arc::new(InMemoryWaitlistRepo::with_records(self.records));
        let app_state = build_app_state(repo.clone());
        (app_state, repo)
    }

    /// Build an AppState whose store fails every insert with the given detail.
    pub fn build_with_failing_repo(self, detail: &str) -> AppState {
        build_app_state(Arc::new(FailingWaitlistRepo::new(detail)))
    }

    /// Build the AppState without keeping a handle to the store.
    pub fn build(self) -> AppState {
        self.build_with_repo().0
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_app_state(repo: Arc<dyn WaitlistRepo>) -> AppState {
    // Create minimal config for testing
    let config = Arc::new(AppConfig {
        bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
        database_url: SecretString::new(String::new().into()),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
    });

    AppState {
        config,
        waitlist_use_cases: Arc::new(WaitlistUseCases::new(repo)),
    }
}
