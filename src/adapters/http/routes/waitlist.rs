use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, request_meta::extract_request_metadata},
    app_error::AppResult,
    domain::entities::waitlist::WaitlistRecord,
    use_cases::waitlist::WaitlistSubmission,
};

const SUCCESS_MESSAGE: &str = "Successfully joined the waitlist!";

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WaitlistEntry {
    id: Uuid,
    email: String,
    source: String,
    referrer: Option<String>,
    user_agent: Option<String>,
    ip_address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<WaitlistRecord> for WaitlistEntry {
    fn from(record: WaitlistRecord) -> Self {
        WaitlistEntry {
            id: record.id,
            email: record.email,
            source: record.source,
            referrer: record.referrer,
            user_agent: record.user_agent,
            ip_address: record.ip_address,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Serialize)]
struct JoinResponse {
    success: bool,
    message: &'static str,
    data: WaitlistEntry,
}

/// POST /api/waitlist
/// Validates the submission, stores it, and echoes the stored entry back.
async fn join_waitlist(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<WaitlistSubmission>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(submission) = payload?;
    let metadata = extract_request_metadata(&headers);

    let record = app_state
        .waitlist_use_cases
        .join(submission, metadata)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(JoinResponse {
            success: true,
            message: SUCCESS_MESSAGE,
            data: record.into(),
        }),
    ))
}
