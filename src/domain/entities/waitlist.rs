use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored waitlist signup. `id` and both timestamps are assigned by the
/// database on insert.
#[derive(Debug, Clone)]
pub struct WaitlistRecord {
    pub id: Uuid,
    pub email: String,
    pub source: String,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
