use async_trait::async_trait;
use sqlx::Row;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    domain::entities::waitlist::WaitlistRecord,
    use_cases::waitlist::{InsertPayload, WaitlistRepo},
};

fn row_to_record(row: sqlx::postgres::PgRow) -> WaitlistRecord {
    WaitlistRecord {
        id: row.get("id"),
        email: row.get("email"),
        source: row.get("source"),
        referrer: row.get("referrer"),
        user_agent: row.get("user_agent"),
        ip_address: row.get("ip_address"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, payload: &InsertPayload) -> AppResult<WaitlistRecord> {
        // id and both timestamps come from column defaults
        let row = sqlx::query(
            r#"
            INSERT INTO waitlist (email, source, referrer, user_agent, ip_address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, source, referrer, user_agent, ip_address, created_at, updated_at
            "#,
        )
        .bind(&payload.email)
        .bind(&payload.source)
        .bind(&payload.referrer)
        .bind(&payload.user_agent)
        .bind(&payload.ip_address)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_record(row))
    }
}
