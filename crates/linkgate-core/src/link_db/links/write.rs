//! Link write operations.

use super::super::db::{unix_timestamp, LinkDb};
use super::super::types::{InsertOutcome, LinkRecord};
use crate::store::StoreError;

impl LinkDb {
    /// Insert a new link. A primary-key collision on `code` is reported as
    /// `InsertOutcome::CodeTaken`, never as an overwrite.
    pub async fn insert_link(&self, code: &str, address: &str) -> Result<InsertOutcome, StoreError> {
        let now = unix_timestamp();
        let result = sqlx::query(
            r#"
            INSERT INTO links (code, address, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(code)
        .bind(address)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted(LinkRecord {
                code: code.to_string(),
                address: address.to_string(),
                created_at: now,
                updated_at: now,
            })),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                tracing::debug!(code, "insert lost on primary key");
                Ok(InsertOutcome::CodeTaken)
            }
            Err(e) => Err(e.into()),
        }
    }
}
