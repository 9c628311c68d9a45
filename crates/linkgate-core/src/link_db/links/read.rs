//! Link read operations: lookup by address or code, and listing.

use super::super::db::LinkDb;
use super::super::types::LinkRecord;
use super::record_from_row;
use crate::store::StoreError;

impl LinkDb {
    /// Oldest record whose address equals `address` exactly.
    pub async fn find_by_address(&self, address: &str) -> Result<Option<LinkRecord>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT code, address, created_at, updated_at
            FROM links
            WHERE address = ?1
            ORDER BY created_at ASC, rowid ASC
            LIMIT 1
            "#,
        )
        .bind(address)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(record_from_row))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<LinkRecord>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT code, address, created_at, updated_at
            FROM links
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(record_from_row))
    }

    /// List all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<LinkRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT code, address, created_at, updated_at
            FROM links
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(record_from_row).collect())
    }
}
