//! Persistence contract used by the allocator and the shortener.
//!
//! Implementations must make `insert` atomic at the row level and enforce
//! uniqueness of `code`; the allocator's retry loop compensates for lost
//! races but does not replace that constraint.

use async_trait::async_trait;

use crate::link_db::{InsertOutcome, LinkDb, LinkRecord};

/// Any I/O fault from the persistence layer.
///
/// The display text is deliberately generic so it can be shown to clients;
/// the underlying error is only reachable through `source()` for server-side logs.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("link store unavailable")]
    Unavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Unavailable(e)
    }
}

#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Oldest record with exactly this address.
    async fn find_by_address(&self, address: &str) -> Result<Option<LinkRecord>, StoreError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<LinkRecord>, StoreError>;

    /// Insert `code -> address`; `CodeTaken` when the code already exists.
    async fn insert(&self, code: &str, address: &str) -> Result<InsertOutcome, StoreError>;
}

#[async_trait]
impl LinkStore for LinkDb {
    async fn find_by_address(&self, address: &str) -> Result<Option<LinkRecord>, StoreError> {
        LinkDb::find_by_address(self, address).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<LinkRecord>, StoreError> {
        LinkDb::find_by_code(self, code).await
    }

    async fn insert(&self, code: &str, address: &str) -> Result<InsertOutcome, StoreError> {
        self.insert_link(code, address).await
    }
}
