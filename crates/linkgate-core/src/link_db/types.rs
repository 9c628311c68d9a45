//! Types stored in the link database.

use serde::Serialize;

/// One persisted short link. `code` never changes after insert and `address`
/// was validated before it was written; reads do not re-validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub code: String,
    pub address: String,
    /// Unix seconds.
    pub created_at: i64,
    /// Unix seconds. Equal to `created_at`; links are never updated.
    pub updated_at: i64,
}

/// Result of an insert attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(LinkRecord),
    /// The primary-key constraint rejected the code (another writer got there first).
    CodeTaken,
}
