//! Collision-safe short-code allocation.
//!
//! Lookup by address first (the same normalized URL always maps to the
//! code it got first), then generate/check/insert with a bounded number of
//! attempts. A pre-insert check and a primary-key rejection at insert time
//! both count as a collision and consume one attempt.

mod error;

pub use error::AllocError;

use crate::config::AllocationConfig;
use crate::link_db::InsertOutcome;
use crate::shortcode::{CodeSource, RandomCodes};
use crate::store::LinkStore;

/// Assigns codes to validated, normalized URLs.
pub struct CodeAllocator<S, C = RandomCodes> {
    store: S,
    codes: C,
    max_attempts: u32,
}

impl<S: LinkStore> CodeAllocator<S, RandomCodes> {
    pub fn new(store: S, cfg: &AllocationConfig) -> Self {
        Self {
            store,
            codes: RandomCodes,
            max_attempts: cfg.max_attempts.max(1),
        }
    }
}

impl<S: LinkStore, C: CodeSource> CodeAllocator<S, C> {
    /// Replace the code generator (tests script collisions through this).
    pub fn with_code_source<C2: CodeSource>(self, codes: C2) -> CodeAllocator<S, C2> {
        CodeAllocator {
            store: self.store,
            codes,
            max_attempts: self.max_attempts,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the code for `normalized_url`, creating a record if none exists.
    ///
    /// `normalized_url` must already have passed the URL gate; it is stored
    /// verbatim.
    pub async fn allocate(&self, normalized_url: &str) -> Result<String, AllocError> {
        if let Some(existing) = self.store.find_by_address(normalized_url).await? {
            tracing::debug!(code = %existing.code, "address already has a code");
            return Ok(existing.code);
        }

        for attempt in 1..=self.max_attempts {
            let candidate = self.codes.next_code();
            if self.store.find_by_code(&candidate).await?.is_some() {
                tracing::debug!(attempt, "generated code already in use");
                continue;
            }
            match self.store.insert(&candidate, normalized_url).await? {
                InsertOutcome::Inserted(record) => {
                    tracing::info!(code = %record.code, attempt, "allocated short code");
                    return Ok(record.code);
                }
                InsertOutcome::CodeTaken => {
                    tracing::debug!(attempt, "code taken by a concurrent insert");
                }
            }
        }

        tracing::error!(
            attempts = self.max_attempts,
            "short code allocation exhausted"
        );
        Err(AllocError::Exhausted {
            attempts: self.max_attempts,
        })
    }
}
