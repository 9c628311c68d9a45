//! Allocation failures. Both variants are server-side faults, not client errors.

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AllocError {
    /// Every attempt in the budget collided with an existing code.
    #[error("could not allocate a unique short code after {attempts} attempts")]
    Exhausted { attempts: u32 },
    #[error(transparent)]
    Store(#[from] StoreError),
}
