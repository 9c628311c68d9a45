//! Short-code format and generation.
//!
//! Codes are 9 characters from `[0-9A-Za-z]` (62^9 possibilities), so
//! enumeration is impractical without relying on sequential-ID obscurity.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Fixed length of every short code.
pub const CODE_LEN: usize = 9;

/// Returned when a caller-supplied code cannot possibly exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid link code: expected 9 alphanumeric characters")]
pub struct CodeFormatError;

/// Checks that `code` has the exact shape of a generated code.
pub fn check_code_format(code: &str) -> Result<(), CodeFormatError> {
    if code.len() == CODE_LEN && code.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(CodeFormatError)
    }
}

/// Source of candidate codes for the allocator.
pub trait CodeSource: Send + Sync {
    fn next_code(&self) -> String;
}

/// Uniformly random alphanumeric codes from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodes;

impl CodeSource for RandomCodes {
    fn next_code(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(CODE_LEN)
            .map(char::from)
            .collect()
    }
}
