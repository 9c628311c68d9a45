//! Persistent link database (SQLite via sqlx).
//!
//! One table mapping 9-character codes to validated addresses.

mod db;
mod links;
mod types;

pub use db::LinkDb;
pub use types::{InsertOutcome, LinkRecord};

#[cfg(test)]
pub(crate) use db::open_memory;

#[cfg(test)]
mod tests;
