//! Link CRUD, split into read and write halves.

mod read;
mod write;

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::types::LinkRecord;

fn record_from_row(row: &SqliteRow) -> LinkRecord {
    LinkRecord {
        code: row.get("code"),
        address: row.get("address"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
