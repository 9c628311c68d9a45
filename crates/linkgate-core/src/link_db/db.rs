//! SQLite-backed link database implementation.
//!
//! Handles connection, the schema, and timestamp helpers. Link CRUD lives in `links`.

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::LinkgateConfig;

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite-backed link database. Cheap to clone (shares the pool).
///
/// The default database file lives under the XDG state directory:
/// `~/.local/state/linkgate/links.db`.
#[derive(Clone)]
pub struct LinkDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl LinkDb {
    /// Open the database named by `cfg.database_path`, or the default location.
    pub async fn open(cfg: &LinkgateConfig) -> Result<Self> {
        match &cfg.database_path {
            Some(path) => Self::open_at(path).await,
            None => Self::open_default().await,
        }
    }

    /// Open (or create) the default link database and ensure the schema.
    pub async fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("linkgate")?;
        let db_path = xdg_dirs.get_state_home().join("links.db");
        Self::open_at(db_path).await
    }

    /// Open (or create) the database at a specific path. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating database dir {}", parent.display()))?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await
            .with_context(|| format!("opening link database {}", path.display()))?;
        let db = LinkDb { pool };
        db.migrate().await?;
        tracing::debug!(path = %path.display(), "link database ready");
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // `code` is the primary key: concurrent inserts of the same code fail
        // at commit instead of overwriting. `address` is indexed but not
        // unique; two codes for one address are allowed.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS links (
                code TEXT PRIMARY KEY NOT NULL CHECK (length(code) = 9),
                address TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS links_address_idx ON links (address);")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Close the pool; later calls fail with `StoreError::Unavailable`.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Current time as Unix seconds (for DB timestamps).
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<LinkDb> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = LinkDb { pool };
    db.migrate().await?;
    Ok(db)
}
