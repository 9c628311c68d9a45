//! `linkgate resolve <code>` – print the stored address.

use anyhow::{bail, Result};
use linkgate_core::link_db::LinkDb;
use linkgate_core::shortener::Shortener;

pub async fn run_resolve(shortener: &Shortener<LinkDb>, code: &str) -> Result<()> {
    match shortener.resolve(code).await? {
        Some(record) => {
            println!("{}", record.address);
            Ok(())
        }
        None => bail!("link {code} not found"),
    }
}
