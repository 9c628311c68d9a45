//! `linkgate list` – show all links, newest first.

use anyhow::Result;
use linkgate_core::link_db::LinkDb;

pub async fn run_list(db: &LinkDb) -> Result<()> {
    let links = db.list_links().await?;
    if links.is_empty() {
        println!("No links in database.");
    } else {
        println!("{:<10} {:<12} {}", "CODE", "CREATED", "URL");
        for link in links {
            println!("{:<10} {:<12} {}", link.code, link.created_at, link.address);
        }
    }
    Ok(())
}
