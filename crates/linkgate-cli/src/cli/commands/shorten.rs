//! `linkgate shorten <url>` – validate, allocate and print share links.

use anyhow::Result;
use linkgate_core::link_db::LinkDb;
use linkgate_core::shortener::Shortener;

pub async fn run_shorten(shortener: &Shortener<LinkDb>, url: &str) -> Result<()> {
    let link = shortener.shorten(url).await?;
    println!("Code:   {}", link.code);
    println!("URL:    {}", link.address);
    println!("Direct: {}", link.direct_link);
    println!("Page:   {}", link.page_link);
    Ok(())
}
