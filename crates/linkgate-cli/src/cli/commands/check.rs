//! `linkgate check <url>` – run the validation gate only.

use anyhow::{bail, Result};
use linkgate_core::config::LinkgateConfig;
use linkgate_core::url_gate::Validator;

pub fn run_check(cfg: &LinkgateConfig, url: &str, json: bool) -> Result<()> {
    let verdict = Validator::new(&cfg.validation).validate_and_sanitize(url);
    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    }
    match verdict.into_result() {
        Ok(sanitized) => {
            if !json {
                println!("{sanitized}");
            }
            Ok(())
        }
        Err(reason) => bail!("URL rejected: {reason}"),
    }
}
