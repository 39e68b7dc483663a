//! `urlnorm norm <URL>...` – print normalized URLs.

use anyhow::{Context, Result};
use urlnorm_core::normalize;

pub fn run_norm(urls: &[String]) -> Result<i32> {
    for url in urls {
        let normalized = normalize(url).with_context(|| format!("normalize {url}"))?;
        println!("{normalized}");
    }
    Ok(0)
}
