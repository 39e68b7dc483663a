//! Single-component commands: authority, path, unquote, dword.

use anyhow::Result;
use urlnorm_core::{
    dword_to_ipv4, normalize_authority, normalize_path, unquote_fragment, unquote_params,
    unquote_path, unquote_qs,
};

use crate::cli::Part;

pub fn run_authority(scheme: &str, authority: &str) -> Result<i32> {
    let scheme = scheme.to_ascii_lowercase();
    println!("{}", normalize_authority(&scheme, authority)?);
    Ok(0)
}

pub fn run_path(scheme: &str, path: &str) -> Result<i32> {
    println!("{}", normalize_path(&scheme.to_ascii_lowercase(), path));
    Ok(0)
}

pub fn run_unquote(part: Part, text: &str) -> Result<i32> {
    let out = match part {
        Part::Path => unquote_path(text),
        Part::Params => unquote_params(text),
        Part::Query => unquote_qs(text),
        Part::Fragment => unquote_fragment(text),
    };
    println!("{out}");
    Ok(0)
}

pub fn run_dword(value: u64) -> Result<i32> {
    println!("{}", dword_to_ipv4(value)?);
    Ok(0)
}
