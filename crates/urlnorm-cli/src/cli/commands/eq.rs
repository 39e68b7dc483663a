//! `urlnorm eq <A> <B>` – compare normalized forms.

use anyhow::Result;
use urlnorm_core::urls_equivalent;

pub fn run_eq(a: &str, b: &str) -> Result<i32> {
    if urls_equivalent(a, b)? {
        println!("equal");
        Ok(0)
    } else {
        println!("different");
        Ok(1)
    }
}
