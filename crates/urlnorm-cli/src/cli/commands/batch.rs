//! `urlnorm batch [FILE]` – normalize a URL list line by line.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use urlnorm_core::batch::{normalize_lines, BatchOptions};
use urlnorm_core::config::{OnInvalid, OutputFormat, UrlnormConfig};

/// Command-line overrides for the config file's batch settings.
#[derive(Debug, Clone, Default)]
pub struct BatchArgs {
    pub file: Option<String>,
    pub unique: bool,
    pub json: bool,
    pub on_invalid: Option<OnInvalid>,
}

/// Flags only switch features on; the config supplies the rest.
pub(crate) fn batch_options(cfg: &UrlnormConfig, args: &BatchArgs) -> BatchOptions {
    let mut opts = BatchOptions::from(cfg);
    if args.unique {
        opts.unique = true;
    }
    if args.json {
        opts.output = OutputFormat::Json;
    }
    if let Some(mode) = args.on_invalid {
        opts.on_invalid = mode;
    }
    opts
}

pub fn run_batch(cfg: &UrlnormConfig, args: &BatchArgs) -> Result<i32> {
    let opts = batch_options(cfg, args);
    let stdout = io::stdout().lock();
    let stats = match &args.file {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("open {path}"))?;
            normalize_lines(BufReader::new(file), stdout, &opts)?
        }
        None => normalize_lines(io::stdin().lock(), stdout, &opts)?,
    };
    if stats.invalid > 0 {
        eprintln!("{} of {} URLs were invalid", stats.invalid, stats.read);
    }
    Ok(0)
}
