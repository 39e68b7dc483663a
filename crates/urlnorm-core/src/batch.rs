//! Line-oriented normalization for URL lists (crawl frontiers, dedup inputs).

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::io::{BufRead, Write};

use crate::config::{OnInvalid, OutputFormat, UrlnormConfig};
use crate::normalize::normalize;

/// Options for [`normalize_lines`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    pub on_invalid: OnInvalid,
    pub unique: bool,
    pub output: OutputFormat,
}

impl From<&UrlnormConfig> for BatchOptions {
    fn from(cfg: &UrlnormConfig) -> Self {
        Self {
            on_invalid: cfg.on_invalid,
            unique: cfg.unique,
            output: cfg.output,
        }
    }
}

/// Counters reported after a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// URL lines read (blank lines and comments excluded).
    pub read: u64,
    pub written: u64,
    pub invalid: u64,
    pub duplicates: u64,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

/// Normalizes one URL per input line and writes the results.
///
/// Lines are trimmed; empty lines and lines starting with `#` are ignored.
/// Bytes that are not UTF-8 become U+FFFD, so such a line is subject to
/// `on_invalid` like any other bad URL instead of ending the run.
pub fn normalize_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    opts: &BatchOptions,
) -> Result<BatchStats> {
    let mut stats = BatchStats::default();
    let mut seen: HashSet<String> = HashSet::new();

    let mut buf = Vec::new();
    for idx in 0usize.. {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("read line {}", idx + 1))?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            tracing::debug!(line = idx + 1, "input line is not valid UTF-8");
        }
        let input = line.trim();
        if input.is_empty() || input.starts_with('#') {
            continue;
        }
        stats.read += 1;

        let normalized = match normalize(input) {
            Ok(n) => n,
            Err(err) => {
                stats.invalid += 1;
                match opts.on_invalid {
                    OnInvalid::Skip => {
                        tracing::debug!(line = idx + 1, "skipping invalid URL: {err}");
                    }
                    OnInvalid::Keep => {
                        let record = JsonRecord {
                            input,
                            normalized: None,
                            error: Some(err.message.as_str()),
                            reason: Some(err.kind.as_str()),
                        };
                        write_record(&mut writer, opts.output, input, &record)?;
                        stats.written += 1;
                    }
                    OnInvalid::Fail => bail!("line {}: {err}", idx + 1),
                }
                continue;
            }
        };

        if opts.unique && !seen.insert(normalized.clone()) {
            stats.duplicates += 1;
            continue;
        }

        let record = JsonRecord {
            input,
            normalized: Some(normalized.as_str()),
            error: None,
            reason: None,
        };
        write_record(&mut writer, opts.output, &normalized, &record)?;
        stats.written += 1;
    }

    writer.flush().context("flush output")?;
    tracing::info!(
        read = stats.read,
        written = stats.written,
        invalid = stats.invalid,
        duplicates = stats.duplicates,
        "batch finished"
    );
    Ok(stats)
}

fn write_record<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    plain: &str,
    record: &JsonRecord<'_>,
) -> Result<()> {
    match format {
        OutputFormat::Plain => writeln!(writer, "{plain}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, record)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
