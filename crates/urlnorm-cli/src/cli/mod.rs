//! CLI for the urlnorm URL normalizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use urlnorm_core::config::{self, OnInvalid, UrlnormConfig};

use commands::{
    run_authority, run_batch, run_dword, run_eq, run_norm, run_path, run_unquote, BatchArgs,
};

/// Top-level CLI for urlnorm.
#[derive(Debug, Parser)]
#[command(name = "urlnorm")]
#[command(about = "Canonicalize URLs so equivalent URLs compare equal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// URL part whose unsafe set `unquote` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Part {
    Path,
    Params,
    Query,
    Fragment,
}

/// `--on-invalid` values; mirrors the config setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InvalidMode {
    Skip,
    Keep,
    Fail,
}

impl From<InvalidMode> for OnInvalid {
    fn from(mode: InvalidMode) -> Self {
        match mode {
            InvalidMode::Skip => OnInvalid::Skip,
            InvalidMode::Keep => OnInvalid::Keep,
            InvalidMode::Fail => OnInvalid::Fail,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize one or more URLs.
    Norm {
        /// URLs to normalize.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Compare two URLs after normalization (exit status 1 when different).
    Eq {
        a: String,
        b: String,
    },

    /// Normalize an authority (`[userinfo@]host[:port]`).
    Authority {
        /// Scheme deciding the default port.
        #[arg(long, default_value = "http")]
        scheme: String,
        authority: String,
    },

    /// Normalize a path.
    Path {
        /// Scheme deciding whether dot segments collapse.
        #[arg(long, default_value = "http")]
        scheme: String,
        path: String,
    },

    /// Percent-decode text with the unsafe set of a URL part.
    Unquote {
        #[arg(long, value_enum, default_value = "path")]
        part: Part,
        text: String,
    },

    /// Convert an IP given as a single decimal number to a dotted quad.
    Dword {
        value: u64,
    },

    /// Normalize one URL per line from a file or stdin.
    Batch {
        /// Input file (stdin when omitted).
        file: Option<String>,

        /// Drop URLs whose normalized form was already printed.
        #[arg(long)]
        unique: bool,

        /// Emit one JSON object per line.
        #[arg(long)]
        json: bool,

        /// What to do with lines that fail to normalize.
        #[arg(long, value_enum, value_name = "MODE")]
        on_invalid: Option<InvalidMode>,
    },
}

impl CliCommand {
    /// Runs the parsed command and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        cli.command.run(&cfg)
    }

    /// Dispatches with an already loaded config.
    pub fn run(self, cfg: &UrlnormConfig) -> Result<i32> {
        match self {
            CliCommand::Norm { urls } => run_norm(&urls),
            CliCommand::Eq { a, b } => run_eq(&a, &b),
            CliCommand::Authority { scheme, authority } => run_authority(&scheme, &authority),
            CliCommand::Path { scheme, path } => run_path(&scheme, &path),
            CliCommand::Unquote { part, text } => run_unquote(part, &text),
            CliCommand::Dword { value } => run_dword(value),
            CliCommand::Batch {
                file,
                unique,
                json,
                on_invalid,
            } => {
                let args = BatchArgs {
                    file,
                    unique,
                    json,
                    on_invalid: on_invalid.map(OnInvalid::from),
                };
                run_batch(cfg, &args)
            }
        }
    }
}

#[cfg(test)]
mod tests;
