use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// What batch mode does with a line that fails to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnInvalid {
    /// Drop the line (logged at debug level).
    #[default]
    Skip,
    /// Write the input line unchanged.
    Keep,
    /// Stop at the first invalid line with an error.
    Fail,
}

/// Batch output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One normalized URL per line.
    #[default]
    Plain,
    /// One JSON object per line with `input` and `normalized` or `error`.
    Json,
}

/// Global configuration loaded from `~/.config/urlnorm/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlnormConfig {
    #[serde(default)]
    pub on_invalid: OnInvalid,
    /// Suppress URLs whose normalized form was already written.
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub output: OutputFormat,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlnorm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlnormConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlnormConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &std::path::Path) -> Result<UrlnormConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: UrlnormConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = UrlnormConfig::default();
        assert_eq!(cfg.on_invalid, OnInvalid::Skip);
        assert!(!cfg.unique);
        assert_eq!(cfg.output, OutputFormat::Plain);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlnormConfig {
            on_invalid: OnInvalid::Fail,
            unique: true,
            output: OutputFormat::Json,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlnormConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.on_invalid, OnInvalid::Fail);
        assert!(parsed.unique);
        assert_eq!(parsed.output, OutputFormat::Json);
    }

    #[test]
    fn config_toml_missing_keys_use_defaults() {
        let cfg: UrlnormConfig = toml::from_str("unique = true").unwrap();
        assert!(cfg.unique);
        assert_eq!(cfg.on_invalid, OnInvalid::Skip);
        let empty: UrlnormConfig = toml::from_str("").unwrap();
        assert_eq!(empty.output, OutputFormat::Plain);
    }

    #[test]
    fn config_toml_rejects_unknown_mode() {
        assert!(toml::from_str::<UrlnormConfig>("on_invalid = \"explode\"").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"on_invalid = \"keep\"\noutput = \"json\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.on_invalid, OnInvalid::Keep);
        assert_eq!(cfg.output, OutputFormat::Json);
    }
}
