// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use super::consts::*;
use crate::source::SheetLocation;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive whole number of seconds, got {value:?}")]
    InvalidTtl { var: &'static str, value: String },
}

/// Cache TTL in whole seconds. Zero is refused: the cache would never be fresh.
pub fn parse_ttl(raw: &str) -> Option<Duration> {
    raw.trim().parse::<u64>().ok().filter(|&secs| secs > 0).map(Duration::from_secs)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self { source: SourceOptions::default() }
    }
}

impl AppOptions {
    /// Defaults, overridden by `VERANDA_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppOptions::from_env`] with an injectable variable lookup.
    /// A sheet file wins over a sheet URL when both are set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(url) = get(ENV_SHEET_URL) {
            opts.source.location = SheetLocation::Url(url);
        }
        if let Some(path) = get(ENV_SHEET_FILE) {
            opts.source.location = SheetLocation::File(PathBuf::from(path));
        }
        if let Some(raw) = get(ENV_CACHE_TTL) {
            opts.source.ttl = parse_ttl(&raw).ok_or_else(|| ConfigError::InvalidTtl {
                var: ENV_CACHE_TTL,
                value: raw.clone(),
            })?;
        }
        Ok(opts)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub location: SheetLocation,
    /// How long a fetched catalog is served before the sheet is read again.
    pub ttl: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            location: SheetLocation::Url(default_sheet_url()),
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
        }
    }
}
