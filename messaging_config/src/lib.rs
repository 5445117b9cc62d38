use std::{net::IpAddr, path::Path, str::FromStr};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files, applied in order on top
/// of the default config.
pub const EXTRA_CONFIG_ENV: &str = "EXTRA_CONFIG";

/// Prefix of environment variables that override single config values, e.g.
/// `MESSAGING__JWT__SECRET`.
pub const ENV_PREFIX: &str = "MESSAGING";

/// Loads the default config, all files listed in `EXTRA_CONFIG` and finally
/// any `MESSAGING__*` environment variables.
pub fn load() -> anyhow::Result<Config> {
    let extra = std::env::var(EXTRA_CONFIG_ENV).unwrap_or_default();
    let paths = std::iter::once(DEFAULT_CONFIG_PATH)
        .chain(extra.split(':').filter(|x| !x.is_empty()))
        .map(Path::new)
        .collect::<Vec<_>>();

    load_paths(&paths, true)
}

pub fn load_paths(paths: &[impl AsRef<Path>], env: bool) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    let builder = if env {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
    } else {
        builder
    };

    builder
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub queue: QueueConfig,
    pub jwt: JwtConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origins allowed to call the API from a browser. An empty list disables
    /// CORS.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct QueueConfig {
    pub url: String,
    /// Name of the list contact message events are pushed to.
    pub key: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

/// Human readable duration such as `"10s"` or `"1h 30m"`.
///
/// Each whitespace separated part is a number followed by one of the units
/// `ms`, `s`, `m`, `h` or `d`. An empty string is a zero duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl FromStr for Duration {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .try_fold(std::time::Duration::ZERO, |total, part| -> anyhow::Result<_> {
                let split = part
                    .find(|c: char| !c.is_ascii_digit())
                    .with_context(|| format!("Missing unit in duration part {part:?}"))?;
                let (value, unit) = part.split_at(split);
                let value = value
                    .parse::<u64>()
                    .with_context(|| format!("Invalid number in duration part {part:?}"))?;
                let part = match unit {
                    "ms" => std::time::Duration::from_millis(value),
                    "s" => std::time::Duration::from_secs(value),
                    "m" => std::time::Duration::from_secs(value * 60),
                    "h" => std::time::Duration::from_secs(value * 60 * 60),
                    "d" => std::time::Duration::from_secs(value * 24 * 60 * 60),
                    _ => anyhow::bail!("Invalid unit {unit:?} in duration part {part:?}"),
                };
                Ok(total + part)
            })
            .map(Self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
