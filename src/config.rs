use std::{env, fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::{info, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0} must be set when COMPLAINT_HUB_BACKEND=supabase")]
    Missing(&'static str),
}

/// Where complaints live.
#[derive(Debug, Clone, PartialEq)]
pub enum Backend {
    /// Hosted Supabase project, reached over its REST endpoint.
    Supabase { url: Url, api_key: String },
    /// Local SQLite file, for development.
    Sqlite { path: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub workers: usize,
    pub backend: Backend,
    /// `None` means remote calls may wait forever.
    pub http_timeout: Option<Duration>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = try_load(&get, "COMPLAINT_HUB_ADDR", "127.0.0.1:3000")?;
        let workers = try_load(&get, "COMPLAINT_HUB_WORKERS", "8")?;

        let http_timeout = match get("COMPLAINT_HUB_HTTP_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(parse(
                "COMPLAINT_HUB_HTTP_TIMEOUT_SECS",
                &raw,
            )?)),
            None => None,
        };

        let backend_name: String = try_load(&get, "COMPLAINT_HUB_BACKEND", "sqlite")?;
        let backend = match backend_name.as_str() {
            "sqlite" => Backend::Sqlite {
                path: try_load(&get, "COMPLAINT_HUB_DB", "complaints.sqlite3")?,
            },
            "supabase" => {
                let raw_url = get("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?;
                let api_key =
                    get("SUPABASE_ANON_KEY").ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;
                Backend::Supabase {
                    url: parse("SUPABASE_URL", &raw_url)?,
                    api_key,
                }
            }
            other => {
                return Err(ConfigError::Invalid {
                    key: "COMPLAINT_HUB_BACKEND",
                    value: other.to_string(),
                    reason: "expected `sqlite` or `supabase`".into(),
                })
            }
        };

        Ok(Self {
            addr,
            workers,
            backend,
            http_timeout,
        })
    }
}

fn try_load<T>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = get(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    parse(key, &raw)
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: e.to_string(),
        }
    })
}
