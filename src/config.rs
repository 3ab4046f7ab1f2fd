use std::{
    env,
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use tracing::{info, warn};

use crate::error::ConfigError;

pub const DEFAULT_UPSTREAM_API_BASE: &str = "https://db.ygoprodeck.com/api/v7";

pub struct Config {
    pub port: u16,
    pub upstream_api_base: String,
    pub upstream_timeout: Duration,
    pub frontend_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let frontend_dir = match var("FRONTEND_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => locate_frontend_dir(),
        };

        Ok(Self {
            port: try_load("PORT", "8080")?,
            upstream_api_base: var("UPSTREAM_API_BASE")
                .unwrap_or_else(|| DEFAULT_UPSTREAM_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            upstream_timeout: Duration::from_secs(try_load("UPSTREAM_TIMEOUT_SECS", "10")?),
            frontend_dir,
        })
    }

    pub fn address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::InvalidValue {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }
    })
}

fn locate_frontend_dir() -> PathBuf {
    let exe_candidate = env::current_exe().ok().and_then(|exe| {
        exe.parent()
            .map(|dir| dir.join("..").join("..").join("frontend"))
    });

    let candidates = [
        Some(PathBuf::from("../frontend")),
        Some(PathBuf::from("frontend")),
        exe_candidate,
    ];
    first_existing_dir(candidates.into_iter().flatten())
        .unwrap_or_else(|| PathBuf::from("frontend"))
}

fn first_existing_dir(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|dir| Path::new(dir).is_dir())
}
