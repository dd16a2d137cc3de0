use anyhow::{Context, Result};
use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use tracing::info;

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_DATA_PATH: &str = "data/recipes.json";
pub const DEFAULT_FLUSH_INTERVAL_SECS: &str = "30";

pub struct Config {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    /// How often deferred changes (view counts, backfill repairs) reach the snapshot.
    pub flush_interval: Duration,
}

impl Config {
    /// Reads configuration from the environment (a `.env` file is honored by `main`).
    pub fn load() -> Result<Self> {
        Ok(Self {
            bind_addr: try_load("RECIPE_BIND", DEFAULT_BIND)?,
            data_path: try_load("RECIPE_DATA_PATH", DEFAULT_DATA_PATH)?,
            flush_interval: Duration::from_secs(
                try_load::<u64>("RECIPE_FLUSH_INTERVAL_SECS", DEFAULT_FLUSH_INTERVAL_SECS)?.max(1),
            ),
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse::<T>()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {raw}"))
}
