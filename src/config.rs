//! Runtime configuration read from the environment (and `.env` if present).

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Bearer token for TMDB. `None` makes every search fail with a
    /// configuration error instead of aborting start-up.
    pub api_token: Option<String>,
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub log_filter: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_dir: dirs::data_local_dir().map(|dir| dir.join("movie_search")),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        // A missing .env file is the normal case
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();

        let request_timeout = get("TMDB_TIMEOUT_SECS")
            .and_then(|secs| secs.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        Self {
            api_token: get("TMDB_TOKEN").or_else(|| get("VITE_TMDB_TOKEN")),
            api_base_url: get("TMDB_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            request_timeout,
            log_filter: get("MOVIE_SEARCH_LOG").unwrap_or(defaults.log_filter),
            log_dir: get("MOVIE_SEARCH_LOG_DIR")
                .map(PathBuf::from)
                .or(defaults.log_dir),
        }
    }
}
