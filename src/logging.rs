//! File-backed tracing setup. The terminal belongs to the UI, so logs go to
//! `<log_dir>/movie_search.log`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber. Does nothing if there is no log directory
/// or the file cannot be opened; logging is optional.
pub fn init_tracing(config: &Config) {
    let Some(log_dir) = &config.log_dir else {
        return;
    };

    if std::fs::create_dir_all(log_dir).is_err() {
        return;
    }

    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("movie_search.log"))
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
}
