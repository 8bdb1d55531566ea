//! Runtime configuration from environment variables (plus `.env` on native).

use std::path::PathBuf;

pub const DEFAULT_UPCOMING_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Snapshot file. `None` keeps events in memory only.
    pub data_file: Option<PathBuf>,
    pub dark_mode: bool,
    /// How many upcoming events the dashboard lists.
    pub upcoming_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_file: None,
            dark_mode: false,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. `EVENTDESK_DATA_FILE` wins over
    /// `EVENTDESK_PERSIST`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_file = lookup("EVENTDESK_DATA_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                lookup("EVENTDESK_PERSIST")
                    .filter(|v| parse_flag(v))
                    .and_then(|_| default_data_file())
            });
        AppConfig {
            data_file,
            dark_mode: lookup("EVENTDESK_DARK_MODE").map(|v| parse_flag(&v)).unwrap_or(false),
            upcoming_limit: lookup("EVENTDESK_UPCOMING_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(DEFAULT_UPCOMING_LIMIT),
        }
    }
}

fn parse_flag(v: &str) -> bool {
    matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_data_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("eventdesk").join("events.json"))
}

#[cfg(target_arch = "wasm32")]
pub fn default_data_file() -> Option<PathBuf> {
    None
}

const NO_REFERENCE_TYPES: &str = "-C target-feature=-reference-types";

/// `RUSTFLAGS` for the wasm rebuild started by `dx serve`: whatever the caller
/// already set, plus reference types switched off for wasm-bindgen. Never
/// adds the flag twice.
pub fn dev_server_rustflags(existing: Option<&str>) -> String {
    let mut flags: Vec<&str> = existing
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .into_iter()
        .collect();
    if !flags.iter().any(|f| f.contains("-reference-types")) {
        flags.push(NO_REFERENCE_TYPES);
    }
    flags.join(" ")
}
