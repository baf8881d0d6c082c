use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u64(profile: &str, key: &str, default: u64) -> u64 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_i32(profile: &str, key: &str) -> Option<i32> {
    profiled_env_opt(profile, key).and_then(|v| v.parse().ok())
}

pub const DEFAULT_CATALOG_PATH: &str = "data/catalog/pm-rotation.yml";

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub catalog: CatalogConfig,
    pub wall: WallConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `OPSWALL_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("OPSWALL_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            catalog: CatalogConfig::from_env_profiled(p),
            wall: WallConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  catalog:     path={}", self.catalog.path.display());
        tracing::info!(
            "  wall:        refresh={}s, utc_offset={}",
            self.wall.refresh_secs,
            self.wall
                .utc_offset_minutes
                .map(|m| format!("{}m", m))
                .unwrap_or_else(|| "local".to_string())
        );
    }

    /// JSON view shown by the CLI `config` subcommand.
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "catalog": { "path": self.catalog.path },
            "wall": {
                "refresh_secs": self.wall.refresh_secs,
                "utc_offset_minutes": self.wall.utc_offset_minutes,
            },
        })
    }
}

// ── Catalog ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl CatalogConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            path: PathBuf::from(profiled_env_or(p, "CATALOG_PATH", DEFAULT_CATALOG_PATH)),
        }
    }
}

// ── Monitoring wall ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallConfig {
    pub refresh_secs: u64,
    /// Fixed offset from UTC used to decide "today". `None` = host local time.
    pub utc_offset_minutes: Option<i32>,
}

impl WallConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            refresh_secs: profiled_env_u64(p, "WALL_REFRESH_SECS", 60).max(1),
            utc_offset_minutes: profiled_env_i32(p, "UTC_OFFSET_MINUTES"),
        }
    }
}
