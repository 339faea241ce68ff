//! Configuration management

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// City shown before the user searches for another one
pub const DEFAULT_CITY: &str = "Gresik";

/// localStorage key holding "dark" or "light"
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

/// Region code of the older daily endpoint (Gresik)
pub const DEFAULT_LEGACY_REGION: u32 = 1606;

/// Base URL baked in by build.rs (JADWAL_BASE_URL / VITE_BASE_URL)
pub const BUILD_BASE_URL: &str = env!("JADWAL_BASE_URL");

/// Git SHA baked in by build.rs
pub const GIT_SHA: &str = env!("JADWAL_GIT_SHA");

/// Which upstream response schema the page talks to
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiSchema {
    /// `{base}/{city}/{year}/{MM}.json` returning one entry per day
    #[default]
    Monthly,
    /// `{base}/sholat/jadwal/{region}/{year}/{month}/{day}` returning a single nested day
    LegacyDaily {
        #[serde(default = "default_legacy_region")]
        region_code: u32,
    },
}

fn default_legacy_region() -> u32 {
    DEFAULT_LEGACY_REGION
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_city")]
    pub default_city: String,

    #[serde(default = "default_theme_storage_key")]
    pub theme_storage_key: String,

    #[serde(default)]
    pub schema: ApiSchema,
}

fn default_base_url() -> String {
    BUILD_BASE_URL.to_string()
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_theme_storage_key() -> String {
    DEFAULT_THEME_STORAGE_KEY.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_city: default_city(),
            theme_storage_key: default_theme_storage_key(),
            schema: ApiSchema::default(),
        }
    }
}

impl AppConfig {
    /// Configuration as compiled into the web bundle
    pub fn from_build_env() -> Self {
        Self::default()
    }

    /// Base URL without trailing slashes
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Reject values the page cannot work with
    pub fn validate(self) -> Result<Self> {
        let parsed = url::Url::parse(self.base_url())
            .with_context(|| format!("invalid base_url {:?}", self.base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("base_url must be http(s), got {}", parsed.scheme());
        }
        if self.default_city.trim().is_empty() {
            bail!("default_city must not be blank");
        }
        if self.theme_storage_key.trim().is_empty() {
            bail!("theme_storage_key must not be blank");
        }
        Ok(self)
    }
}

/// Configuration for the running platform.
///
/// The browser only has the build-time values; native builds layer file and
/// environment overrides on top and fall back to the build values on error.
pub fn current() -> AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        match load_config() {
            Ok(config) => return config,
            Err(e) => tracing::warn!("Config load failed, using build defaults: {:#}", e),
        }
    }
    AppConfig::from_build_env()
}

/// Get config directory (JADWAL_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
#[cfg(not(target_arch = "wasm32"))]
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("JADWAL_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/jadwal-sholat");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("jadwal-sholat");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/jadwal-sholat");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("jadwal-sholat");
        }
    }

    std::path::PathBuf::from(".")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> Result<AppConfig> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("base_url", BUILD_BASE_URL)?
        .set_default("default_city", DEFAULT_CITY)?
        .set_default("theme_storage_key", DEFAULT_THEME_STORAGE_KEY)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("jadwal-sholat").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (JADWAL_BASE_URL, JADWAL_SCHEMA__KIND, etc.)
        .add_source(
            ::config::Environment::with_prefix("JADWAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Legacy VITE_BASE_URL from the old web bundle, only when JADWAL_BASE_URL is unset
    if std::env::var("JADWAL_BASE_URL").is_err() {
        if let Ok(url) = std::env::var("VITE_BASE_URL") {
            if !url.trim().is_empty() {
                builder = builder.set_override("base_url", url)?;
            }
        }
    }

    let config: AppConfig = builder.build()?.try_deserialize()?;
    config.validate()
}
