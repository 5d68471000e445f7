use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const DEFAULT_PLACEHOLDER: &str = "Type anything";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub features: FeaturesConfig,
    pub top_bar: TopBarConfig,
    pub keymap: KeymapConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeaturesConfig {
    pub command_menu_v2: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            command_menu_v2: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TopBarConfig {
    pub placeholder: String,
    pub control_symbol: String,
    pub is_mobile: bool,
    pub location: String,
}

impl Default for TopBarConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            control_symbol: default_control_symbol().to_string(),
            is_mobile: false,
            location: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        let defaults = TopBarConfig::default();
        if self.top_bar.placeholder.trim().is_empty() {
            self.top_bar.placeholder = defaults.placeholder;
        }
        if self.top_bar.control_symbol.trim().is_empty() {
            self.top_bar.control_symbol = defaults.control_symbol;
        }
        if !self.top_bar.location.starts_with('/') {
            self.top_bar.location = format!("/{}", self.top_bar.location);
        }
        if self.log.filter.trim().is_empty() {
            self.log.filter = DEFAULT_LOG_FILTER.to_string();
        }
        self
    }
}

fn default_control_symbol() -> &'static str {
    if cfg!(target_os = "macos") { "⌘" } else { "Ctrl" }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("CMDMENU_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("cmdmenu").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("cmdmenu")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("cmdmenu").join("config.toml"));
    }
    None
}
