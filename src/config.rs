use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Snapshot path or URL
    #[serde(default)]
    pub(crate) stats: Option<String>,
    #[serde(default)]
    pub(crate) since: Option<String>,
    #[serde(default)]
    pub(crate) until: Option<String>,
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
}

/// What happened while looking for a config file. Logged once logging is up.
#[derive(Debug)]
pub(crate) enum ConfigEvent {
    Loaded(PathBuf),
    Invalid { path: PathBuf, message: String },
}

impl ConfigEvent {
    pub(crate) fn log(&self) {
        match self {
            ConfigEvent::Loaded(path) => info!("loaded config from {}", path.display()),
            ConfigEvent::Invalid { path, message } => {
                warn!("failed to parse {}: {}", path.display(), message);
            }
        }
    }
}

impl Config {
    pub(crate) fn load() -> (Self, Vec<ConfigEvent>) {
        Self::load_from(&Self::get_config_paths())
    }

    /// First file that exists and parses wins
    fn load_from(paths: &[PathBuf]) -> (Self, Vec<ConfigEvent>) {
        let mut events = Vec::new();
        for path in paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        events.push(ConfigEvent::Loaded(path.clone()));
                        return (config, events);
                    }
                    Err(e) => events.push(ConfigEvent::Invalid {
                        path: path.clone(),
                        message: e.to_string(),
                    }),
                }
            }
        }

        (Self::default(), events)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/ccdash/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("ccdash").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/ccdash/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("ccdash").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.ccdash.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".ccdash.toml"));
        }

        paths
    }
}
