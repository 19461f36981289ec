use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    #[serde(default)]
    pub(crate) notes_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) debug: bool,
    /// File this config was read from, if any
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(mut config) => {
                        config.source = Some(path);
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/chatmate/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("chatmate").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/chatmate/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("chatmate").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.chatmate.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".chatmate.toml"));
        }

        paths
    }
}
