use markdown_overlay_engine::{
    Composer, EmojiDictionary, SegmentKind, StyleOverride, StyleTable, UnknownKind,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown segment kind in [styles.{name}]")]
    UnknownSegmentKind { name: String, source: UnknownKind },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cache: CacheConfig,
    /// Optional theme file with its own `[styles.*]` tables, applied
    /// before the styles in this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<PathBuf>,
    /// Per-kind style overrides keyed by snake_case kind name.
    pub styles: BTreeMap<String, StyleOverride>,
    /// Extra emoji shortcodes, added to the built-in set.
    pub emoji: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: 512,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Theme {
    styles: BTreeMap<String, StyleOverride>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(None);
        }

        let mut config: Config = read_toml(config_path)?;

        // Expand shell variables and tilde; relative themes sit next to the config
        if let Some(theme) = config.theme.take() {
            let theme = Self::expand_path(&theme).unwrap_or(theme);
            config.theme = Some(match config_path.parent() {
                Some(dir) if theme.is_relative() => dir.join(theme),
                _ => theme,
            });
        }

        log::info!("Loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-overlay");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Stock styles with the theme file, then `[styles.*]`, layered on top.
    pub fn style_table(&self) -> Result<StyleTable, ConfigError> {
        let mut table = StyleTable::default();
        if let Some(theme_path) = &self.theme {
            let theme: Theme = read_toml(theme_path)?;
            apply_styles(&mut table, &theme.styles)?;
        }
        apply_styles(&mut table, &self.styles)?;
        Ok(table)
    }

    pub fn composer(&self) -> Result<Composer, ConfigError> {
        let composer = Composer::new(self.style_table()?);
        Ok(if self.cache.enabled {
            composer.with_cache(self.cache.capacity)
        } else {
            composer
        })
    }

    pub fn emoji_dictionary(&self) -> EmojiDictionary {
        let mut dict = EmojiDictionary::default();
        dict.extend(self.emoji.clone());
        dict
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigReadError {
        config_path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
        config_path: path.to_path_buf(),
        source,
    })
}

fn apply_styles(
    table: &mut StyleTable,
    styles: &BTreeMap<String, StyleOverride>,
) -> Result<(), ConfigError> {
    for (name, style) in styles {
        let kind: SegmentKind = name
            .parse()
            .map_err(|source| ConfigError::UnknownSegmentKind {
                name: name.clone(),
                source,
            })?;
        table.apply(kind, style);
    }
    Ok(())
}
