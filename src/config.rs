//! `stree.toml` discovery and configuration

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::tree::DEFAULT_SENTINEL;

/// File name searched for in the current directory and its parents
pub const CONFIG_FILE: &str = "stree.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read stree.toml: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse stree.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    build: Option<BuildSection>,
    render: Option<RenderSection>,
}

#[derive(Debug, Deserialize, Default)]
struct BuildSection {
    sentinel: Option<char>,
}

#[derive(Debug, Deserialize, Default)]
struct RenderSection {
    show_start_index: Option<bool>,
}

/// Settings for [`TreeBuilder`](crate::tree::TreeBuilder)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    sentinel: char,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
        }
    }
}

impl BuildConfig {
    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    pub fn with_sentinel(mut self, sentinel: char) -> Self {
        self.sentinel = sentinel;
        self
    }
}

/// Settings for the tree renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub show_start_index: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_start_index: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Where the settings came from; `None` when defaults are used
    pub source: Option<PathBuf>,
    pub build: BuildConfig,
    pub render: RenderConfig,
}

impl Config {
    /// Look for `stree.toml` in the current directory or any parent.
    ///
    /// Falls back to the defaults when no file is found.
    pub fn discover() -> Result<Self, ConfigError> {
        let current_dir = std::env::current_dir()?;
        match Self::find_config(&current_dir) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from an explicit path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse settings from TOML text, filling gaps with defaults
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;

        let build_section = file.build.unwrap_or_default();
        let render_section = file.render.unwrap_or_default();

        let defaults = Self::default();
        Ok(Self {
            source: None,
            build: BuildConfig {
                sentinel: build_section.sentinel.unwrap_or(defaults.build.sentinel),
            },
            render: RenderConfig {
                show_start_index: render_section
                    .show_start_index
                    .unwrap_or(defaults.render.show_start_index),
            },
        })
    }

    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r##"
[build]
sentinel = "#"

[render]
show_start_index = false
"##,
        )
        .unwrap();

        assert_eq!(config.build.sentinel(), '#');
        assert!(!config.render.show_start_index);
        assert_eq!(config.source, None);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.build.sentinel(), '$');
        assert!(config.render.show_start_index);
    }

    #[test]
    fn test_rejects_multi_char_sentinel() {
        let err = Config::parse("[build]\nsentinel = \"$$\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = std::env::temp_dir().join(format!("stree-config-{}", std::process::id()));
        let nested = root.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join(CONFIG_FILE), "[build]\nsentinel = \"|\"\n").unwrap();

        let found = Config::find_config(&nested).unwrap();
        assert_eq!(found, root.join(CONFIG_FILE));

        let config = Config::load(&found).unwrap();
        assert_eq!(config.build.sentinel(), '|');
        assert_eq!(config.source, Some(found));

        fs::remove_dir_all(&root).unwrap();
    }
}
