//! Configuration handling for nativecn
//!
//! Project configuration lives in `nativecn.config.js` at the project root:
//! a CommonJS module whose exported object is plain JSON, so both the
//! bundler and this tool can read it. User preferences live in
//! `~/.config/nativecn/config.toml` (global).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Styling, ThemeMode};

/// File name of the project configuration
pub const CONFIG_FILE: &str = "nativecn.config.js";

const CONFIG_HEADER: &str = "/** @type {import('@nativecn/cli').Config} */";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No exported object found in {0}")]
    MissingObject(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Theme settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Use a theme provider that already exists in the project
    pub use_existing: bool,

    /// Import path of the existing theme provider, relative to the project root
    pub existing_theme_path: Option<String>,

    pub default_theme: ThemeMode,

    /// Follow the device color scheme
    pub use_system_theme: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_existing: false,
            existing_theme_path: None,
            default_theme: ThemeMode::Light,
            use_system_theme: true,
        }
    }
}

/// Component output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentsConfig {
    /// Directory components are copied into, relative to the project root
    pub out_dir: String,

    /// Default props per component, keyed by component export name
    pub default_props: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        let mut button = BTreeMap::new();
        button.insert("variant".to_string(), serde_json::json!("default"));
        button.insert("size".to_string(), serde_json::json!("default"));

        let mut default_props = BTreeMap::new();
        default_props.insert("Button".to_string(), button);

        Self {
            out_dir: "./components/ui".to_string(),
            default_props,
        }
    }
}

/// Project configuration stored in `nativecn.config.js`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub styling: Styling,
    pub theme: ThemeConfig,
    pub components: ComponentsConfig,
}

impl ProjectConfig {
    /// Returns the config file path for a project root
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Renders the config as a CommonJS module
    pub fn render(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        Ok(format!("{}\nmodule.exports = {};\n", CONFIG_HEADER, json))
    }

    /// Parses the object exported by a `nativecn.config.js` module
    ///
    /// The object starts at the first `{` after `module.exports` (or the
    /// first `{` in the file when there is no export) and ends at the last
    /// `}`. It must be valid JSON. Missing sections fall back to their
    /// defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let start = match content.find("module.exports") {
            Some(export) => content[export..].find('{').map(|idx| export + idx),
            None => content.find('{'),
        };
        let end = content.rfind('}');

        let object = match (start, end) {
            (Some(start), Some(end)) if start < end => &content[start..=end],
            _ => return Err(ConfigError::MissingObject(CONFIG_FILE.to_string())),
        };

        serde_json::from_str(object).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reads the project config, returning `None` when the file does not exist
    pub fn read(root: &Path) -> Result<Option<Self>> {
        let path = Self::path(root);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(Some(config))
    }

    /// Writes the project config, replacing any existing file
    pub fn write(&self, root: &Path) -> Result<PathBuf> {
        let path = Self::path(root);
        let content = self.render()?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        Ok(path)
    }
}

/// Output format for commands
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format when `--format` is not given
    pub default_format: Option<OutputFormat>,

    /// Template catalog directory used instead of the built-in catalog
    pub templates_dir: Option<PathBuf>,
}

impl GlobalConfig {
    /// Returns the global config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "nativecn", "nativecn").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load_from(&dir.join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    /// Loads global configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = ProjectConfig::default();

        assert_eq!(config.styling, Styling::Nativewind);
        assert_eq!(config.components.out_dir, "./components/ui");
        assert_eq!(config.theme.default_theme, ThemeMode::Light);
        assert!(config.theme.use_system_theme);
        assert!(config.components.default_props.contains_key("Button"));
    }

    #[test]
    fn render_is_commonjs_with_camel_case_keys() {
        let rendered = ProjectConfig::default().render().unwrap();

        assert!(rendered.starts_with(CONFIG_HEADER));
        assert!(rendered.contains("module.exports = {"));
        assert!(rendered.contains("\"outDir\": \"./components/ui\""));
        assert!(rendered.contains("\"existingThemePath\": null"));
        assert!(rendered.trim_end().ends_with("};"));
    }

    #[test]
    fn write_then_read() {
        let dir = TempDir::new().unwrap();
        let mut config = ProjectConfig::default();
        config.styling = Styling::Stylesheet;
        config.theme.use_existing = true;
        config.theme.existing_theme_path = Some("src/theme/ThemeProvider".to_string());

        config.write(dir.path()).unwrap();
        let loaded = ProjectConfig::read(dir.path()).unwrap().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn parse_skips_braces_in_header_comment() {
        let mut config = ProjectConfig::default();
        config.components.out_dir = "./src/ui".to_string();

        let rendered = config.render().unwrap();
        assert!(rendered.find('{') < rendered.find("module.exports"));

        assert_eq!(ProjectConfig::parse(&rendered).unwrap(), config);
    }

    #[test]
    fn parse_without_object_fails() {
        let err = ProjectConfig::parse("/** @type {import('x').Config} */\nmodule.exports = config;").unwrap_err();
        assert!(matches!(err, ConfigError::MissingObject(_)));
    }

    #[test]
    fn read_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(ProjectConfig::read(dir.path()).unwrap().is_none());
    }

    #[test]
    fn parse_partial_config_uses_defaults() {
        let content = r#"module.exports = { "styling": "stylesheet", "components": { "outDir": "src/ui" } };"#;
        let config = ProjectConfig::parse(content).unwrap();

        assert_eq!(config.styling, Styling::Stylesheet);
        assert_eq!(config.components.out_dir, "src/ui");
        assert!(config.components.default_props.contains_key("Button"));
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn parse_rejects_non_json() {
        assert!(matches!(
            ProjectConfig::parse("module.exports = require('./other');"),
            Err(ConfigError::MissingObject(_))
        ));
        assert!(matches!(
            ProjectConfig::parse("module.exports = { styling: 'nativewind' };"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn parse_global_config() {
        let toml = r#"
default_format = "json"
templates_dir = "/opt/nativecn/templates"
"#;

        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.default_format, Some(OutputFormat::Json));
        assert_eq!(config.templates_dir, Some(PathBuf::from("/opt/nativecn/templates")));
    }

    #[test]
    fn global_config_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = GlobalConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert!(config.default_format.is_none());
        assert!(config.templates_dir.is_none());
    }
}
