use pslint_common::Level;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up by [`LintConfig::find_and_load`]
pub const CONFIG_FILE_NAME: &str = ".pslint.toml";

/// Configuration for pslint loaded from .pslint.toml
#[derive(Debug, Default, Deserialize)]
pub struct LintConfig {
    /// Stop the whole scan at the first problem
    #[serde(default)]
    pub fail_fast: Option<bool>,
    /// Stop checking a line at its first problem
    #[serde(default)]
    pub fail_first: Option<bool>,
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
    /// Extra regex-driven checks, run after the built-in ones
    #[serde(default)]
    pub patterns: Vec<PatternConfig>,
    #[serde(default)]
    pub color: ColorConfig,
}

/// Color output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorConfig {
    /// Color mode: "auto" (default), "always" or "never"
    #[serde(default)]
    pub ui: ColorMode,
}

/// Color mode for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Respect NO_COLOR and terminal detection
    #[default]
    Auto,
    Always,
    Never,
}

impl<'de> Deserialize<'de> for ColorMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(D::Error::custom(format!(
                "invalid color mode '{}', expected 'auto', 'always', or 'never'",
                s
            ))),
        }
    }
}

/// Configuration for a specific check
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// A check defined by a regular expression
#[derive(Debug, Clone, Deserialize)]
pub struct PatternConfig {
    pub name: String,
    pub pattern: String,
    pub message: String,
    #[serde(default = "default_level")]
    pub level: Level,
    /// Fire when the pattern does NOT match
    #[serde(default)]
    pub negative: bool,
    /// Skip blank and comment lines
    #[serde(default = "default_true")]
    pub rules_only: bool,
}

fn default_true() -> bool {
    true
}

fn default_level() -> Level {
    Level::Error
}

impl LintConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find and load .pslint.toml from the given directory or its parents
    ///
    /// Returns `Ok(None)` when no file is found.
    pub fn find_and_load(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let mut current = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Self::from_file(&config_path).map(Some);
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Check if a check is enabled. Unknown names are enabled.
    pub fn is_rule_enabled(&self, name: &str) -> bool {
        self.rules.get(name).map(|r| r.enabled).unwrap_or(true)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.ui
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid pattern '{pattern}' for check '{name}': {source}")]
    InvalidPattern {
        name: String,
        pattern: String,
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert!(config.is_rule_enabled("any-rule"));
        assert_eq!(config.fail_fast, None);
        assert_eq!(config.fail_first, None);
        assert!(config.patterns.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
fail_fast = true
fail_first = false

[rules.rule-lowercase]
enabled = false

[rules.spaces]
enabled = true

[[patterns]]
name = "no-port"
pattern = ":[0-9]+"
message = "port in suffix"

[[patterns]]
name = "charset"
pattern = "^[!*a-z0-9.]+$"
message = "unexpected character"
level = "warning"
negative = true
rules_only = false
"#;
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", toml_content).unwrap();

        let config = LintConfig::from_file(file.path()).unwrap();

        assert_eq!(config.fail_fast, Some(true));
        assert_eq!(config.fail_first, Some(false));
        assert!(!config.is_rule_enabled("rule-lowercase"));
        assert!(config.is_rule_enabled("spaces"));
        assert!(config.is_rule_enabled("unknown-rule"));

        assert_eq!(config.patterns.len(), 2);
        let port = &config.patterns[0];
        assert_eq!(port.name, "no-port");
        assert_eq!(port.level, Level::Error);
        assert!(!port.negative);
        assert!(port.rules_only);

        let charset = &config.patterns[1];
        assert_eq!(charset.level, Level::Warning);
        assert!(charset.negative);
        assert!(!charset.rules_only);
    }

    #[test]
    fn test_rule_enabled_defaults_to_true() {
        let config: LintConfig = toml::from_str("[rules.spaces]\n").unwrap();
        assert!(config.is_rule_enabled("spaces"));
    }

    #[test]
    fn test_empty_config() {
        let file = NamedTempFile::new().unwrap();
        let config = LintConfig::from_file(file.path()).unwrap();
        assert!(config.is_rule_enabled("any-rule"));
        assert_eq!(config.color_mode(), ColorMode::Auto);
    }

    #[test]
    fn test_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "fail_fast = \"maybe\"").unwrap();

        let err = LintConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LintConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_color_modes() {
        for (value, expected) in [
            ("auto", ColorMode::Auto),
            ("always", ColorMode::Always),
            ("never", ColorMode::Never),
        ] {
            let config: LintConfig =
                toml::from_str(&format!("[color]\nui = \"{}\"\n", value)).unwrap();
            assert_eq!(config.color_mode(), expected);
        }

        let result: Result<LintConfig, _> = toml::from_str("[color]\nui = \"sometimes\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_find_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "fail_fast = true\n").unwrap();

        let config = LintConfig::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(config.fail_fast, Some(true));
    }

    #[test]
    fn test_find_and_load_invalid_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[[patterns]\n").unwrap();

        assert!(LintConfig::find_and_load(dir.path()).is_err());
    }
}
