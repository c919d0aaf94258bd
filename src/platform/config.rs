// KramerPrefs - platform/config.rs
//
// Platform-specific configuration directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::ThemeParams;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for KramerPrefs configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/kramerprefs/ or %APPDATA%\KramerPrefs\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml: one level above the config dir so
    /// the user-visible path is %APPDATA%\KramerPrefs\config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir
            .parent()
            .unwrap_or(&self.config_dir)
            .join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[api]` section.
    pub api: ApiSection,
    /// `[theme]` section.
    pub theme: ThemeParams,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[api]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Base URL of the preferences service, including the `/api` prefix.
    pub base_url: Option<String>,
    /// Identity token to present to the backend.
    pub init_data: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL.
    pub api_base: String,
    /// Identity token, if configured.
    pub init_data: Option<String>,
    /// Host theme overrides; `None` when no valid colour was configured.
    pub theme: Option<ThemeParams>,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: constants::DEFAULT_API_BASE.to_string(),
            init_data: None,
            theme: None,
            log_level: None,
        }
    }
}

/// Read and parse a config file without validating values.
pub fn read_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate `config.toml` at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning;
/// the application still starts.
///
/// Runs before logging is initialised, so problems are returned rather than
/// logged here.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let raw = match read_config_file(config_path) {
        Ok(raw) => raw,
        Err(e) => {
            warnings.push(format!("{e}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    // -- API: base_url --
    if let Some(ref url) = raw.api.base_url {
        let url = url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            config.api_base = url.to_string();
        } else {
            warnings.push(format!(
                "[api] base_url = \"{url}\" must start with http:// or https://. Using default ({}).",
                constants::DEFAULT_API_BASE,
            ));
        }
    }

    // -- API: init_data --
    if let Some(ref token) = raw.api.init_data {
        if !token.trim().is_empty() {
            config.init_data = Some(token.clone());
        }
    }

    // -- Theme: each colour validated independently --
    let theme = validate_theme(raw.theme, &mut warnings);
    if !theme.is_empty() {
        config.theme = Some(theme);
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    (config, warnings)
}

/// Drop colours that are not `#rrggbb`, with one warning each.
fn validate_theme(raw: ThemeParams, warnings: &mut Vec<String>) -> ThemeParams {
    let mut check = |name: &str, value: Option<String>| -> Option<String> {
        let value = value?;
        if is_hex_colour(&value) {
            Some(value)
        } else {
            warnings.push(format!(
                "[theme] {name} = \"{value}\" is not a #rrggbb colour. Ignoring it."
            ));
            None
        }
    };
    ThemeParams {
        bg_color: check("bg_color", raw.bg_color),
        text_color: check("text_color", raw.text_color),
        hint_color: check("hint_color", raw.hint_color),
        button_color: check("button_color", raw.button_color),
        button_text_color: check("button_text_color", raw.button_text_color),
    }
}

fn is_hex_colour(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults_without_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_full_config_is_applied() {
        let (_dir, path) = write_config(
            r##"
[api]
base_url = "https://bot.example.com/api"
init_data = "query_id=1&user=2"

[theme]
bg_color = "#17212b"
hint_color = "#708499"

[logging]
level = "DEBUG"
"##,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.api_base, "https://bot.example.com/api");
        assert_eq!(config.init_data.as_deref(), Some("query_id=1&user=2"));
        let theme = config.theme.unwrap();
        assert_eq!(theme.bg_color.as_deref(), Some("#17212b"));
        assert_eq!(theme.hint_color.as_deref(), Some("#708499"));
        assert_eq!(theme.text_color, None);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values_warn_and_fall_back() {
        let (_dir, path) = write_config(
            r##"
[api]
base_url = "ftp://nope"
init_data = "   "

[theme]
text_color = "white"

[logging]
level = "verbose"
"##,
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 3, "warnings: {warnings:?}");
        assert_eq!(config.api_base, constants::DEFAULT_API_BASE);
        assert_eq!(config.init_data, None);
        assert_eq!(config.theme, None);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_unparseable_file_warns_and_uses_defaults() {
        let (_dir, path) = write_config("[api\nbase_url = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Failed to parse config file"));
    }

    #[test]
    fn test_read_config_file_reports_parse_error() {
        let (_dir, path) = write_config("api = 5");
        assert!(matches!(
            read_config_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_hex_colour_validation() {
        assert!(is_hex_colour("#A1b2C3"));
        assert!(!is_hex_colour("A1B2C3"));
        assert!(!is_hex_colour("#12345"));
        assert!(!is_hex_colour("#12345g"));
    }

    #[test]
    fn test_config_file_sits_above_config_dir() {
        let paths = PlatformPaths {
            config_dir: PathBuf::from("/home/u/.config/kramerprefs/config"),
        };
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/home/u/.config/kramerprefs/config.toml")
        );
    }
}
