//! Configuration file loading and environment variable handling.
//!
//! Precedence: CLI args > Environment vars > Config file > Defaults

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Default config file content for `--config-init`.
pub const DEFAULT_CONFIG: &str = r#"# numstyle configuration
# See: nsty --help for all options

# Default separator used by --group
# group_separator = ","

# Default decimal separator
# decimal_separator = "."

# Disable colored output
no_color = false
"#;

/// Configuration loaded from file and environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub group_separator: Option<String>,
    pub decimal_separator: Option<String>,
    pub no_color: Option<bool>,
}

impl Config {
    /// Get the config file path.
    ///
    /// - Linux/macOS: `~/.config/nsty/config.toml`
    /// - Windows: `%APPDATA%\nsty\config.toml`
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nsty").join("config.toml"))
    }

    /// Load config from file. Returns default if file doesn't exist.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };

        let Ok(contents) = fs::read_to_string(&path) else {
            return Self::default();
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Read value from environment variable.
    fn env_var(name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }

    /// Get the grouping separator with precedence: env > config.
    pub fn group_separator(&self) -> Option<String> {
        Self::env_var("NSTY_GROUP_SEPARATOR").or_else(|| self.group_separator.clone())
    }

    /// Get the decimal separator with precedence: env > config.
    pub fn decimal_separator(&self) -> Option<String> {
        Self::env_var("NSTY_DECIMAL_SEPARATOR").or_else(|| self.decimal_separator.clone())
    }

    /// Get no_color with precedence: env > config > default.
    ///
    /// Respects the `NO_COLOR` standard (https://no-color.org/).
    pub fn no_color(&self) -> bool {
        if std::env::var("NO_COLOR").is_ok() {
            return true;
        }
        if std::env::var("NSTY_NO_COLOR").is_ok() {
            return true;
        }
        self.no_color.unwrap_or(false)
    }
}

/// Write the default config file. Fails if one already exists.
pub fn init_config() -> io::Result<PathBuf> {
    let Some(path) = Config::path() else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "cannot determine config directory",
        ));
    };
    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        ));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, DEFAULT_CONFIG)?;
    Ok(path)
}
