//! Configuration loading and management.
//!
//! Settings mirror the classic `.togglrc`: Basic-auth credentials, display
//! formats, behavior toggles, and a project alias table.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://www.toggl.com/api/v6";

/// Default strftime format for day headers in listings.
pub const DEFAULT_DATEFMT: &str = "%Y-%m-%d (%A)";

/// Default strftime format for entry start/stop times in verbose listings.
pub const DEFAULT_ENTRY_DATEFMT: &str = "%Y-%m-%d %H:%M";

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Toggl CLI configuration.

# HTTP Basic credentials for the Toggl API.
username = "user@example.com"
password = "secretpasswd"

# API endpoint.
#api_url = "https://www.toggl.com/api/v6"

# strftime formats for day headers and for entry times in verbose listings.
#datefmt = "%Y-%m-%d (%A)"
#entry_datefmt = "%Y-%m-%d %H:%M"

# Report durations in 8-hour mandays instead of calendar units.
#use_mandays = false

# Include archived projects in listings.
#show_archived_projects = false

# Ask the service to ignore start/stop times for billing purposes.
#ignore_start_times = false

# Browser command used by `toggl web`.
#web_browser_cmd = "firefox"

# Project aliases: `-p @web` expands to the mapped project name.
[aliases]
#web = "Website redesign"
"#;

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the API.
    pub api_url: String,
    /// HTTP Basic username (usually an email address).
    pub username: String,
    /// HTTP Basic password.
    pub password: String,
    /// strftime format for day headers.
    pub datefmt: String,
    /// strftime format for entry times in verbose listings.
    pub entry_datefmt: String,
    /// Report durations in 8-hour mandays.
    pub use_mandays: bool,
    /// Include archived projects in listings.
    pub show_archived_projects: bool,
    /// Ask the service to ignore start/stop times for billing.
    pub ignore_start_times: bool,
    /// Browser command used by `toggl web`.
    pub web_browser_cmd: Option<String>,
    /// Alias name to project name.
    pub aliases: HashMap<String, String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("datefmt", &self.datefmt)
            .field("entry_datefmt", &self.entry_datefmt)
            .field("use_mandays", &self.use_mandays)
            .field("show_archived_projects", &self.show_archived_projects)
            .field("ignore_start_times", &self.ignore_start_times)
            .field("web_browser_cmd", &self.web_browser_cmd)
            .field("aliases", &self.aliases)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            username: String::new(),
            password: String::new(),
            datefmt: DEFAULT_DATEFMT.to_string(),
            entry_datefmt: DEFAULT_ENTRY_DATEFMT.to_string(),
            use_mandays: false,
            show_archived_projects: false,
            ignore_start_times: false,
            web_browser_cmd: None,
            aliases: HashMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    ///
    /// Precedence: defaults, then the default config location, then the
    /// explicit file, then `TOGGL_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = default_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("TOGGL_"));

        figment.extract()
    }

    /// Writes the commented default config template to `path`.
    pub fn write_default(path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG_TEMPLATE)
    }

    /// True until the user has replaced the template credentials.
    pub fn has_credentials(&self) -> bool {
        !self.username.trim().is_empty()
            && !self.password.trim().is_empty()
            && self.username != "user@example.com"
    }
}

/// Returns the platform-specific config file path for toggl.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("toggl").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_has_expected_formats() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.datefmt, "%Y-%m-%d (%A)");
        assert_eq!(config.entry_datefmt, "%Y-%m-%d %H:%M");
        assert!(!config.use_mandays);
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn load_from_merges_explicit_file_over_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
username = "me@example.org"
password = "pw"
use_mandays = true

[aliases]
web = "Website redesign"
"#
        )
        .unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.username, "me@example.org");
        assert!(config.use_mandays);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(
            config.aliases.get("web").map(String::as_str),
            Some("Website redesign")
        );
    }

    #[test]
    fn write_default_produces_loadable_template() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        Config::write_default(&path).unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.username, "user@example.com");
        assert!(!config.has_credentials());
    }

    #[test]
    fn has_credentials_requires_real_values() {
        let mut config = Config::default();
        assert!(!config.has_credentials());

        config.username = "me@example.org".to_string();
        config.password = "pw".to_string();
        assert!(config.has_credentials());
    }

    #[test]
    fn debug_redacts_password() {
        let config = Config {
            password: "secret".to_string(),
            ..Config::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn default_config_path_ends_with_toggl_config() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("toggl/config.toml"));
        }
    }
}
