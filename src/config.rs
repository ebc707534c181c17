//! Landing page configuration.
//!
//! Settings come from environment variables layered over the bundled
//! `assets/config.env`. A variable that is set and non-empty wins over the
//! bundled value. The environment is only read, never written, so the same
//! lookup works in the browser where no process environment exists.

use crate::types::ThemeMode;
use std::time::Duration;

pub const APP_STORE_URL_VAR: &str = "NUVIA_APP_STORE_URL";
pub const PLAY_STORE_URL_VAR: &str = "NUVIA_PLAY_STORE_URL";
pub const GREETING_REFRESH_VAR: &str = "NUVIA_GREETING_REFRESH_SECS";
pub const PAGE_TITLE_VAR: &str = "NUVIA_PAGE_TITLE";
pub const PAGE_DESCRIPTION_VAR: &str = "NUVIA_PAGE_DESCRIPTION";
pub const THEME_VAR: &str = "NUVIA_THEME";
pub const LOG_LEVEL_VAR: &str = "NUVIA_LOG_LEVEL";

/// Defaults compiled into every build.
pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

const DEFAULT_APP_STORE_URL: &str =
    "https://apps.apple.com/tz/app/nuvia-business-tool/id6747385832";
const DEFAULT_PLAY_STORE_URL: &str =
    "https://play.google.com/store/apps/details?id=com.evmak.businesstool";
const DEFAULT_GREETING_REFRESH: Duration = Duration::from_secs(60);
const DEFAULT_PAGE_TITLE: &str = "EvMak - Nuvia Business Tool | Empowering African SMEs";
const DEFAULT_PAGE_DESCRIPTION: &str = "Financial tools for Tanzania's SMEs expanding across Africa. Download Nuvia Business Tool for digital payments, financing, and business growth.";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid greeting refresh interval '{0}': expected a positive number of seconds")]
    InvalidRefreshInterval(String),

    #[error("Invalid {key} '{value}': expected an http(s) URL")]
    InvalidUrl { key: &'static str, value: String },

    #[error("Invalid theme '{0}': expected 'light' or 'dark'")]
    InvalidTheme(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LandingConfig {
    pub app_store_url: String,
    pub play_store_url: String,
    pub greeting_refresh: Duration,
    pub page_title: String,
    pub page_description: String,
    pub theme: ThemeMode,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            app_store_url: DEFAULT_APP_STORE_URL.to_string(),
            play_store_url: DEFAULT_PLAY_STORE_URL.to_string(),
            greeting_refresh: DEFAULT_GREETING_REFRESH,
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            page_description: DEFAULT_PAGE_DESCRIPTION.to_string(),
            theme: ThemeMode::default(),
        }
    }
}

impl LandingConfig {
    /// Reads the process environment, falling back to the bundled defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bundled = parse_env_lines(BUNDLED_CONFIG);
        Self::from_lookup(layered_lookup(env_var, &bundled))
    }

    /// Builds the config from an arbitrary variable source. Empty values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(url) = get(APP_STORE_URL_VAR) {
            config.app_store_url = parse_url(APP_STORE_URL_VAR, url)?;
        }
        if let Some(url) = get(PLAY_STORE_URL_VAR) {
            config.play_store_url = parse_url(PLAY_STORE_URL_VAR, url)?;
        }
        if let Some(raw) = get(GREETING_REFRESH_VAR) {
            config.greeting_refresh = parse_refresh(&raw)?;
        }
        if let Some(title) = get(PAGE_TITLE_VAR) {
            config.page_title = title;
        }
        if let Some(description) = get(PAGE_DESCRIPTION_VAR) {
            config.page_description = description;
        }
        if let Some(theme) = get(THEME_VAR) {
            config.theme = parse_theme(&theme)?;
        }

        Ok(config)
    }
}

fn parse_url(key: &'static str, value: String) -> Result<String, ConfigError> {
    if value.starts_with("https://") || value.starts_with("http://") {
        Ok(value)
    } else {
        Err(ConfigError::InvalidUrl { key, value })
    }
}

fn parse_refresh(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidRefreshInterval(raw.to_string())),
    }
}

fn parse_theme(raw: &str) -> Result<ThemeMode, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        _ => Err(ConfigError::InvalidTheme(raw.to_string())),
    }
}

/// Log level from `NUVIA_LOG_LEVEL` or the bundled config, defaulting to `info`.
pub fn log_level_from_env() -> tracing::Level {
    let bundled = parse_env_lines(BUNDLED_CONFIG);
    layered_lookup(env_var, &bundled)(LOG_LEVEL_VAR)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(tracing::Level::INFO)
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Looks `key` up in `primary` first and in the bundled pairs second.
///
/// Empty primary values count as unset.
pub fn layered_lookup<'a, F>(
    primary: F,
    bundled: &'a [(&'a str, &'a str)],
) -> impl Fn(&str) -> Option<String> + 'a
where
    F: Fn(&str) -> Option<String> + 'a,
{
    move |key: &str| {
        primary(key)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| {
                bundled
                    .iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, value)| value.to_string())
            })
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LandingConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, LandingConfig::default());
        assert_eq!(config.greeting_refresh, Duration::from_secs(60));
        assert!(config.app_store_url.contains("id6747385832"));
        assert!(config.play_store_url.ends_with("com.evmak.businesstool"));
    }

    #[test]
    fn test_overrides() {
        let config = LandingConfig::from_lookup(lookup_from(&[
            (APP_STORE_URL_VAR, "https://example.com/ios"),
            (GREETING_REFRESH_VAR, " 15 "),
            (PAGE_TITLE_VAR, "Nuvia"),
            (THEME_VAR, "Dark"),
        ]))
        .unwrap();
        assert_eq!(config.app_store_url, "https://example.com/ios");
        assert_eq!(config.greeting_refresh, Duration::from_secs(15));
        assert_eq!(config.page_title, "Nuvia");
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.page_description, DEFAULT_PAGE_DESCRIPTION);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config =
            LandingConfig::from_lookup(lookup_from(&[(PLAY_STORE_URL_VAR, "  ")])).unwrap();
        assert_eq!(config.play_store_url, DEFAULT_PLAY_STORE_URL);
    }

    #[test]
    fn test_invalid_refresh_interval() {
        for raw in ["0", "soon", "-5"] {
            let result =
                LandingConfig::from_lookup(lookup_from(&[(GREETING_REFRESH_VAR, raw)]));
            assert_eq!(
                result,
                Err(ConfigError::InvalidRefreshInterval(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_invalid_url() {
        let result = LandingConfig::from_lookup(lookup_from(&[(
            PLAY_STORE_URL_VAR,
            "javascript:alert(1)",
        )]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidUrl { key: PLAY_STORE_URL_VAR, .. })
        ));
    }

    #[test]
    fn test_invalid_theme() {
        let result = LandingConfig::from_lookup(lookup_from(&[(THEME_VAR, "octane")]));
        assert_eq!(result, Err(ConfigError::InvalidTheme("octane".to_string())));
    }

    #[test]
    fn test_parse_env_lines() {
        let contents = "# comment\n\nNUVIA_THEME = dark\nnot a pair\n=orphan\nNUVIA_PAGE_TITLE=A=B\n";
        assert_eq!(
            parse_env_lines(contents),
            vec![("NUVIA_THEME", "dark"), ("NUVIA_PAGE_TITLE", "A=B")]
        );
    }

    #[test]
    fn test_set_variable_wins_over_bundled() {
        let bundled = [(THEME_VAR, "dark"), (PAGE_TITLE_VAR, "Bundled")];
        let lookup = layered_lookup(lookup_from(&[(THEME_VAR, "light")]), &bundled);
        assert_eq!(lookup(THEME_VAR), Some("light".to_string()));
        assert_eq!(lookup(PAGE_TITLE_VAR), Some("Bundled".to_string()));
        assert_eq!(lookup(APP_STORE_URL_VAR), None);
    }

    #[test]
    fn test_empty_variable_falls_back_to_bundled() {
        let bundled = [(GREETING_REFRESH_VAR, "30")];
        let lookup = layered_lookup(lookup_from(&[(GREETING_REFRESH_VAR, " ")]), &bundled);
        assert_eq!(lookup(GREETING_REFRESH_VAR), Some("30".to_string()));
    }

    #[test]
    fn test_bundled_values_reach_config_without_environment() {
        let bundled = parse_env_lines("NUVIA_THEME=dark\nNUVIA_GREETING_REFRESH_SECS=5\n");
        let config =
            LandingConfig::from_lookup(layered_lookup(|_: &str| None, &bundled)).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.greeting_refresh, Duration::from_secs(5));
    }

    #[test]
    fn test_shipped_config_env_is_valid() {
        let bundled = parse_env_lines(BUNDLED_CONFIG);
        assert!(!bundled.is_empty());
        let config =
            LandingConfig::from_lookup(layered_lookup(|_: &str| None, &bundled)).unwrap();
        assert_eq!(config, LandingConfig::default());
    }
}
