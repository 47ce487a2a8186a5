//! Verifier Configuration
//!
//! Settings for the command-line verifier. Environment variables provide
//! defaults; command-line flags override them.

use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "VERIFIER_LOG";

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "VERIFIER_FORMAT";

/// Default tracing filter. Only failures are logged.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How the verdict is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `✅ VERIFIED` / `❌ <error>`.
    #[default]
    Human,
    /// Serialized verification outcome.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Command-line verifier configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Tracing filter directive (`EnvFilter` syntax).
    pub log_filter: String,
    /// Verdict format.
    pub format: OutputFormat,
    /// Report file. `None` reads stdin.
    pub input: Option<PathBuf>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            format: OutputFormat::Human,
            input: None,
        }
    }
}

impl VerifierConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_filter: lookup(LOG_ENV)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            format: lookup(FORMAT_ENV)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.format),
            input: None,
        }
    }

    /// Set the report file; `-` means stdin.
    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input.filter(|p| p.as_os_str() != "-");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = VerifierConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, VerifierConfig::default());
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.format, OutputFormat::Human);
    }

    #[test]
    fn test_env_values() {
        let config = VerifierConfig::from_lookup(lookup_from(&[
            (LOG_ENV, "backgammon_fair=debug"),
            (FORMAT_ENV, "JSON"),
        ]));
        assert_eq!(config.log_filter, "backgammon_fair=debug");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_env_values_fall_back() {
        let config = VerifierConfig::from_lookup(lookup_from(&[
            (LOG_ENV, "  "),
            (FORMAT_ENV, "yaml"),
        ]));
        assert_eq!(config, VerifierConfig::default());
    }

    #[test]
    fn test_dash_means_stdin() {
        let config = VerifierConfig::default().with_input(Some(PathBuf::from("-")));
        assert!(config.input.is_none());

        let config = VerifierConfig::default().with_input(Some(PathBuf::from("report.json")));
        assert_eq!(config.input, Some(PathBuf::from("report.json")));
    }
}
