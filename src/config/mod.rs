//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reframe.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REFRAME_API_URL`, `REFRAME_PROVIDER`, ...
//! 4. **Command-line arguments** – `--api-url`, `--provider`/`-P`,
//!    `--problem`/`-p`, `--theme`/`-t`, `--themes`/`-m`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "http://127.0.0.1:8000"
//! provider = "live"
//! themes = "Football, Minecraft, Movies, Space"
//! retry_policy = "random"
//! request_timeout_seconds = 20
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::RewriteError;
use crate::rewrite::{
    DEFAULT_API_URL, DEFAULT_NUM_EXAMPLES, HttpRewriteConfig, RetryPolicy, RetryPolicyParseError,
};

/// Themes offered when no catalogue is configured.
pub const DEFAULT_THEMES: [&str; 8] = [
    "Football",
    "Minecraft",
    "Movies",
    "Space",
    "Soccer",
    "Basketball",
    "Dinosaurs",
    "Cooking",
];

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 20;
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 800;

/// Returns [`DEFAULT_THEMES`] as owned strings.
#[must_use]
pub fn default_themes() -> Vec<String> {
    DEFAULT_THEMES.iter().map(|theme| (*theme).to_owned()).collect()
}

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Probe the rewrite service and print its status.
    ServiceStatus,
    /// Rewrite a single problem and print the record.
    OneShot,
    /// Interactive terminal UI.
    Interactive,
}

/// Source of rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// The remote rewrite service over HTTP.
    Live,
    /// The built-in fixture table with artificial latency.
    Simulated,
}

impl ProviderKind {
    /// Lower-case label used in configuration.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Simulated => "simulated",
        }
    }

    /// Retry policy used when none is configured.
    #[must_use]
    pub const fn default_retry_policy(self) -> RetryPolicy {
        match self {
            Self::Live => RetryPolicy::Random,
            Self::Simulated => RetryPolicy::Cyclic,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for ProviderKind {
    type Err = RewriteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "simulated" => Ok(Self::Simulated),
            _ => Err(RewriteError::Configuration {
                message: format!(
                    "unsupported provider '{value}': valid options are 'live' or 'simulated'"
                ),
            }),
        }
    }
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reframe::ReframeConfig;
///
/// let config = ReframeConfig::load().expect("failed to load configuration");
/// let mode = config.operation_mode();
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REFRAME",
    discovery(
        dotfile_name = ".reframe.toml",
        config_file_name = "reframe.toml",
        app_name = "reframe"
    )
)]
pub struct ReframeConfig {
    /// Base URL of the rewrite service.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>`
    /// - Environment: `REFRAME_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config()]
    pub api_url: String,

    /// Rewrite source: `live` or `simulated`.
    #[ortho_config(cli_short = 'P')]
    pub provider: Option<String>,

    /// Problem text for one-shot mode, or to prefill the TUI input.
    #[ortho_config(cli_short = 'p')]
    pub problem: Option<String>,

    /// Theme for one-shot mode, or to preselect in the TUI.
    #[ortho_config(cli_short = 't')]
    pub theme: Option<String>,

    /// Comma-separated theme catalogue offered by the selector.
    #[ortho_config(cli_short = 'm')]
    pub themes: Option<String>,

    /// Number of examples requested per rewrite.
    #[ortho_config()]
    pub num_examples: u32,

    /// Retry policy: `random` or `cyclic`.
    ///
    /// When unset the live provider retries at random and the simulated
    /// provider cycles through its table.
    #[ortho_config()]
    pub retry_policy: Option<String>,

    /// HTTP request timeout in seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Artificial delay of the simulated provider, in milliseconds.
    #[ortho_config()]
    pub simulated_latency_ms: u64,

    /// Suppresses the terminal bell after a successful copy.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so use the CLI flag or the config file.
    #[ortho_config()]
    pub no_beep: bool,

    /// Probes `/health` and `/rag/status`, prints the result, and exits.
    #[ortho_config(cli_short = 'c')]
    pub check_service: bool,

    /// Forces the interactive TUI even when a problem and theme are given.
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Writes log output to this file.
    #[ortho_config()]
    pub log_file: Option<String>,
}

impl Default for ReframeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            provider: None,
            problem: None,
            theme: None,
            themes: None,
            num_examples: DEFAULT_NUM_EXAMPLES,
            retry_policy: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            no_beep: false,
            check_service: false,
            tui: false,
            log_file: None,
        }
    }
}

impl ReframeConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `ServiceStatus` when `check_service` is set, `OneShot` when
    /// both a problem and a theme are given without `tui`, or `Interactive`
    /// otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.check_service {
            OperationMode::ServiceStatus
        } else if self.problem.is_some() && self.theme.is_some() && !self.tui {
            OperationMode::OneShot
        } else {
            OperationMode::Interactive
        }
    }

    /// Parses the configured provider, defaulting to [`ProviderKind::Live`].
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Configuration`] for unknown values.
    pub fn provider_kind(&self) -> Result<ProviderKind, RewriteError> {
        self.provider
            .as_deref()
            .map_or(Ok(ProviderKind::Live), str::parse)
    }

    /// Resolves the retry policy, falling back to the provider's default.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Configuration`] for unknown policy or provider
    /// values.
    pub fn retry_policy(&self) -> Result<RetryPolicy, RewriteError> {
        let provider = self.provider_kind()?;
        self.retry_policy.as_deref().map_or_else(
            || Ok(provider.default_retry_policy()),
            |value| {
                value.parse().map_err(|error: RetryPolicyParseError| {
                    RewriteError::Configuration {
                        message: error.to_string(),
                    }
                })
            },
        )
    }

    /// Returns the theme catalogue in configured order.
    ///
    /// Blank entries are dropped and duplicates keep their first position.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Configuration`] when the catalogue is empty.
    pub fn theme_catalogue(&self) -> Result<Vec<String>, RewriteError> {
        let Some(raw) = self.themes.as_deref() else {
            return Ok(default_themes());
        };

        let mut themes: Vec<String> = Vec::new();
        for theme in raw.split(',').map(str::trim).filter(|theme| !theme.is_empty()) {
            if !themes.iter().any(|known| known == theme) {
                themes.push(theme.to_owned());
            }
        }

        if themes.is_empty() {
            return Err(RewriteError::Configuration {
                message: "theme catalogue is empty (set themes = \"Football, Space\")".to_owned(),
            });
        }
        Ok(themes)
    }

    /// Builds the HTTP provider configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Configuration`] when the theme catalogue is
    /// empty.
    pub fn http_config(&self) -> Result<HttpRewriteConfig, RewriteError> {
        Ok(HttpRewriteConfig::new(
            self.api_url.clone(),
            self.request_timeout(),
            self.theme_catalogue()?,
        ))
    }

    /// HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Artificial latency for the simulated provider.
    #[must_use]
    pub const fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// Returns the one-shot problem and theme.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Configuration`] when either is missing.
    pub fn require_problem_and_theme(&self) -> Result<(&str, &str), RewriteError> {
        match (&self.problem, &self.theme) {
            (Some(problem), Some(theme)) => Ok((problem.as_str(), theme.as_str())),
            (None, _) => Err(RewriteError::Configuration {
                message: "a problem is required (use --problem or -p)".to_owned(),
            }),
            (_, None) => Err(RewriteError::Configuration {
                message: "a theme is required (use --theme or -t)".to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
