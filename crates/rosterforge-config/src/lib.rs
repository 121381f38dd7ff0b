//! Configuration system for RosterForge.
//!
//! Load generator configuration from TOML or YAML files to control
//! restarts, seeding, parallelism, termination and the local searches
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use rosterforge_config::RosterConfig;
//! use std::time::Duration;
//!
//! let config = RosterConfig::from_toml_str(r#"
//!     random_seed = 7
//!     restart_count = 30
//!
//!     [termination]
//!     seconds_spent_limit = 10
//!
//!     [support]
//!     primary = "night"
//!     secondary = "evening"
//!     threshold = 1.0
//!
//!     [parameters]
//!     min_rest_days = 8
//!     max_consecutive = 5
//!     support_enabled = true
//!
//!     [parameters.demand]
//!     day = 6
//!     evening = 4
//!     night = 4
//!     float = 1
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(10)));
//! assert_eq!(config.restart_count, 30);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use rosterforge_config::RosterConfig;
//!
//! let config = RosterConfig::load("roster.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use rosterforge_core::{RosterError, RosterParameters, RosterProblem, ShiftKind, ShiftRules};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of independent generation attempts.
pub const DEFAULT_RESTART_COUNT: usize = 24;

/// Default iteration bound of each local search.
pub const DEFAULT_STEP_LIMIT: u64 = 50;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for RosterError {
    fn from(err: ConfigError) -> Self {
        RosterError::Config(err.to_string())
    }
}

/// Main generator configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RosterConfig {
    /// Environment mode affecting reproducibility and assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Number of independent generation attempts.
    #[serde(default = "default_restart_count")]
    pub restart_count: usize,

    /// Number of threads running attempts.
    #[serde(default)]
    pub thread_count: ThreadCount,

    /// Weight of one missing staff-day in the score.
    #[serde(default = "default_shortage_weight")]
    pub shortage_weight: f64,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Cross-category support resolver configuration.
    #[serde(default)]
    pub support: SupportConfig,

    /// Fairness local search configuration.
    #[serde(default)]
    pub fairness: FairnessConfig,

    /// Overrides the problem's parameters when present.
    #[serde(default)]
    pub parameters: Option<RosterParameters>,

    /// Overrides the problem's shift rules when present.
    #[serde(default)]
    pub rules: Option<ShiftRules>,
}

fn default_restart_count() -> usize {
    DEFAULT_RESTART_COUNT
}

fn default_shortage_weight() -> f64 {
    rosterforge_core::RosterScore::DEFAULT_SHORTAGE_WEIGHT
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            environment_mode: EnvironmentMode::default(),
            random_seed: None,
            restart_count: DEFAULT_RESTART_COUNT,
            thread_count: ThreadCount::default(),
            shortage_weight: default_shortage_weight(),
            termination: None,
            support: SupportConfig::default(),
            fairness: FairnessConfig::default(),
            parameters: None,
            rules: None,
        }
    }
}

impl RosterConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the number of generation attempts.
    pub fn with_restart_count(mut self, count: usize) -> Self {
        self.restart_count = count;
        self
    }

    /// Sets the thread count.
    pub fn with_thread_count(mut self, threads: ThreadCount) -> Self {
        self.thread_count = threads;
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the termination time limit in seconds.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination time limit in milliseconds.
    pub fn with_termination_millis(mut self, millis: u64) -> Self {
        self.termination = Some(TerminationConfig {
            millis_spent_limit: Some(millis),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Seed for the run: the configured one, or 0 in reproducible modes.
    ///
    /// `None` means the caller should draw one from OS entropy.
    pub fn effective_seed(&self) -> Option<u64> {
        match (self.random_seed, self.environment_mode) {
            (Some(seed), _) => Some(seed),
            (None, EnvironmentMode::NonReproducible) => None,
            (None, _) => Some(0),
        }
    }

    /// Writes the parameter and rule overrides into `problem`.
    pub fn apply_to(&self, problem: &mut RosterProblem) {
        if let Some(params) = &self.parameters {
            problem.params = params.clone();
        }
        if let Some(rules) = &self.rules {
            problem.rules = rules.clone();
        }
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.restart_count == 0 {
            return Err(ConfigError::Invalid(
                "restart_count must be at least 1".to_string(),
            ));
        }
        if !self.shortage_weight.is_finite() || self.shortage_weight <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "shortage_weight must be positive, got {}",
                self.shortage_weight
            )));
        }
        if self.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "thread_count must be at least 1".to_string(),
            ));
        }
        self.support.validate()?;
        if let Some(params) = &self.parameters {
            params
                .validate()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }
        Ok(())
    }
}

/// Environment mode affecting generator behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Seeds from OS entropy unless a seed is configured.
    #[default]
    NonReproducible,

    /// Deterministic seeding (seed 0 unless configured).
    Reproducible,

    /// Reproducible, and verifies roster invariants after every attempt.
    FullAssert,
}

impl EnvironmentMode {
    /// Whether invariant checks run after each attempt.
    pub fn is_asserted(&self) -> bool {
        matches!(self, EnvironmentMode::FullAssert)
    }
}

/// Thread count configuration for running attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Use the global rayon pool.
    #[default]
    Auto,

    /// Run attempts sequentially on the calling thread.
    None,

    /// Specific number of threads.
    Count(usize),
}

/// Termination configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend generating.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend generating (added to seconds).
    pub millis_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis =
            self.seconds_spent_limit.unwrap_or(0) * 1000 + self.millis_spent_limit.unwrap_or(0);
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}

/// Cross-category support resolver configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SupportConfig {
    /// Shift of the pool that receives rest.
    pub primary: ShiftKind,

    /// Shift of the pool that gives up rest.
    pub secondary: ShiftKind,

    /// Minimum gap of average rest days (exclusive) that triggers a chain.
    pub threshold: f64,

    /// Maximum number of committed chains.
    pub step_limit: u64,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            primary: ShiftKind::Night,
            secondary: ShiftKind::Evening,
            threshold: 1.0,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }
}

impl SupportConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.primary == self.secondary {
            return Err(ConfigError::Invalid(format!(
                "support pools must differ, both are {}",
                self.primary
            )));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "support threshold must be non-negative, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Fairness local search configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FairnessConfig {
    /// Maximum number of committed swaps.
    pub step_limit: u64,
}

impl Default for FairnessConfig {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests;
