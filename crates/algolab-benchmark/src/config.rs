//! Experiment configuration.
//!
//! Load experiment parameters from TOML or YAML files to control sizes,
//! repetitions, and cache handling without code changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::BenchError;

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

/// Cache handling applied before each timed trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Clear any memoized state immediately before timing starts, so every
    /// trial measures a cold-cache cost.
    #[default]
    Cold,
    /// Leave memoized state intact across trials; repeated calls inside and
    /// across trials benefit from earlier results.
    Warm,
}

/// Parameters for one experiment.
///
/// Sizes run in the order given; that order defines table rows and any
/// chart's x-axis, so it is never re-sorted.
///
/// # Example
///
/// ```
/// use algolab_benchmark::{CachePolicy, ExperimentConfig};
///
/// let config = ExperimentConfig::new("binary search")
///     .with_sizes([1000, 5000, 10000])
///     .with_repetitions(1000)
///     .with_warmup_count(2)
///     .with_complexity_note("O(log n)");
///
/// assert_eq!(config.name(), "binary search");
/// assert_eq!(config.repetitions(), 1000);
/// assert_eq!(config.cache_policy(), CachePolicy::Cold);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExperimentConfig {
    name: String,
    #[serde(default)]
    sizes: Vec<u64>,
    #[serde(default = "default_repetitions")]
    repetitions: u32,
    #[serde(default = "default_warmup")]
    warmup_count: u32,
    #[serde(default)]
    cache_policy: CachePolicy,
    #[serde(default)]
    complexity_note: Option<String>,
    #[serde(default)]
    csv_output_path: Option<String>,
    #[serde(default)]
    markdown_output_path: Option<String>,
}

fn default_repetitions() -> u32 {
    10
}

fn default_warmup() -> u32 {
    1
}

impl ExperimentConfig {
    /// Creates a new configuration with the given name.
    ///
    /// Defaults:
    /// - repetitions: 10
    /// - warmup_count: 1
    /// - cache_policy: cold
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sizes: Vec::new(),
            repetitions: default_repetitions(),
            warmup_count: default_warmup(),
            cache_policy: CachePolicy::default(),
            complexity_note: None,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use algolab_benchmark::ExperimentConfig;
    ///
    /// let config = ExperimentConfig::from_toml_str(r#"
    ///     name = "linear search"
    ///     sizes = [1000, 5000, 10000]
    ///     repetitions = 100
    ///     cache_policy = "cold"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.sizes(), &[1000, 5000, 10000]);
    /// assert_eq!(config.repetitions(), 100);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Replaces the input sizes. Order is preserved.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = u64>) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    /// Sets the number of timed repetitions per size.
    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Sets the number of unmeasured warmup invocations per size.
    pub fn with_warmup_count(mut self, count: u32) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the cache policy.
    pub fn with_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.cache_policy = policy;
        self
    }

    /// Attaches a theoretical-complexity note shown in reports.
    pub fn with_complexity_note(mut self, note: impl Into<String>) -> Self {
        self.complexity_note = Some(note.into());
        self
    }

    /// Sets the output path for CSV export.
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for the Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    /// Rejects malformed parameters before any timing starts.
    ///
    /// # Errors
    ///
    /// [`BenchError::EmptySizes`] when no sizes are configured,
    /// [`BenchError::InvalidRepetitions`] when repetitions is zero.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.sizes.is_empty() {
            return Err(BenchError::EmptySizes);
        }
        if self.repetitions < 1 {
            return Err(BenchError::InvalidRepetitions(self.repetitions));
        }
        Ok(())
    }

    /// Returns the experiment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the input sizes in request order.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Returns the number of timed repetitions per size.
    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Returns the number of warmup invocations per size.
    pub fn warmup_count(&self) -> u32 {
        self.warmup_count
    }

    /// Returns the cache policy.
    pub fn cache_policy(&self) -> CachePolicy {
        self.cache_policy
    }

    /// Returns the complexity note, if set.
    pub fn complexity_note(&self) -> Option<&str> {
        self.complexity_note.as_deref()
    }

    /// Returns the CSV output path, if set.
    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    /// Returns the Markdown output path, if set.
    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self::new("Experiment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            name = "fib naive vs memo"
            sizes = [10, 20, 30]
            repetitions = 5
            warmup_count = 2
            cache_policy = "warm"
            complexity_note = "O(n) amortized"
        "#;

        let config = ExperimentConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.name(), "fib naive vs memo");
        assert_eq!(config.sizes(), &[10, 20, 30]);
        assert_eq!(config.repetitions(), 5);
        assert_eq!(config.warmup_count(), 2);
        assert_eq!(config.cache_policy(), CachePolicy::Warm);
        assert_eq!(config.complexity_note(), Some("O(n) amortized"));
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
            name: hanoi
            sizes: [4, 8, 12]
            repetitions: 3
            csv_output_path: hanoi.csv
        "#;

        let config = ExperimentConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.name(), "hanoi");
        assert_eq!(config.sizes(), &[4, 8, 12]);
        assert_eq!(config.csv_output_path(), Some("hanoi.csv"));
    }

    #[test]
    fn test_defaults() {
        let config = ExperimentConfig::from_toml_str(r#"name = "defaults""#).unwrap();
        assert_eq!(config.repetitions(), 10);
        assert_eq!(config.warmup_count(), 1);
        assert_eq!(config.cache_policy(), CachePolicy::Cold);
        assert!(config.sizes().is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_sizes() {
        let config = ExperimentConfig::new("empty");
        assert!(matches!(config.validate(), Err(BenchError::EmptySizes)));
    }

    #[test]
    fn test_validate_rejects_zero_repetitions() {
        let config = ExperimentConfig::new("zero")
            .with_sizes([1])
            .with_repetitions(0);
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidRepetitions(0))
        ));
    }

    #[test]
    fn test_sizes_order_preserved() {
        let config = ExperimentConfig::new("order").with_sizes([1000, 10, 100]);
        assert_eq!(config.sizes(), &[1000, 10, 100]);
    }
}
