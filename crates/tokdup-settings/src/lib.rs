//! # tokdup-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings types for the clustering, input and output layers.
//! These types mirror CLI arguments without Clap dependencies,
//! making them suitable for FFI boundaries and library consumers.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Default values and the fallback rules for invalid values
//!
//! ## What does NOT belong here
//! * Clap parsing (use tokdup-config)
//! * I/O operations

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use tokdup_types::{ClusterParams, MetricMode, ReportFormat, SummaryFormat};

pub const DEFAULT_THRESHOLD_0: f64 = 0.9;
pub const DEFAULT_THRESHOLD_1: f64 = 0.8;
pub const DEFAULT_MIN_TOKENS: usize = 20;

/// Settings consumed by the clustering engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSettings {
    #[serde(default)]
    pub mode: MetricMode,

    /// Primary threshold in `[0, 1]`.
    #[serde(default = "default_threshold_0")]
    pub threshold_0: f64,

    /// Jaccard multiset threshold in `[0, 1]`.
    #[serde(default = "default_threshold_1")]
    pub threshold_1: f64,

    /// Samples with fewer tokens are discarded.
    #[serde(default = "default_min_tokens")]
    pub min_tokens: usize,
}

fn default_threshold_0() -> f64 {
    DEFAULT_THRESHOLD_0
}

fn default_threshold_1() -> f64 {
    DEFAULT_THRESHOLD_1
}

fn default_min_tokens() -> usize {
    DEFAULT_MIN_TOKENS
}

impl Default for ClusterSettings {
    fn default() -> Self {
        Self {
            mode: MetricMode::default(),
            threshold_0: DEFAULT_THRESHOLD_0,
            threshold_1: DEFAULT_THRESHOLD_1,
            min_tokens: DEFAULT_MIN_TOKENS,
        }
    }
}

impl ClusterSettings {
    /// Replace out-of-range thresholds by their defaults.
    ///
    /// Only the offending value falls back. Returns the warnings produced.
    pub fn validated(self) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let threshold_0 = checked_threshold("threshold_0", self.threshold_0, DEFAULT_THRESHOLD_0, &mut warnings);
        let threshold_1 = checked_threshold("threshold_1", self.threshold_1, DEFAULT_THRESHOLD_1, &mut warnings);
        (
            Self {
                threshold_0,
                threshold_1,
                ..self
            },
            warnings,
        )
    }

    /// Parameters for one clustering run.
    pub fn to_params(&self, size_tolerance_pct: f64) -> ClusterParams {
        ClusterParams {
            mode: self.mode,
            threshold_0: self.threshold_0,
            threshold_1: self.threshold_1,
            min_tokens: self.min_tokens,
            size_tolerance_pct,
        }
    }
}

fn checked_threshold(name: &str, value: f64, default: f64, warnings: &mut Vec<String>) -> f64 {
    if (0.0..=1.0).contains(&value) {
        return value;
    }
    let message = format!("{name} {value} is outside [0, 1] (using {default})");
    tracing::warn!(target: "tokdup::settings", "{message}");
    warnings.push(message);
    default
}

/// Parse a metric mode, falling back to Jaccard with a warning.
pub fn mode_or_default(raw: &str, warnings: &mut Vec<String>) -> MetricMode {
    raw.parse().unwrap_or_else(|_| {
        let fallback = MetricMode::default();
        let message = format!("invalid mode {raw} (using {fallback})");
        tracing::warn!(target: "tokdup::settings", "{message}");
        warnings.push(message);
        fallback
    })
}

/// Parse a report format, falling back to text with a warning.
pub fn format_or_default(raw: &str, warnings: &mut Vec<String>) -> ReportFormat {
    raw.parse().unwrap_or_else(|_| {
        let message = format!("invalid format {raw} (using text)");
        tracing::warn!(target: "tokdup::settings", "{message}");
        warnings.push(message);
        ReportFormat::default()
    })
}

/// Settings for reading input records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSettings {
    /// Split tokens on TAB from the start instead of auto-detecting.
    #[serde(default)]
    pub tab: bool,
}

/// Settings for rendering results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: ReportFormat,

    #[serde(default)]
    pub summary: SummaryFormat,

    /// Also list samples that matched nothing.
    #[serde(default)]
    pub singletons: bool,

    /// Write the report here instead of stdout.
    #[serde(default)]
    pub output: Option<PathBuf>,
}
