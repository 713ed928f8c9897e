//! # tokdup-types
//!
//! **Tier 0 (Core Types)**
//!
//! Data structures and contracts shared by every `tokdup` crate: the metric
//! selection, the per-member scores, cluster records, run statistics and the
//! receipt that wraps one clustering run.
//!
//! ## Stability Policy
//!
//! The JSON shape of [`ClusterReceipt`] is the primary contract. Renamed or
//! removed fields bump [`SCHEMA_VERSION`].
//!
//! ## What belongs here
//! * Pure data structs and enums with Serde derives
//! * Stability markers (`SCHEMA_VERSION`)
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing (enums only gain `clap::ValueEnum` behind the `clap` feature)
//! * Similarity or clustering logic

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The current schema version of [`ClusterReceipt`].
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "tokdup".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// Every input was read.
    Complete,
    /// At least one input could not be read and was skipped.
    Partial,
}

// -----------------------------------------------------------------------------
// Enums shared with the CLI
// -----------------------------------------------------------------------------

/// Similarity metric used to decide cluster membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum MetricMode {
    /// Set and multiset Jaccard similarity of the token bags.
    #[default]
    Jaccard,
    /// Longest common subsequence relative to the anchor's length.
    Lcs,
    /// Cosine similarity of the token frequency vectors.
    Cosine,
}

impl MetricMode {
    pub const ALL: [MetricMode; 3] = [MetricMode::Jaccard, MetricMode::Lcs, MetricMode::Cosine];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricMode::Jaccard => "jaccard",
            MetricMode::Lcs => "lcs",
            MetricMode::Cosine => "cosine",
        }
    }
}

impl fmt::Display for MetricMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown metric mode '{s}'"))
    }
}

/// Format of the cluster listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// One line per sample, groups separated by a blank line.
    #[default]
    Text,
    /// One CSV row per grouped sample.
    Csv,
    /// The full receipt as JSON.
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{other}'")),
        }
    }
}

/// Format of the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SummaryFormat {
    /// Two human-readable lines.
    #[default]
    Text,
    /// A header row plus one data row.
    Csv,
}

impl FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(SummaryFormat::Text),
            "csv" => Ok(SummaryFormat::Csv),
            other => Err(format!("unknown summary format '{other}'")),
        }
    }
}

// -----------------------------------------------------------------------------
// Cluster records
// -----------------------------------------------------------------------------

/// Score(s) of one absorbed member, measured against its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum MemberScore {
    Jaccard { set: f64, multiset: f64 },
    /// `ratio` is `common / anchor length`.
    Lcs { common: usize, ratio: f64 },
    Cosine { cosine: f64 },
}

impl MemberScore {
    /// The score compared against `threshold_0`.
    pub fn primary(&self) -> f64 {
        match *self {
            MemberScore::Jaccard { set, .. } => set,
            MemberScore::Lcs { ratio, .. } => ratio,
            MemberScore::Cosine { cosine } => cosine,
        }
    }

    /// The score compared against `threshold_1` (Jaccard only).
    pub fn secondary(&self) -> Option<f64> {
        match *self {
            MemberScore::Jaccard { multiset, .. } => Some(multiset),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterMember {
    pub id: String,
    pub tokens: usize,
    pub score: MemberScore,
}

/// A group of two or more samples, anchored at the earliest one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRecord {
    /// Position of the anchor among the valid samples.
    pub index: usize,
    pub anchor: String,
    pub anchor_tokens: usize,
    pub members: Vec<ClusterMember>,
}

impl ClusterRecord {
    /// Anchor plus absorbed members.
    pub fn size(&self) -> usize {
        self.members.len() + 1
    }
}

/// A sample that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingletonRow {
    pub index: usize,
    pub id: String,
    pub tokens: usize,
}

// -----------------------------------------------------------------------------
// Run parameters and statistics
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterParams {
    pub mode: MetricMode,
    pub threshold_0: f64,
    pub threshold_1: f64,
    pub min_tokens: usize,
    /// Maximum size deviation of a candidate, in percent of the anchor's size.
    pub size_tolerance_pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterStats {
    /// Valid samples that entered clustering.
    pub samples: usize,
    /// Samples discarded for having too few tokens.
    pub discarded: usize,
    /// Records discarded because their id was already taken.
    pub duplicate_ids: usize,
    /// Distinct token strings seen across all records.
    pub vocabulary: usize,
    pub clusters: usize,
    pub singletons: usize,
    pub max_cluster_size: usize,
    /// Sum of cluster sizes, anchors included.
    pub total_cluster_size: usize,
    /// Samples left after keeping one representative per cluster.
    pub unique: usize,
    pub average_cluster_size: f64,
    /// `(total_cluster_size - clusters) / samples`.
    pub duplication_factor: f64,
}

/// Work counters of one clustering sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Pairs on which the metric was evaluated.
    pub compared: u64,
    /// Pairs skipped by the size pre-filter.
    pub size_filtered: u64,
    /// LCS pairs skipped because the multiset bound already failed.
    pub bound_pruned: u64,
    pub accepted: u64,
    pub clustering_ms: u64,
}

/// Receipt of one clustering run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub mode: String,
    pub status: ScanStatus,
    pub warnings: Vec<String>,
    pub inputs: Vec<String>,
    pub params: ClusterParams,
    pub clusters: Vec<ClusterRecord>,
    pub singletons: Vec<SingletonRow>,
    pub stats: ClusterStats,
    pub scan: ScanStats,
}
