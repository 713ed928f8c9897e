//! # tokdup-core
//!
//! This crate is the **primary library interface** for `tokdup`.
//! It coordinates reading, sample modeling and clustering to produce a
//! [`ClusterReceipt`].
//!
//! If you are embedding `tokdup` into another Rust application, depend on this
//! crate and `tokdup-types`.
//!
//! ## Example
//!
//! ```rust
//! use tokdup_core::{Record, cluster_records};
//! use tokdup_core::settings::ClusterSettings;
//!
//! let tokens: Vec<String> = "int main ( ) { return 0 ; }".split(' ').map(String::from).collect();
//! let records = vec![
//!     Record::new("a.c", tokens.clone()),
//!     Record::new("b.c", tokens),
//! ];
//! let settings = ClusterSettings { min_tokens: 1, ..Default::default() };
//!
//! let receipt = cluster_records(records, &settings).expect("clustering failed");
//! assert_eq!(receipt.stats.clusters, 1);
//! ```

pub mod error;
pub mod ffi;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

// Re-export types for convenience
pub use tokdup_reader::Record;
pub use tokdup_settings as settings;
pub use tokdup_types as types;

use tokdup_cluster::{SIZE_TOLERANCE_PCT, cluster_sample_set};
use tokdup_model::SampleSet;
use tokdup_settings::{ClusterSettings, InputSettings};
use tokdup_types::{ClusterReceipt, SCHEMA_VERSION, ScanStatus, ToolInfo};

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Cluster in-memory records.
///
/// Out-of-range thresholds fall back to their defaults; every fallback and
/// every discarded record is listed in the receipt's `warnings`.
pub fn cluster_records<I>(records: I, settings: &ClusterSettings) -> Result<ClusterReceipt>
where
    I: IntoIterator<Item = Record>,
{
    build_receipt(records, settings, Vec::new(), Vec::new(), ScanStatus::Complete)
}

/// Read `paths` (stdin when empty) and cluster their records.
///
/// Unreadable files are skipped and mark the receipt `partial`.
pub fn cluster_inputs(
    paths: &[PathBuf],
    input: &InputSettings,
    settings: &ClusterSettings,
) -> Result<ClusterReceipt> {
    let read = tokdup_reader::read_inputs(paths, input.tab)?;
    let status = if read.files_skipped > 0 {
        ScanStatus::Partial
    } else {
        ScanStatus::Complete
    };
    tracing::info!(
        target: "tokdup::core",
        records = read.records.len(),
        inputs = read.sources.len(),
        skipped = read.files_skipped,
        "inputs read"
    );
    build_receipt(read.records, settings, read.sources, read.warnings, status)
}

fn build_receipt<I>(
    records: I,
    settings: &ClusterSettings,
    inputs: Vec<String>,
    mut warnings: Vec<String>,
    status: ScanStatus,
) -> Result<ClusterReceipt>
where
    I: IntoIterator<Item = Record>,
{
    let (settings, fallbacks) = settings.clone().validated();
    warnings.extend(fallbacks);

    let mut set = SampleSet::new(settings.min_tokens);
    for record in records {
        if let Err(rejection) = set.ingest(&record.id, &record.tokens) {
            warnings.push(rejection.to_string());
        }
    }
    tracing::info!(
        target: "tokdup::core",
        vocabulary = set.vocabulary().len(),
        samples = set.len(),
        "samples built"
    );

    let params = settings.to_params(SIZE_TOLERANCE_PCT);
    let outcome = cluster_sample_set(&set, &params)?;

    Ok(ClusterReceipt {
        schema_version: SCHEMA_VERSION,
        generated_at_ms: now_ms(),
        tool: ToolInfo::current(),
        mode: "cluster".to_string(),
        status,
        warnings,
        inputs,
        params,
        clusters: outcome.clusters,
        singletons: outcome.singletons,
        stats: outcome.stats,
        scan: outcome.scan,
    })
}
