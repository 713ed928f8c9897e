//! # tokdup-format
//!
//! **Tier 3 (Formatting)**
//!
//! This crate renders and serializes `tokdup` receipts: the cluster listing
//! (text, CSV or JSON) and the run summary (text or CSV).
//!
//! ## What belongs here
//! * Serialization logic (JSON/CSV)
//! * Text rendering
//! * Output file writing
//!
//! ## What does NOT belong here
//! * Business logic (calculating stats)
//! * CLI arg parsing

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};

use tokdup_settings::{OutputSettings, ReportFormat, SummaryFormat};
use tokdup_types::{
    ClusterReceipt, ClusterRecord, ClusterStats, MemberScore, MetricMode, SingletonRow,
};

/// One group of the listing, in anchor order.
enum Group<'a> {
    Cluster(&'a ClusterRecord),
    Singleton(&'a SingletonRow),
}

impl Group<'_> {
    fn index(&self) -> usize {
        match self {
            Group::Cluster(c) => c.index,
            Group::Singleton(s) => s.index,
        }
    }
}

fn groups(receipt: &ClusterReceipt, singletons: bool) -> Vec<Group<'_>> {
    let mut out: Vec<Group<'_>> = receipt.clusters.iter().map(Group::Cluster).collect();
    if singletons {
        out.extend(receipt.singletons.iter().map(Group::Singleton));
    }
    out.sort_by_key(Group::index);
    out
}

// -----------------------------------------------------------------------------
// Text
// -----------------------------------------------------------------------------

/// Render the cluster listing: one line per sample, groups separated by a blank line.
pub fn render_text(receipt: &ClusterReceipt, singletons: bool) -> String {
    let mode = receipt.params.mode;
    let blocks: Vec<String> = groups(receipt, singletons)
        .into_iter()
        .map(|group| match group {
            Group::Cluster(c) => render_cluster(mode, c),
            Group::Singleton(s) => format!("{}:\n", s.id),
        })
        .collect();
    blocks.join("\n")
}

fn render_cluster(mode: MetricMode, cluster: &ClusterRecord) -> String {
    let mut s = String::new();
    match mode {
        MetricMode::Lcs => {
            let _ = writeln!(s, "{}:     ({:3})", cluster.anchor, cluster.anchor_tokens);
        }
        MetricMode::Jaccard | MetricMode::Cosine => {
            let _ = writeln!(s, "{}:", cluster.anchor);
        }
    }
    for m in &cluster.members {
        let _ = match m.score {
            MemberScore::Jaccard { set, multiset } => {
                writeln!(s, "{}: {:5.2},{:5.2}", m.id, set, multiset)
            }
            MemberScore::Lcs { common, .. } => writeln!(s, "{}: {:3} ({:3})", m.id, common, m.tokens),
            MemberScore::Cosine { cosine } => writeln!(s, "{}: {:5.2}", m.id, cosine),
        };
    }
    s
}

/// Mean cluster size; 0 when there are no clusters.
fn average(stats: &ClusterStats) -> f64 {
    if stats.clusters == 0 {
        0.0
    } else {
        stats.total_cluster_size as f64 / stats.clusters as f64
    }
}

/// Share of redundant samples, in percent.
fn factor_pct(stats: &ClusterStats) -> f64 {
    if stats.samples == 0 {
        0.0
    } else {
        (stats.total_cluster_size - stats.clusters) as f64 * 100.0 / stats.samples as f64
    }
}

/// Two-line human summary.
pub fn render_summary_text(stats: &ClusterStats) -> String {
    format!(
        "Found {} clusters (avg: {:3.1}, max: {}) among the {} samples.\nDuplication factor: {:5.1}%\n",
        stats.clusters,
        average(stats),
        stats.max_cluster_size,
        stats.samples,
        factor_pct(stats),
    )
}

// -----------------------------------------------------------------------------
// CSV
// -----------------------------------------------------------------------------

/// Summary as a CSV header plus one row.
///
/// `samples` counts discarded records too; `unique` keeps one sample per cluster.
pub fn write_summary_csv_to<W: Write>(out: &mut W, identifier: &str, stats: &ClusterStats) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    wtr.write_record([
        "identifier", "samples", "discarded", "unique", "clusters", "duplicates", "max", "average",
        "factor",
    ])?;
    wtr.write_record([
        identifier.to_string(),
        (stats.samples + stats.discarded).to_string(),
        stats.discarded.to_string(),
        stats.unique.to_string(),
        stats.clusters.to_string(),
        stats.total_cluster_size.to_string(),
        stats.max_cluster_size.to_string(),
        format!("{:.1}", average(stats)),
        format!("{:.1}%", factor_pct(stats)),
    ])?;
    wtr.flush()?;
    Ok(())
}

/// One row per grouped sample: `group,role,id,tokens,score_0,score_1`.
pub fn write_clusters_csv_to<W: Write>(
    out: &mut W,
    receipt: &ClusterReceipt,
    singletons: bool,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    wtr.write_record(["group", "role", "id", "tokens", "score_0", "score_1"])?;

    for (n, group) in groups(receipt, singletons).into_iter().enumerate() {
        let group_no = (n + 1).to_string();
        match group {
            Group::Singleton(s) => {
                wtr.write_record([
                    group_no.clone(),
                    "singleton".to_string(),
                    s.id.clone(),
                    s.tokens.to_string(),
                    String::new(),
                    String::new(),
                ])?;
            }
            Group::Cluster(c) => {
                wtr.write_record([
                    group_no.clone(),
                    "anchor".to_string(),
                    c.anchor.clone(),
                    c.anchor_tokens.to_string(),
                    String::new(),
                    String::new(),
                ])?;
                for m in &c.members {
                    let (s0, s1) = match m.score {
                        MemberScore::Lcs { common, ratio } => (common.to_string(), ratio.to_string()),
                        score => (
                            score.primary().to_string(),
                            score.secondary().map(|v| v.to_string()).unwrap_or_default(),
                        ),
                    };
                    wtr.write_record([
                        group_no.clone(),
                        "member".to_string(),
                        m.id.clone(),
                        m.tokens.to_string(),
                        s0,
                        s1,
                    ])?;
                }
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

// -----------------------------------------------------------------------------
// JSON
// -----------------------------------------------------------------------------

pub fn write_receipt_json_to<W: Write>(out: &mut W, receipt: &ClusterReceipt) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, receipt)?;
    writeln!(out)?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------------

pub fn write_report_to<W: Write>(
    out: &mut W,
    receipt: &ClusterReceipt,
    settings: &OutputSettings,
) -> Result<()> {
    match settings.format {
        ReportFormat::Text => {
            out.write_all(render_text(receipt, settings.singletons).as_bytes())?;
            Ok(())
        }
        ReportFormat::Csv => write_clusters_csv_to(out, receipt, settings.singletons),
        ReportFormat::Json => write_receipt_json_to(out, receipt),
    }
}

/// Write the listing to `settings.output`, or stdout when unset.
pub fn write_report(receipt: &ClusterReceipt, settings: &OutputSettings) -> Result<()> {
    match &settings.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_report_to(&mut out, receipt, settings)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_report_to(&mut out, receipt, settings)?;
            out.flush()?;
        }
    }
    Ok(())
}

pub fn write_summary_to<W: Write>(
    out: &mut W,
    receipt: &ClusterReceipt,
    format: SummaryFormat,
) -> Result<()> {
    match format {
        SummaryFormat::Text => {
            out.write_all(render_summary_text(&receipt.stats).as_bytes())?;
            Ok(())
        }
        SummaryFormat::Csv => write_summary_csv_to(out, &summary_identifier(receipt), &receipt.stats),
    }
}

/// Write the summary to stderr.
pub fn write_summary(receipt: &ClusterReceipt, format: SummaryFormat) -> Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    write_summary_to(&mut out, receipt, format)?;
    out.flush()?;
    Ok(())
}

/// Name of the last input read, or `stdin`.
pub fn summary_identifier(receipt: &ClusterReceipt) -> String {
    receipt
        .inputs
        .last()
        .cloned()
        .unwrap_or_else(|| "stdin".to_string())
}
