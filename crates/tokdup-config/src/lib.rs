//! # tokdup-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and the `tokdup.toml` structures.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//!
//! ## What does NOT belong here
//! * Business logic
//! * Resolving CLI against file values (see the `tokdup` binary)
//! * I/O operations (except config file parsing)

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
pub use tokdup_types::{MetricMode, ReportFormat, SummaryFormat};

/// Name of the configuration file picked up from the working directory.
pub const CONFIG_FILE_NAME: &str = "tokdup.toml";

/// `tokdup` finds clusters of near-duplicate source files from their token lists.
///
/// Input is one sample per line: a unique identifier, a TAB, and the sample's
/// tokens separated by spaces (or TABs). Reads stdin when no FILE is given.
///
/// Two samples are near-duplicates when, in jaccard mode, the set score meets
/// the first threshold and the multiset score the second; in lcs mode, the
/// common subsequence covers at least the first threshold of the anchor; in
/// cosine mode, the cosine similarity meets the first threshold.
#[derive(Parser, Debug)]
#[command(name = "tokdup", version, about, long_about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Options for the implicit `cluster` mode (when no subcommand is provided).
    #[command(flatten)]
    pub cluster: CliClusterArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress warning messages.
    #[arg(short = 'w', long = "no-warnings", global = true)]
    pub no_warnings: bool,

    /// Configuration file [default: ./tokdup.toml when present].
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Cluster samples (default).
    Cluster(CliClusterArgs),

    /// Write a `tokdup.toml` template to the target directory.
    Init(InitArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CliClusterArgs {
    /// Sample files; `-` or none reads stdin.
    #[arg(value_name = "FILE")]
    pub paths: Vec<PathBuf>,

    /// Metric: jaccard, lcs or cosine. Unknown names fall back to jaccard.
    #[arg(short = 'm', long, value_name = "MODE")]
    pub mode: Option<String>,

    /// First (jaccard set, lcs or cosine) threshold in [0, 1] [default: 0.9].
    #[arg(short = 'i', long, value_name = "NUM", allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Second (jaccard multiset) threshold in [0, 1] [default: 0.8].
    #[arg(short = 'j', long, value_name = "NUM", allow_negative_numbers = true)]
    pub multiset_threshold: Option<f64>,

    /// Samples with fewer tokens are discarded [default: 20].
    #[arg(short = 'M', long, value_name = "INT")]
    pub min_tokens: Option<usize>,

    /// Write the report to this file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also output singleton groups.
    #[arg(short = 's', long)]
    pub singletons: bool,

    /// Insist tokens are TAB-separated (default: autodetect).
    #[arg(short = 't', long)]
    pub tab: bool,

    /// Print the summary as CSV instead of text.
    #[arg(short = 'c', long)]
    pub csv_summary: bool,

    /// Report format [default: text].
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Target directory (defaults to ".").
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing `tokdup.toml`.
    #[arg(long)]
    pub force: bool,

    /// Print the template to stdout instead of writing a file.
    #[arg(long)]
    pub print: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

// =============================================================================
// TOML Configuration File Structures
// =============================================================================

/// Root TOML configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub cluster: ClusterConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// "jaccard", "lcs" or "cosine".
    pub mode: Option<String>,

    pub threshold: Option<f64>,

    pub multiset_threshold: Option<f64>,

    pub min_tokens: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Split tokens on TAB only.
    pub tab: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// "text", "csv" or "json".
    pub format: Option<String>,

    /// "text" or "csv".
    pub summary: Option<String>,

    pub singletons: Option<bool>,

    /// Report file path.
    pub output: Option<String>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// Result type alias for TOML parsing errors.
pub type TomlResult<T> = Result<T, toml::de::Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags_mirror_classic_options() {
        let cli = Cli::parse_from([
            "tokdup", "-m", "lcs", "-i", "0.7", "-j", "0.6", "-M", "5", "-o", "out.txt", "-s",
            "-t", "-c", "-w", "-vv", "a.tok", "b.tok",
        ]);
        let c = &cli.cluster;
        assert_eq!(c.mode.as_deref(), Some("lcs"));
        assert_eq!(c.threshold, Some(0.7));
        assert_eq!(c.multiset_threshold, Some(0.6));
        assert_eq!(c.min_tokens, Some(5));
        assert_eq!(c.output, Some(PathBuf::from("out.txt")));
        assert!(c.singletons && c.tab && c.csv_summary);
        assert!(cli.global.no_warnings);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(c.paths.len(), 2);
        assert!(cli.command.is_none());
    }

    #[test]
    fn toml_sections_parse() {
        let cfg = TomlConfig::parse(
            r#"
            [cluster]
            mode = "cosine"
            threshold = 0.95

            [output]
            singletons = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.cluster.mode.as_deref(), Some("cosine"));
        assert_eq!(cfg.cluster.threshold, Some(0.95));
        assert_eq!(cfg.cluster.min_tokens, None);
        assert_eq!(cfg.output.singletons, Some(true));
        assert_eq!(cfg.input, InputConfig::default());
    }
}
