use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokdup_config::{self as cli, TomlConfig};
use tokdup_settings::{
    ClusterSettings, InputSettings, OutputSettings, SummaryFormat, format_or_default,
    mode_or_default,
};

/// Everything a `cluster` run needs after CLI > TOML > default resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ResolvedConfig {
    pub cluster: ClusterSettings,
    pub input: InputSettings,
    pub output: OutputSettings,
    /// Fallbacks taken while parsing mode and format names.
    pub warnings: Vec<String>,
}

/// Load `--config`, or `./tokdup.toml` when it exists.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Option<TomlConfig>> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let local = PathBuf::from(cli::CONFIG_FILE_NAME);
            if !local.is_file() {
                return Ok(None);
            }
            local
        }
    };
    let config = TomlConfig::from_file(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    tracing::info!("loaded {}", path.display());
    Ok(Some(config))
}

pub(crate) fn resolve_cluster(
    cli_args: &cli::CliClusterArgs,
    file: Option<&TomlConfig>,
) -> ResolvedConfig {
    let mut warnings = Vec::new();
    let cluster = file.map(|f| &f.cluster);
    let input = file.map(|f| &f.input);
    let output = file.map(|f| &f.output);

    let defaults = ClusterSettings::default();
    let mode = match cli_args
        .mode
        .as_deref()
        .or_else(|| cluster.and_then(|c| c.mode.as_deref()))
    {
        Some(raw) => mode_or_default(raw, &mut warnings),
        None => defaults.mode,
    };

    let cluster_settings = ClusterSettings {
        mode,
        threshold_0: cli_args
            .threshold
            .or_else(|| cluster.and_then(|c| c.threshold))
            .unwrap_or(defaults.threshold_0),
        threshold_1: cli_args
            .multiset_threshold
            .or_else(|| cluster.and_then(|c| c.multiset_threshold))
            .unwrap_or(defaults.threshold_1),
        min_tokens: cli_args
            .min_tokens
            .or_else(|| cluster.and_then(|c| c.min_tokens))
            .unwrap_or(defaults.min_tokens),
    };

    let input_settings = InputSettings {
        tab: cli_args.tab || input.and_then(|i| i.tab).unwrap_or(false),
    };

    let format = match cli_args.format {
        Some(format) => format,
        None => output
            .and_then(|o| o.format.as_deref())
            .map(|raw| format_or_default(raw, &mut warnings))
            .unwrap_or_default(),
    };

    let summary = if cli_args.csv_summary {
        SummaryFormat::Csv
    } else {
        output
            .and_then(|o| o.summary.as_deref())
            .map(|raw| {
                raw.parse().unwrap_or_else(|_| {
                    let message = format!("invalid summary {raw} (using text)");
                    tracing::warn!("{message}");
                    warnings.push(message);
                    SummaryFormat::Text
                })
            })
            .unwrap_or_default()
    };

    let output_settings = OutputSettings {
        format,
        summary,
        singletons: cli_args.singletons || output.and_then(|o| o.singletons).unwrap_or(false),
        output: cli_args
            .output
            .clone()
            .or_else(|| output.and_then(|o| o.output.as_ref().map(PathBuf::from))),
    };

    ResolvedConfig {
        cluster: cluster_settings,
        input: input_settings,
        output: output_settings,
        warnings,
    }
}
