use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tokdup_config as cli;

pub(crate) const TEMPLATE: &str = r#"# tokdup configuration
# Command-line flags take precedence over the values below.

[cluster]
# Similarity metric: "jaccard", "lcs" or "cosine".
mode = "jaccard"
# Jaccard set score, LCS ratio or cosine similarity must reach this.
threshold = 0.9
# Jaccard multiset score must reach this (jaccard mode only).
multiset_threshold = 0.8
# Samples with fewer tokens are discarded.
min_tokens = 20

[input]
# Split tokens on TAB from the first line instead of auto-detecting.
tab = false

[output]
# Cluster listing: "text", "csv" or "json".
format = "text"
# Run summary on stderr: "text" or "csv".
summary = "text"
# Also list samples that matched nothing.
singletons = false
# Write the listing to a file instead of stdout.
# output = "clusters.txt"
"#;

pub(crate) fn handle(args: cli::InitArgs) -> Result<()> {
    if let Some(path) = write_template(&args)? {
        eprintln!("Created {}", path.display());
    }
    Ok(())
}

fn write_template(args: &cli::InitArgs) -> Result<Option<PathBuf>> {
    if args.print {
        print!("{TEMPLATE}");
        return Ok(None);
    }

    if !args.dir.is_dir() {
        bail!("Directory does not exist: {}", args.dir.display());
    }

    let path = args.dir.join(cli::CONFIG_FILE_NAME);
    if path.exists() && !args.force {
        bail!("{} already exists", path.display());
    }

    fs::write(&path, TEMPLATE).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokdup_config::TomlConfig;
    use tokdup_settings::ClusterSettings;

    fn args(dir: PathBuf, force: bool, print: bool) -> cli::InitArgs {
        cli::InitArgs { dir, force, print }
    }

    #[test]
    fn template_matches_defaults() {
        let config = TomlConfig::parse(TEMPLATE).unwrap();
        let defaults = ClusterSettings::default();
        assert_eq!(config.cluster.threshold, Some(defaults.threshold_0));
        assert_eq!(config.cluster.multiset_threshold, Some(defaults.threshold_1));
        assert_eq!(config.cluster.min_tokens, Some(defaults.min_tokens));
        assert_eq!(config.output.output, None);
    }

    #[test]
    fn writes_into_target_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(&args(dir.path().to_path_buf(), false, false))
            .unwrap()
            .unwrap();
        assert_eq!(path, dir.path().join("tokdup.toml"));
        assert_eq!(fs::read_to_string(path).unwrap(), TEMPLATE);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokdup.toml");
        fs::write(&path, "# mine\n").unwrap();

        let err = write_template(&args(dir.path().to_path_buf(), false, false)).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        write_template(&args(dir.path().to_path_buf(), true, false)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_template(&args(dir.path().join("absent"), false, false)).unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
    }

    #[test]
    fn print_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_template(&args(dir.path().to_path_buf(), false, true)).unwrap();
        assert!(written.is_none());
        assert!(!dir.path().join("tokdup.toml").exists());
    }
}
