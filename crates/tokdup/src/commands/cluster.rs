use anyhow::Result;
use tokdup_config::{self as cli, TomlConfig};
use tokdup_format as format;

use crate::config;

pub(crate) fn handle(args: cli::CliClusterArgs, file: Option<&TomlConfig>) -> Result<()> {
    let resolved = config::resolve_cluster(&args, file);
    let mut receipt =
        tokdup_core::cluster_inputs(&args.paths, &resolved.input, &resolved.cluster)?;

    // Config fallbacks happened first, so they lead the list.
    if !resolved.warnings.is_empty() {
        let mut warnings = resolved.warnings;
        warnings.append(&mut receipt.warnings);
        receipt.warnings = warnings;
    }

    format::write_report(&receipt, &resolved.output)?;
    format::write_summary(&receipt, resolved.output.summary)?;
    Ok(())
}
