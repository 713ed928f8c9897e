pub(crate) mod cluster;
pub(crate) mod completions;
pub(crate) mod init;

use anyhow::Result;
use tokdup_config::{self as cli, TomlConfig};

pub(crate) fn dispatch(cli: cli::Cli, file: Option<&TomlConfig>) -> Result<()> {
    match cli.command.unwrap_or(cli::Commands::Cluster(cli.cluster.clone())) {
        cli::Commands::Cluster(args) => cluster::handle(args, file),
        cli::Commands::Init(args) => init::handle(args),
        cli::Commands::Completions(args) => completions::handle(args),
    }
}
