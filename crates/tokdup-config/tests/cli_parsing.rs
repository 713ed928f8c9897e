//! Parsing tests for the clap surface.

use std::path::PathBuf;

use clap::Parser;
use tokdup_config::{Cli, Commands, ReportFormat, Shell};

#[test]
fn given_no_arguments_when_parsed_then_cluster_defaults_apply() {
    let cli = Cli::parse_from(["tokdup"]);
    assert!(cli.command.is_none());
    assert!(cli.cluster.paths.is_empty());
    assert_eq!(cli.cluster.mode, None);
    assert_eq!(cli.cluster.format, None);
    assert_eq!(cli.global.verbose, 0);
    assert!(!cli.global.no_warnings);
}

#[test]
fn given_cluster_subcommand_when_parsed_then_its_args_are_used() {
    let cli = Cli::parse_from(["tokdup", "cluster", "--format", "json", "-"]);
    match cli.command {
        Some(Commands::Cluster(args)) => {
            assert_eq!(args.format, Some(ReportFormat::Json));
            assert_eq!(args.paths, vec![PathBuf::from("-")]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_global_flag_after_subcommand_when_parsed_then_it_is_accepted() {
    let cli = Cli::parse_from(["tokdup", "cluster", "-w", "--config", "x.toml"]);
    assert!(cli.global.no_warnings);
    assert_eq!(cli.global.config, Some(PathBuf::from("x.toml")));
}

#[test]
fn given_unknown_mode_string_when_parsed_then_it_is_kept_for_lenient_resolution() {
    let cli = Cli::parse_from(["tokdup", "--mode", "levenshtein"]);
    assert_eq!(cli.cluster.mode.as_deref(), Some("levenshtein"));
}

#[test]
fn given_negative_threshold_when_parsed_then_value_reaches_validation() {
    let cli = Cli::parse_from(["tokdup", "-i", "-0.5"]);
    assert_eq!(cli.cluster.threshold, Some(-0.5));
}

#[test]
fn given_init_when_parsed_then_dir_defaults_to_cwd() {
    let cli = Cli::parse_from(["tokdup", "init", "--print"]);
    match cli.command {
        Some(Commands::Init(args)) => {
            assert_eq!(args.dir, PathBuf::from("."));
            assert!(args.print);
            assert!(!args.force);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_completions_when_parsed_then_shell_is_selected() {
    let cli = Cli::parse_from(["tokdup", "completions", "zsh"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Completions(ref a)) if a.shell == Shell::Zsh
    ));
}

#[test]
fn given_bad_format_when_parsed_then_clap_rejects_it() {
    assert!(Cli::try_parse_from(["tokdup", "--format", "xml"]).is_err());
}
