//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// condaswap - Conda environment provisioning and switching for hosted notebooks.
#[derive(Debug, Parser)]
#[command(name = "condaswap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe for conda and python on the search path (default)
    Check(CheckArgs),

    /// Bootstrap conda via condacolab when absent
    Install(InstallArgs),

    /// Detect and repair a broken conda installation
    Doctor(DoctorArgs),

    /// Create an environment and make it the default interpreter
    Setup(SetupArgs),

    /// Run a command, falling back to the active environment's bin directory
    Run(RunArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {}

/// Arguments for the `doctor` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DoctorArgs {
    /// Remove a broken conda without asking
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetupArgs {
    /// Python version for the new environment
    #[arg(short, long, default_value = "3.10", value_name = "VERSION")]
    pub python: String,

    /// Name for the new environment
    #[arg(short, long, default_value = "condaswap", value_name = "NAME")]
    pub name: String,
}

impl Default for SetupArgs {
    fn default() -> Self {
        Self {
            python: "3.10".to_string(),
            name: "condaswap".to_string(),
        }
    }
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Command to run
    pub command: String,

    /// Arguments passed through to the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_without_subcommand() {
        let cli = Cli::try_parse_from(["condaswap"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn setup_defaults() {
        let cli = Cli::try_parse_from(["condaswap", "setup"]).unwrap();
        match cli.command {
            Some(Commands::Setup(args)) => {
                assert_eq!(args.python, "3.10");
                assert_eq!(args.name, "condaswap");
            }
            other => panic!("expected setup, got {:?}", other),
        }
    }

    #[test]
    fn setup_accepts_overrides() {
        let cli =
            Cli::try_parse_from(["condaswap", "setup", "--python", "3.11", "--name", "ml"])
                .unwrap();
        match cli.command {
            Some(Commands::Setup(args)) => {
                assert_eq!(args.python, "3.11");
                assert_eq!(args.name, "ml");
            }
            other => panic!("expected setup, got {:?}", other),
        }
    }

    #[test]
    fn run_collects_trailing_args_with_hyphens() {
        let cli = Cli::try_parse_from(["condaswap", "run", "gdown", "--id", "abc123"]).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.command, "gdown");
                assert_eq!(args.args, vec!["--id", "abc123"]);
            }
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn run_requires_a_command() {
        assert!(Cli::try_parse_from(["condaswap", "run"]).is_err());
    }

    #[test]
    fn check_accepts_json_flag() {
        let cli = Cli::try_parse_from(["condaswap", "check", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Check(args)) => assert!(args.json),
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_apply_anywhere() {
        let cli = Cli::try_parse_from(["condaswap", "check", "--debug", "--quiet"]).unwrap();
        assert!(cli.debug);
        assert!(cli.quiet);
    }

    #[test]
    fn command_structure_is_valid() {
        Cli::command().debug_assert();
    }
}
