//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use project_scaffolder::config::{Config, DEFAULT_GIT_BINARY, GIT_BINARY_ENV, PROTOCOL_ENV};
use project_scaffolder::locator::CloneProtocol;
use project_scaffolder::output::{ColorChoice, OutputConfig};

use crate::commands;

/// Project Scaffolder CLI tool to clone a base project from a public GitHub repo
#[derive(Parser, Debug)]
#[command(name = "scaffolder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to the interactive clone)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Version-control binary used for cloning
    #[arg(long, global = true, value_name = "PATH", env = GIT_BINARY_ENV, default_value = DEFAULT_GIT_BINARY)]
    git_binary: PathBuf,

    /// Force the clone protocol instead of inferring it from the name (https, ssh)
    #[arg(long, global = true, value_name = "PROTOCOL", env = PROTOCOL_ENV, value_parser = parse_protocol)]
    protocol: Option<CloneProtocol>,

    /// Colorize output (auto, always, never)
    #[arg(long, global = true, value_name = "WHEN", default_value_t = ColorChoice::Auto, value_parser = parse_color)]
    color: ColorChoice,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone a repository, show its structure and optionally substitute words
    Clone(commands::clone::CloneArgs),

    /// Print the directory structure of a folder
    Tree(commands::tree::TreeArgs),

    /// Replace a word in all supported text files under a folder
    Substitute(commands::substitute::SubstituteArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

fn parse_protocol(value: &str) -> std::result::Result<CloneProtocol, String> {
    value.parse()
}

fn parse_color(value: &str) -> std::result::Result<ColorChoice, String> {
    value.parse()
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let output = OutputConfig::resolve(self.color);
        let config = Config::default()
            .with_git_binary(self.git_binary)
            .with_protocol(self.protocol);

        match self.command {
            None => commands::clone::execute(commands::clone::CloneArgs::default(), &config, &output),
            Some(Commands::Clone(args)) => commands::clone::execute(args, &config, &output),
            Some(Commands::Tree(args)) => commands::tree::execute(args),
            Some(Commands::Substitute(args)) => commands::substitute::execute(args, &output),
            Some(Commands::Completions(args)) => commands::completions::execute(args),
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--log-level` when set.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    #[serial]
    fn test_no_subcommand_runs_clone() {
        let cli = Cli::try_parse_from(["scaffolder"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "scaffolder",
            "clone",
            "--repo",
            "acme/base",
            "--git-binary",
            "/opt/git",
            "--protocol",
            "ssh",
        ])
        .unwrap();
        assert_eq!(cli.git_binary, PathBuf::from("/opt/git"));
        assert_eq!(cli.protocol, Some(CloneProtocol::Ssh));
        assert!(matches!(cli.command, Some(Commands::Clone(_))));
    }

    #[test]
    #[serial]
    fn test_color_flag_parsing() {
        let cli = Cli::try_parse_from(["scaffolder", "tree", "--color", "never"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(Cli::try_parse_from(["scaffolder", "--color", "rainbow"]).is_err());
    }

    #[test]
    fn test_invalid_protocol_rejected() {
        let result = Cli::try_parse_from(["scaffolder", "--protocol", "ftp"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_requires_non_empty_from() {
        let result = Cli::try_parse_from(["scaffolder", "substitute", "--from", "", "--to", "x"]);
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_environment_fills_config_flags() {
        env::set_var(GIT_BINARY_ENV, "/custom/git");
        env::set_var(PROTOCOL_ENV, "ssh");

        let from_env = Cli::try_parse_from(["scaffolder"]);
        let flag_wins = Cli::try_parse_from(["scaffolder", "--git-binary", "/flag/git"]);

        env::remove_var(GIT_BINARY_ENV);
        env::remove_var(PROTOCOL_ENV);

        let from_env = from_env.unwrap();
        assert_eq!(from_env.git_binary, PathBuf::from("/custom/git"));
        assert_eq!(from_env.protocol, Some(CloneProtocol::Ssh));

        let flag_wins = flag_wins.unwrap();
        assert_eq!(flag_wins.git_binary, PathBuf::from("/flag/git"));
        assert_eq!(flag_wins.protocol, Some(CloneProtocol::Ssh));
    }

    #[test]
    #[serial]
    fn test_invalid_protocol_in_environment_is_usage_error() {
        env::set_var(PROTOCOL_ENV, "ftp");
        let result = Cli::try_parse_from(["scaffolder"]);
        env::remove_var(PROTOCOL_ENV);

        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
