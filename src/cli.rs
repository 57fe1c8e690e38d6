// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::DEFAULT_CONFIG_PATH;

/// Command-line arguments for `spyrun`.
///
/// There are no subcommands; any stray positional argument is a usage error
/// and clap exits with status 2.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "spyrun",
    version,
    about = "Watch files and execute a command when they change.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    #[arg(
        short = 'i',
        long = "input",
        visible_alias = "config",
        value_name = "PATH",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub input: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SPYRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load the config, expand every pattern, print the watch entries and
    /// exit without polling.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_spy_toml() {
        let args = CliArgs::try_parse_from(["spyrun"]).unwrap();
        assert_eq!(args.input, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(args.log_level.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn input_flag_forms() {
        for argv in [
            vec!["spyrun", "-i", "conf/a.toml"],
            vec!["spyrun", "--input", "conf/a.toml"],
            vec!["spyrun", "--config", "conf/a.toml"],
        ] {
            let args = CliArgs::try_parse_from(argv).unwrap();
            assert_eq!(args.input, PathBuf::from("conf/a.toml"));
        }
    }

    #[test]
    fn log_level_flag() {
        let args = CliArgs::try_parse_from(["spyrun", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        let err = CliArgs::try_parse_from(["spyrun", "build"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
