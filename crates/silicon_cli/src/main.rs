//! Silicon CLI, the command-line interface for the chip series pipeline.
//!
//! Provides `silicon build` to turn chip sources into normalized series
//! documents and pinmux headers, `silicon validate` to re-check written
//! documents against the schema, and `silicon schema` to export the schema.

#![warn(missing_docs)]

mod build;
mod pipeline;
mod schema;
mod validate;

use std::io::IsTerminal;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Silicon, the chip pin and pad schema pipeline.
#[derive(Parser, Debug)]
#[command(name = "silicon", version, about = "Chip pinmux schema pipeline")]
pub struct Cli {
    /// Suppress status output; logs errors only.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Raise the log level (`-v` info, `-vv` debug, `-vvv` trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `silicon.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build series documents and headers from chip sources.
    Build(BuildArgs),
    /// Validate previously built series documents.
    Validate(ValidateArgs),
    /// Export the series document schema.
    Schema(SchemaArgs),
}

/// Arguments for the `silicon build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Series to build (default: every directory under the chips path).
    #[arg(short, long = "series", num_args = 1..)]
    pub series: Vec<String>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `silicon validate` subcommand.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Series to validate (default: every directory under the output path).
    #[arg(short, long = "series", num_args = 1..)]
    pub series: Vec<String>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `silicon schema` subcommand.
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Write the schema to this file or directory instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// One JSON object per diagnostic.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet > 0,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };
    pipeline::init_tracing(&global);

    let result = match cli.command {
        Command::Build(ref args) => build::run(args, &global),
        Command::Validate(ref args) => validate::run(args, &global),
        Command::Schema(ref args) => schema::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_build_default() {
        let cli = Cli::parse_from(["silicon", "build"]);
        match cli.command {
            Command::Build(ref args) => {
                assert!(args.series.is_empty());
                assert_eq!(args.format, ReportFormat::Text);
            }
            _ => panic!("expected Build command"),
        }
    }

    #[test]
    fn parse_build_with_series() {
        let cli = Cli::parse_from([
            "silicon",
            "build",
            "--series",
            "SF32LB52x",
            "SF32LB56x",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Build(ref args) => {
                assert_eq!(args.series, vec!["SF32LB52x", "SF32LB56x"]);
                assert_eq!(args.format, ReportFormat::Json);
            }
            _ => panic!("expected Build command"),
        }
    }

    #[test]
    fn parse_build_repeated_series() {
        let cli = Cli::parse_from(["silicon", "build", "-s", "A", "-s", "B"]);
        match cli.command {
            Command::Build(ref args) => assert_eq!(args.series, vec!["A", "B"]),
            _ => panic!("expected Build command"),
        }
    }

    #[test]
    fn parse_validate_default() {
        let cli = Cli::parse_from(["silicon", "validate"]);
        match cli.command {
            Command::Validate(ref args) => {
                assert!(args.series.is_empty());
                assert_eq!(args.format, ReportFormat::Text);
            }
            _ => panic!("expected Validate command"),
        }
    }

    #[test]
    fn parse_schema_output() {
        let cli = Cli::parse_from(["silicon", "schema", "-o", "schemas"]);
        match cli.command {
            Command::Schema(ref args) => assert_eq!(args.output.as_deref(), Some("schemas")),
            _ => panic!("expected Schema command"),
        }
    }

    #[test]
    fn parse_schema_stdout() {
        let cli = Cli::parse_from(["silicon", "schema"]);
        match cli.command {
            Command::Schema(ref args) => assert!(args.output.is_none()),
            _ => panic!("expected Schema command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["silicon", "--quiet", "--color", "never", "build"]);
        assert_eq!(cli.quiet, 1);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["silicon", "validate", "--verbose", "--color", "always"]);
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.color, ColorChoice::Always);
    }

    #[test]
    fn verbose_flags_count() {
        let cli = Cli::parse_from(["silicon", "-vvv", "build"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["silicon", "--config", "/path/to/silicon.toml", "build"]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/silicon.toml"));
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(Cli::try_parse_from(["silicon", "build", "--format", "xml"]).is_err());
    }
}
