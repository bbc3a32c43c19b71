// Command-line interface definitions shared by both codemod binaries

use crate::config::CliConfig;
use clap::{Args, Subcommand};

/// Options every codemod binary accepts
#[derive(Args, Debug, Default, Clone)]
pub struct CodemodArgs {
    // Scope
    /// Root directory to walk; repeat for several (default: app, components, hooks)
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        value_hint = clap::ValueHint::DirPath,
        help_heading = "Scope"
    )]
    pub roots: Vec<String>,

    /// File extension to process; repeat for several (default: tsx, ts)
    #[arg(short = 'e', long = "ext", value_name = "EXT", help_heading = "Scope")]
    pub extensions: Vec<String>,

    /// Show which files would change without writing them
    #[arg(short = 'n', long, help_heading = "Scope")]
    pub dry_run: bool,

    // Output & Verbosity
    /// Only print errors and the final count
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, conflicts_with = "config", help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed arguments into the CliConfig consumed by Config::merge_with_cli
pub fn args_to_config(args: &CodemodArgs) -> CliConfig {
    CliConfig {
        roots: non_empty(&args.roots),
        extensions: non_empty(&args.extensions),
        dry_run: args.dry_run,
        verbose: args.verbose,
        quiet: args.quiet,
        config_file: args.config.clone(),
        no_config: args.no_config,
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    let values: Vec<String> = values
        .iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
