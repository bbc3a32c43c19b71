//! Entry points shared by the `fix-api-urls` and `fix-import-order` binaries

use crate::batch::{BatchSummary, run_batch};
use crate::config::{CliConfig, Config};
use crate::core::error::Result;
use crate::discovery::walk_files;
use crate::reporting::logging;
use crate::transform::{Codemod, ImportReorderer, UrlRewriter};
use crate::ui::{CodemodArgs, ConsoleReporter, args_to_config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Replace hardcoded endpoints with helper calls
    FixApiUrls,
    /// Move the helper import out of multi-line import braces
    FixImportOrder,
}

impl Tool {
    pub fn binary_name(&self) -> &'static str {
        match self {
            Tool::FixApiUrls => "fix-api-urls",
            Tool::FixImportOrder => "fix-import-order",
        }
    }

    /// Word used in the final `N files <verb>!` line
    pub fn summary_verb(&self) -> &'static str {
        match self {
            Tool::FixApiUrls => "modified",
            Tool::FixImportOrder => "fixed",
        }
    }

    pub fn build_codemod(&self, config: &Config) -> Result<Box<dyn Codemod>> {
        let codemod: Box<dyn Codemod> = match self {
            Tool::FixApiUrls => Box::new(UrlRewriter::new(config.rewrite_rules())?),
            Tool::FixImportOrder => Box::new(ImportReorderer::new(config.helper_symbol())),
        };
        Ok(codemod)
    }
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Walk the configured roots and run `tool`'s codemod over every file.
///
/// Per-file failures are reported and counted; only unusable configuration
/// returns an error.
pub fn run_tool(tool: Tool, args: &CodemodArgs) -> Result<BatchSummary> {
    let cli_config = args_to_config(args);
    let config = load_and_merge_config(&cli_config)?;
    logging::init_logger(config.is_verbose(), cli_config.quiet);

    let options = config.walk_options();
    logging::log_config_info(&config, &options);

    let codemod = tool.build_codemod(&config)?;
    let dry_run = config.is_dry_run();
    let mut reporter = ConsoleReporter::stdout(cli_config.quiet);

    let summary = run_batch(
        walk_files(&options),
        codemod.as_ref(),
        dry_run,
        &mut reporter,
    );
    reporter.print_summary(&summary, tool.summary_verb(), dry_run);

    Ok(summary)
}
