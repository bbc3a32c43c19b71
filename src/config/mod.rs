//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{config_files, rewrite, walk};
use crate::core::error::{CodemodError, Result};
use crate::discovery::WalkOptions;
use crate::transform::RewriteRules;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Failed to compile identifier pattern")
});

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root directories to walk
    pub roots: Option<Vec<String>>,

    /// File extensions to process (with or without a leading dot)
    pub extensions: Option<Vec<String>>,

    /// Directory names never descended into, in addition to `node_modules`
    pub excluded_dirs: Option<Vec<String>>,

    /// Hardcoded endpoint root to replace
    pub marker: Option<String>,

    /// Name of the runtime URL helper
    pub helper_symbol: Option<String>,

    /// Module the helper is imported from
    pub helper_module: Option<String>,

    /// Full import statement to insert; derived from symbol and module when unset
    pub import_line: Option<String>,

    /// Only paths starting with this prefix are rewritten
    pub api_prefix: Option<String>,

    /// Report changes without writing files
    pub dry_run: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: Some(walk::DEFAULT_ROOTS.iter().map(|r| r.to_string()).collect()),
            extensions: Some(
                walk::DEFAULT_EXTENSIONS
                    .iter()
                    .map(|e| e.to_string())
                    .collect(),
            ),
            excluded_dirs: Some(vec![walk::DEPENDENCY_CACHE_DIR.to_string()]),
            marker: Some(rewrite::DEFAULT_MARKER.to_string()),
            helper_symbol: Some(rewrite::DEFAULT_HELPER_SYMBOL.to_string()),
            helper_module: Some(rewrite::DEFAULT_HELPER_MODULE.to_string()),
            import_line: None, // Derived from helper_symbol and helper_module
            api_prefix: Some(rewrite::DEFAULT_API_PREFIX.to_string()),
            dry_run: Some(false),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CodemodError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            CodemodError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Look for a config file in the working directory and its parents
    pub fn load_from_standard_locations() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from_dir(&cwd)
    }

    /// Look for a config file in `dir` and up to three of its parents.
    ///
    /// A missing file falls back to defaults; a file that exists but does not
    /// parse is an error.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        match Self::find_config_file(dir) {
            Some(path) => {
                log::debug!("Using config file {}", path.display());
                Self::load_from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    fn find_config_file(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .take(config_files::MAX_PARENT_LEVELS + 1)
            .map(|ancestor| ancestor.join(config_files::FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref roots) = cli_config.roots {
            self.roots = Some(roots.clone());
        }
        if let Some(ref extensions) = cli_config.extensions {
            self.extensions = Some(extensions.clone());
        }
        if cli_config.dry_run {
            self.dry_run = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    pub fn helper_symbol(&self) -> &str {
        self.helper_symbol
            .as_deref()
            .unwrap_or(rewrite::DEFAULT_HELPER_SYMBOL)
    }

    /// Import statement inserted by the URL rewriter
    pub fn import_line(&self) -> String {
        match self.import_line {
            Some(ref line) => line.clone(),
            None => format!(
                "import {{ {} }} from '{}'",
                self.helper_symbol(),
                self.helper_module
                    .as_deref()
                    .unwrap_or(rewrite::DEFAULT_HELPER_MODULE)
            ),
        }
    }

    /// Build the walker input, falling back to defaults for unset fields
    pub fn walk_options(&self) -> WalkOptions {
        let roots = match self.roots {
            Some(ref roots) => roots.iter().map(PathBuf::from).collect(),
            None => walk::DEFAULT_ROOTS.iter().map(PathBuf::from).collect(),
        };
        let extensions = match self.extensions {
            Some(ref extensions) => extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_string())
                .collect(),
            None => walk::DEFAULT_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        };
        // The dependency cache is excluded whatever else is configured
        let mut excluded_dirs: HashSet<String> =
            [walk::DEPENDENCY_CACHE_DIR.to_string()].into_iter().collect();
        if let Some(ref dirs) = self.excluded_dirs {
            excluded_dirs.extend(dirs.iter().cloned());
        }

        WalkOptions {
            roots,
            extensions,
            excluded_dirs,
        }
    }

    /// Build the URL rewrite rules, falling back to defaults for unset fields
    pub fn rewrite_rules(&self) -> RewriteRules {
        RewriteRules {
            marker: self
                .marker
                .clone()
                .unwrap_or_else(|| rewrite::DEFAULT_MARKER.to_string()),
            helper_symbol: self.helper_symbol().to_string(),
            import_line: self.import_line(),
            api_prefix: self
                .api_prefix
                .clone()
                .unwrap_or_else(|| rewrite::DEFAULT_API_PREFIX.to_string()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref roots) = self.roots
            && roots.is_empty()
        {
            return Err(CodemodError::Config(
                "At least one root directory is required.".to_string(),
            ));
        }

        if let Some(ref extensions) = self.extensions {
            if extensions.is_empty() {
                return Err(CodemodError::Config(
                    "At least one file extension is required.".to_string(),
                ));
            }
            if let Some(bad) = extensions
                .iter()
                .find(|e| e.trim().trim_start_matches('.').is_empty())
            {
                return Err(CodemodError::Config(format!(
                    "Invalid file extension '{bad}'. Expected something like 'ts' or '.tsx'."
                )));
            }
        }

        if let Some(ref marker) = self.marker
            && marker.is_empty()
        {
            return Err(CodemodError::Config(
                "Marker cannot be empty. Expected an endpoint root like 'http://localhost:3001'."
                    .to_string(),
            ));
        }

        let helper = self.helper_symbol();
        if !IDENTIFIER.is_match(helper) {
            return Err(CodemodError::Config(format!(
                "Helper symbol '{helper}' is not a valid identifier."
            )));
        }

        // Re-running the rewriter relies on the inserted line naming the helper
        let import_line = self.import_line();
        if !import_line.trim_start().starts_with(rewrite::IMPORT_KEYWORD)
            || !import_line.contains(helper)
        {
            return Err(CodemodError::Config(format!(
                "Import line '{import_line}' must be an import statement that names '{helper}'."
            )));
        }

        if let Some(ref prefix) = self.api_prefix
            && !prefix.starts_with('/')
        {
            return Err(CodemodError::Config(format!(
                "API prefix '{prefix}' must start with '/'."
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub roots: Option<Vec<String>>,      // --root
    pub extensions: Option<Vec<String>>, // --ext
    pub dry_run: bool,                   // --dry-run
    pub verbose: bool,                   // --verbose
    pub quiet: bool,                     // --quiet
    pub config_file: Option<String>,     // --config
    pub no_config: bool,                 // --no-config
}
