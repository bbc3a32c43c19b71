//! Application-wide constants to avoid magic values throughout the codebase.
//!
//! Defaults for the walk and for the rewrite rules live here; everything is
//! overridable through [`crate::config::Config`].

/// Tree walking defaults
pub mod walk {
    /// Root directories scanned when none are configured
    pub const DEFAULT_ROOTS: [&str; 3] = ["app", "components", "hooks"];
    /// Source file extensions scanned when none are configured
    pub const DEFAULT_EXTENSIONS: [&str; 2] = ["tsx", "ts"];
    /// Dependency cache directory, never descended into
    pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";
}

/// URL rewrite defaults
pub mod rewrite {
    /// Hardcoded endpoint root that gets replaced
    pub const DEFAULT_MARKER: &str = "http://localhost:3001";
    /// Helper function resolving the endpoint root at runtime
    pub const DEFAULT_HELPER_SYMBOL: &str = "getApiUrl";
    /// Module the helper is imported from
    pub const DEFAULT_HELPER_MODULE: &str = "@/lib/api";
    /// Paths must start with this segment to be rewritten
    pub const DEFAULT_API_PREFIX: &str = "/api/";
    /// Lines whose trimmed text starts with this are treated as imports
    pub const IMPORT_KEYWORD: &str = "import ";
    /// Opening line of a multi-line import clause
    pub const MULTILINE_IMPORT_OPEN: &str = "import {";
}

/// Configuration file lookup
pub mod config_files {
    /// File name searched for in the working directory and its parents
    pub const FILE_NAME: &str = ".apiurl-codemod.toml";
    /// How many parent directories are searched
    pub const MAX_PARENT_LEVELS: usize = 3;
}

/// Display and formatting constants
pub mod display {
    /// Marker printed before each modified file
    pub const MODIFIED_MARK: &str = "✓";
    /// Marker printed before each file a dry run would modify
    pub const DRY_RUN_MARK: &str = "~";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_constants() {
        assert_eq!(walk::DEFAULT_ROOTS, ["app", "components", "hooks"]);
        assert_eq!(walk::DEFAULT_EXTENSIONS, ["tsx", "ts"]);
        assert_eq!(walk::DEPENDENCY_CACHE_DIR, "node_modules");
    }

    #[test]
    fn test_rewrite_constants() {
        assert_eq!(rewrite::DEFAULT_MARKER, "http://localhost:3001");
        assert_eq!(rewrite::DEFAULT_HELPER_SYMBOL, "getApiUrl");
        assert!(rewrite::DEFAULT_API_PREFIX.starts_with('/'));
        assert!(rewrite::MULTILINE_IMPORT_OPEN.starts_with(rewrite::IMPORT_KEYWORD));
    }
}
