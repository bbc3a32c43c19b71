//! Text transformations
//!
//! Each codemod is a pure function from file content to new content.
//! Nothing here touches the filesystem; see [`crate::batch`] for that.

pub mod import_order;
pub mod url_rewriter;

// Re-export commonly used items
pub use import_order::ImportReorderer;
pub use url_rewriter::{RewriteRules, UrlRewriter};

/// Result of running a codemod over one file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub content: String,
    /// True iff `content` differs byte-for-byte from the input
    pub modified: bool,
}

impl Transformed {
    pub fn from_original(original: &str, content: String) -> Self {
        let modified = content != original;
        Self { content, modified }
    }

    pub fn unchanged(original: &str) -> Self {
        Self {
            content: original.to_string(),
            modified: false,
        }
    }
}

pub trait Codemod {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    fn apply(&self, content: &str) -> Transformed;
}

/// Split on `'\n'` only, so joining with `'\n'` restores the input exactly
pub(crate) fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}
