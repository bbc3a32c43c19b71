use log::debug;
use memchr::memmem;
use regex::{Captures, Regex};

use std::borrow::Cow;

use super::{Codemod, Transformed, split_lines};
use crate::core::constants::rewrite;
use crate::core::error::Result;

/// What to replace and what to replace it with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRules {
    /// Hardcoded endpoint root, e.g. `http://localhost:3001`
    pub marker: String,
    /// Runtime helper that resolves the endpoint root
    pub helper_symbol: String,
    /// Import statement inserted when the helper is not referenced yet
    pub import_line: String,
    /// Only paths starting with this are rewritten, e.g. `/api/`
    pub api_prefix: String,
}

impl Default for RewriteRules {
    fn default() -> Self {
        Self {
            marker: rewrite::DEFAULT_MARKER.to_string(),
            helper_symbol: rewrite::DEFAULT_HELPER_SYMBOL.to_string(),
            import_line: format!(
                "import {{ {} }} from '{}'",
                rewrite::DEFAULT_HELPER_SYMBOL,
                rewrite::DEFAULT_HELPER_MODULE
            ),
            api_prefix: rewrite::DEFAULT_API_PREFIX.to_string(),
        }
    }
}

/// Rewrites hardcoded endpoint strings into helper calls.
///
/// `'http://localhost:3001/api/auth/login'` becomes
/// `getApiUrl('/api/auth/login')`, and
/// `` `http://localhost:3001/api/users/${id}` `` becomes
/// `` `${getApiUrl('/api/users')}/${id}` ``.
pub struct UrlRewriter {
    rules: RewriteRules,
    single_quoted: memmem::Finder<'static>,
    backtick_quoted: memmem::Finder<'static>,
    plain_string: Regex,
    template_string: Regex,
}

impl UrlRewriter {
    pub fn new(rules: RewriteRules) -> Result<Self> {
        let marker = regex::escape(&rules.marker);
        let prefix = regex::escape(&rules.api_prefix);

        // '<marker>/api/...'  (path has no further quote)
        let plain_string = Regex::new(&format!("'{marker}({prefix}[^']+)'"))?;
        // `<marker>/api/segment/${expr}rest`  (expr has no nested braces)
        let template_string = Regex::new(&format!(
            r"`{marker}({prefix}[^/$`]+)/\$\{{([^}}]+)\}}([^`]*)`"
        ))?;

        let single_quoted =
            memmem::Finder::new(format!("'{}", rules.marker).as_bytes()).into_owned();
        let backtick_quoted =
            memmem::Finder::new(format!("`{}", rules.marker).as_bytes()).into_owned();

        Ok(Self {
            rules,
            single_quoted,
            backtick_quoted,
            plain_string,
            template_string,
        })
    }

    /// True if the marker opens a quoted or template string somewhere
    pub fn has_quoted_marker(&self, content: &str) -> bool {
        let bytes = content.as_bytes();
        self.single_quoted.find(bytes).is_some() || self.backtick_quoted.find(bytes).is_some()
    }

    /// Insert the helper import after the last top-level import line.
    ///
    /// Returns `None` when the helper is already referenced, when there is no
    /// quoted marker, or when the content has no import line to anchor on.
    pub fn insert_import(&self, content: &str) -> Option<String> {
        if content.contains(&self.rules.helper_symbol) || !self.has_quoted_marker(content) {
            return None;
        }

        let mut lines = split_lines(content);
        let last_import = lines
            .iter()
            .rposition(|line| line.trim().starts_with(rewrite::IMPORT_KEYWORD))?;

        // Keep CRLF files consistent
        let import_line = if lines[last_import].ends_with('\r') {
            Cow::Owned(format!("{}\r", self.rules.import_line))
        } else {
            Cow::Borrowed(self.rules.import_line.as_str())
        };

        lines.insert(last_import + 1, &import_line);
        Some(lines.join("\n"))
    }

    /// `'<marker>/api/x'` → `helper('/api/x')`
    pub fn rewrite_plain_strings<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.plain_string.replace_all(content, |caps: &Captures| {
            format!("{}('{}')", self.rules.helper_symbol, &caps[1])
        })
    }

    /// `` `<marker>/api/x/${e}rest` `` → `` `${helper('/api/x')}/${e}rest` ``
    pub fn rewrite_template_strings<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.template_string.replace_all(content, |caps: &Captures| {
            format!(
                "`${{{}('{}')}}/${{{}}}{}`",
                self.rules.helper_symbol, &caps[1], &caps[2], &caps[3]
            )
        })
    }
}

impl Codemod for UrlRewriter {
    fn name(&self) -> &'static str {
        "url-rewriter"
    }

    fn apply(&self, content: &str) -> Transformed {
        if !self.has_quoted_marker(content) {
            return Transformed::unchanged(content);
        }

        let mut rewritten = match self.insert_import(content) {
            Some(with_import) => {
                debug!("Inserted import for {}", self.rules.helper_symbol);
                with_import
            }
            None => content.to_string(),
        };
        rewritten = self.rewrite_plain_strings(&rewritten).into_owned();
        rewritten = self.rewrite_template_strings(&rewritten).into_owned();

        Transformed::from_original(content, rewritten)
    }
}
