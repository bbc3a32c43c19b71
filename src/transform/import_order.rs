use super::{Codemod, Transformed, split_lines};
use crate::core::constants::rewrite;

/// Moves a helper import out of the brace of a multi-line import.
///
/// The URL rewriter anchors its insertion on the last line starting with
/// `import `, which for a multi-line clause is the `import {` line itself:
///
/// ```text
/// import {
/// import { getApiUrl } from '@/lib/api'
///   Button,
/// } from '@/components/ui'
/// ```
///
/// Swapping the two lines restores valid syntax.
pub struct ImportReorderer {
    needle: String,
}

impl ImportReorderer {
    pub fn new(helper_symbol: &str) -> Self {
        Self {
            needle: format!("import {{ {helper_symbol} }}"),
        }
    }

    fn is_misordered(&self, line: &str, next: &str) -> bool {
        line.trim() == rewrite::MULTILINE_IMPORT_OPEN && next.contains(&self.needle)
    }
}

impl Default for ImportReorderer {
    fn default() -> Self {
        Self::new(rewrite::DEFAULT_HELPER_SYMBOL)
    }
}

impl Codemod for ImportReorderer {
    fn name(&self) -> &'static str {
        "import-reorderer"
    }

    fn apply(&self, content: &str) -> Transformed {
        let lines = split_lines(content);
        let mut result = Vec::with_capacity(lines.len());

        let mut i = 0;
        while i < lines.len() {
            if i + 1 < lines.len() && self.is_misordered(lines[i], lines[i + 1]) {
                result.push(lines[i + 1]);
                result.push(lines[i]);
                i += 2;
            } else {
                result.push(lines[i]);
                i += 1;
            }
        }

        Transformed::from_original(content, result.join("\n"))
    }
}
