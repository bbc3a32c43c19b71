use ignore::{DirEntry, Walk, WalkBuilder};
use log::{debug, warn};

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// What to walk and what to keep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Directories walked in order; missing ones are skipped
    pub roots: Vec<PathBuf>,
    /// Extensions without the leading dot, e.g. `tsx`
    pub extensions: HashSet<String>,
    /// Directory names whose subtrees are never entered
    pub excluded_dirs: HashSet<String>,
}

/// Lazily walk every root and yield matching files.
///
/// Unlike a git-aware walk, no ignore files are consulted and hidden entries
/// are visited. Traversal within a directory is sorted by file name.
pub fn walk_files(options: &WalkOptions) -> FileWalk {
    FileWalk {
        pending_roots: options.roots.clone().into_iter(),
        current: None,
        extensions: options.extensions.clone(),
        excluded_dirs: Arc::new(options.excluded_dirs.clone()),
    }
}

/// Single-use iterator over the files below a set of roots
pub struct FileWalk {
    pending_roots: std::vec::IntoIter<PathBuf>,
    current: Option<Walk>,
    extensions: HashSet<String>,
    excluded_dirs: Arc<HashSet<String>>,
}

impl FileWalk {
    fn start_root(&self, root: &Path) -> Walk {
        let excluded = Arc::clone(&self.excluded_dirs);
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| !is_excluded_dir(entry, &excluded));
        builder.build()
    }

    fn is_root_excluded(&self, root: &Path) -> bool {
        root.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.excluded_dirs.contains(name))
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(ext))
    }
}

impl Iterator for FileWalk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            if let Some(walk) = self.current.as_mut() {
                match walk.next() {
                    Some(Ok(entry)) => {
                        let path = entry.path();
                        if path.is_file() && self.has_allowed_extension(path) {
                            return Some(entry.into_path());
                        }
                    }
                    Some(Err(err)) => warn!("Skipping unreadable entry: {err}"),
                    None => self.current = None,
                }
                continue;
            }

            let root = self.pending_roots.next()?;
            if !root.is_dir() {
                debug!("Skipping missing root {}", root.display());
                continue;
            }
            if self.is_root_excluded(&root) {
                debug!("Skipping excluded root {}", root.display());
                continue;
            }

            debug!("Walking {}", root.display());
            self.current = Some(self.start_root(&root));
        }
    }
}

fn is_excluded_dir(entry: &DirEntry, excluded: &HashSet<String>) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excluded.contains(name))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn options_for(roots: Vec<PathBuf>) -> WalkOptions {
        WalkOptions {
            roots,
            extensions: ["tsx", "ts"].iter().map(|e| e.to_string()).collect(),
            excluded_dirs: ["node_modules"].iter().map(|d| d.to_string()).collect(),
        }
    }

    fn create_test_structure() -> std::result::Result<TempDir, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();

        fs::create_dir_all(base.join("app/login"))?;
        fs::create_dir_all(base.join("app/node_modules/pkg"))?;
        fs::create_dir_all(base.join("components/shared/node_modules/deep/er"))?;
        fs::create_dir_all(base.join("hooks"))?;

        fs::write(base.join("app/page.tsx"), "export default function Page() {}")?;
        fs::write(base.join("app/login/page.tsx"), "'use client'")?;
        fs::write(base.join("app/globals.css"), "body {}")?;
        fs::write(base.join("app/node_modules/pkg/index.ts"), "export {}")?;
        fs::write(
            base.join("components/shared/node_modules/deep/er/x.tsx"),
            "export {}",
        )?;
        fs::write(base.join("components/shared/Button.tsx"), "export {}")?;
        fs::write(base.join("hooks/useChat.ts"), "export {}")?;
        fs::write(base.join("hooks/README"), "no extension")?;

        Ok(temp_dir)
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_walk_files__finds_matching_files_in_all_roots() -> TestResult {
        let temp_dir = create_test_structure()?;
        let base = temp_dir.path();

        let options = options_for(vec![
            base.join("app"),
            base.join("components"),
            base.join("hooks"),
        ]);
        let result: Vec<PathBuf> = walk_files(&options).collect();

        assert_eq!(result.len(), 4);
        let file_names = names(&result);
        assert!(file_names.contains(&"page.tsx".to_string()));
        assert!(file_names.contains(&"Button.tsx".to_string()));
        assert!(file_names.contains(&"useChat.ts".to_string()));
        assert!(!file_names.contains(&"globals.css".to_string()));
        assert!(!file_names.contains(&"README".to_string()));

        Ok(())
    }

    #[test]
    fn test_walk_files__never_enters_dependency_cache() -> TestResult {
        let temp_dir = create_test_structure()?;
        let base = temp_dir.path();

        let options = options_for(vec![base.to_path_buf()]);

        for path in walk_files(&options) {
            assert!(
                !path.components().any(|c| c.as_os_str() == "node_modules"),
                "Yielded excluded path {}",
                path.display()
            );
        }
        Ok(())
    }

    #[test]
    fn test_walk_files__missing_roots_are_skipped() -> TestResult {
        let temp_dir = create_test_structure()?;
        let base = temp_dir.path();

        let options = options_for(vec![base.join("does-not-exist"), base.join("hooks")]);
        let result: Vec<PathBuf> = walk_files(&options).collect();

        assert_eq!(result, vec![base.join("hooks/useChat.ts")]);
        Ok(())
    }

    #[test]
    fn test_walk_files__file_as_root_is_skipped() -> TestResult {
        let temp_dir = create_test_structure()?;
        let options = options_for(vec![temp_dir.path().join("hooks/useChat.ts")]);

        assert_eq!(walk_files(&options).count(), 0);
        Ok(())
    }

    #[test]
    fn test_walk_files__excluded_root_is_skipped() -> TestResult {
        let temp_dir = create_test_structure()?;
        let options = options_for(vec![temp_dir.path().join("app/node_modules")]);

        assert_eq!(walk_files(&options).count(), 0);
        Ok(())
    }

    #[test]
    fn test_walk_files__ignores_gitignore_and_includes_hidden() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join(".storybook"))?;
        fs::write(base.join(".gitignore"), "generated.ts\n")?;
        fs::write(base.join("generated.ts"), "export {}")?;
        fs::write(base.join(".storybook/main.ts"), "export {}")?;

        let options = options_for(vec![base.to_path_buf()]);
        let file_names = names(&walk_files(&options).collect::<Vec<_>>());

        assert!(file_names.contains(&"generated.ts".to_string()));
        assert!(file_names.contains(&"main.ts".to_string()));
        Ok(())
    }

    #[test]
    fn test_walk_files__empty_roots() {
        let options = options_for(vec![]);
        assert_eq!(walk_files(&options).count(), 0);
    }

    #[test]
    fn test_walk_files__sorted_within_directory() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        for name in ["c.ts", "a.ts", "b.tsx"] {
            fs::write(base.join(name), "")?;
        }

        let options = options_for(vec![base.to_path_buf()]);
        let file_names = names(&walk_files(&options).collect::<Vec<_>>());

        assert_eq!(file_names, vec!["a.ts", "b.tsx", "c.ts"]);
        Ok(())
    }
}
