use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::modes::{FileEnumerator, FileRecord};
use crate::log_info;

/// Enumerates every file below a workspace root.
///
/// Entries are sorted by filename in each folder. Excluded names are pruned
/// with their whole content. Unreadable entries are skipped, an unreadable
/// root is an error.
#[derive(Clone, Debug)]
pub struct WorkspaceWalker {
    root: PathBuf,
    hidden: bool,
    follow_links: bool,
    max_depth: Option<usize>,
    excluded: Vec<String>,
}

impl WorkspaceWalker {
    /// Creates a walker for `root` using the configured settings.
    ///
    /// # Errors
    ///
    /// Fails if the root can't be canonicalized, ie. if it doesn't exist.
    pub fn new(root: &Path, config: &Config) -> Result<Self> {
        let root = std::fs::canonicalize(root)
            .with_context(|| format!("couldn't open workspace {root}", root = root.display()))?;
        Ok(Self {
            root,
            hidden: config.hidden,
            follow_links: config.follow_links,
            max_depth: config.max_depth,
            excluded: config.excluded.clone(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True if the entry and its content should be walked.
    /// The root itself is always walked.
    fn is_kept(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let Some(name) = entry.file_name().to_str() else {
            return true;
        };
        if !self.hidden && name.starts_with('.') {
            return false;
        }
        !self.excluded.iter().any(|excluded| excluded == name)
    }
}

impl FileEnumerator for WorkspaceWalker {
    fn enumerate_files(&self) -> Result<Vec<FileRecord>> {
        let mut walker = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name();
        if let Some(max_depth) = self.max_depth {
            walker = walker.max_depth(max_depth);
        }
        let mut records = vec![];
        for entry in walker.into_iter().filter_entry(|entry| self.is_kept(entry)) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) if error.depth() == 0 => {
                    return Err(error).with_context(|| {
                        format!("couldn't read {root}", root = self.root.display())
                    })
                }
                Err(error) => {
                    log_info!("skipped unreadable entry: {error}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            records.push(FileRecord::from_root(&self.root, entry.into_path())?);
        }
        log_info!(
            "enumerated {len} files in {root}",
            len = records.len(),
            root = self.root.display()
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn workspace() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::write(root.join("README.md"), "readme").unwrap();
        fs::write(root.join(".env"), "KEY=1").unwrap();
        fs::write(root.join("src/index.ts"), "").unwrap();
        fs::write(root.join("src/index.test.ts"), "").unwrap();
        fs::write(root.join(".git/HEAD"), "ref").unwrap();
        fs::write(root.join("node_modules/pkg/index.js"), "").unwrap();
        dir
    }

    fn relative_paths(walker: &WorkspaceWalker) -> Vec<String> {
        walker
            .enumerate_files()
            .unwrap()
            .iter()
            .map(|record| record.relative_path().to_owned())
            .collect()
    }

    #[test]
    fn excluded_folders_are_pruned() {
        let dir = workspace();
        let walker = WorkspaceWalker::new(dir.path(), &Config::default()).unwrap();
        assert_eq!(
            relative_paths(&walker),
            vec![".env", "README.md", "src/index.test.ts", "src/index.ts"]
        );
    }

    #[test]
    fn hidden_files_can_be_skipped() {
        let dir = workspace();
        let config = Config {
            hidden: false,
            ..Config::default()
        };
        let walker = WorkspaceWalker::new(dir.path(), &config).unwrap();
        assert!(!relative_paths(&walker).contains(&".env".to_owned()));
    }

    #[test]
    fn depth_can_be_limited() {
        let dir = workspace();
        let config = Config {
            max_depth: Some(1),
            ..Config::default()
        };
        let walker = WorkspaceWalker::new(dir.path(), &config).unwrap();
        assert_eq!(relative_paths(&walker), vec![".env", "README.md"]);
    }

    #[test]
    fn records_point_to_absolute_paths() {
        let dir = workspace();
        let walker = WorkspaceWalker::new(dir.path(), &Config::default()).unwrap();
        let records = walker.enumerate_files().unwrap();
        let readme = records
            .iter()
            .find(|record| record.name() == "README.md")
            .unwrap();
        assert!(readme.path().is_absolute());
        assert_eq!(fs::read_to_string(readme.path()).unwrap(), "readme");
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(WorkspaceWalker::new(&dir.path().join("nope"), &Config::default()).is_err());
    }

    #[test]
    fn vanished_root_fails_the_enumeration() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("ws");
        fs::create_dir(&root).unwrap();
        let walker = WorkspaceWalker::new(&root, &Config::default()).unwrap();
        fs::remove_dir(&root).unwrap();
        assert!(walker.enumerate_files().is_err());
    }
}
