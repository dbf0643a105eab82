use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::common::slash_path;

/// An enumerated file.
///
/// Its identity is the `path` handle. The displayed `name` and `relative_path`
/// are derived once at creation and can't be changed afterwards.
#[derive(Clone, Debug)]
pub struct FileRecord {
    /// Handle to the file, usually its absolute path.
    path: PathBuf,
    /// Base name of the file, ie. `index.ts`.
    name: String,
    /// Path relative to the workspace root, always `/` separated, ie. `src/index.ts`.
    relative_path: String,
}

impl FileRecord {
    /// Creates a record from its handle and its path relative to the workspace root.
    pub fn new(path: PathBuf, relative_path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            relative_path: slash_path(relative_path),
            path,
        }
    }

    /// Creates a record from a path inside the `root` folder.
    ///
    /// # Errors
    ///
    /// Fails if no relative path can be built from `root` to `path`.
    pub fn from_root(root: &Path, path: PathBuf) -> Result<Self> {
        let relative = pathdiff::diff_paths(&path, root).with_context(|| {
            format!(
                "couldn't express {path} relatively to {root}",
                path = path.display(),
                root = root.display()
            )
        })?;
        Ok(Self::new(path, &relative))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }
}

impl PartialEq for FileRecord {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FileRecord {}

impl Hash for FileRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_relative_path_are_derived() {
        let record = FileRecord::new(
            PathBuf::from("/work/project/src/index.ts"),
            Path::new("src/index.ts"),
        );
        assert_eq!(record.name(), "index.ts");
        assert_eq!(record.relative_path(), "src/index.ts");
        assert_eq!(record.path(), Path::new("/work/project/src/index.ts"));
    }

    #[test]
    fn from_root_computes_the_relative_path() {
        let record = FileRecord::from_root(
            Path::new("/work/project"),
            PathBuf::from("/work/project/src/lib/mod.rs"),
        )
        .unwrap();
        assert_eq!(record.relative_path(), "src/lib/mod.rs");
        assert_eq!(record.name(), "mod.rs");
    }

    #[test]
    fn identity_is_the_handle() {
        let a = FileRecord::new(PathBuf::from("/a/b.rs"), Path::new("b.rs"));
        let same_handle = FileRecord::new(PathBuf::from("/a/b.rs"), Path::new("./b.rs"));
        let other = FileRecord::new(PathBuf::from("/c/b.rs"), Path::new("b.rs"));
        assert_eq!(a, same_handle);
        assert_ne!(a, other);
    }
}
